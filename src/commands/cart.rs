//! Cart Commands

use crate::context::{PageContext, Platform};
use crate::error::Result;
use crate::models::ProductId;

use super::{confirm_then_submit, FormPost, Submission};

pub const REMOVE_PROMPT: &str = "Remove this item from cart?";
pub const CLEAR_PROMPT: &str = "Clear all items from cart?";

pub fn add_to_cart<D: Platform>(ctx: &PageContext<D>, product_id: ProductId, quantity: u32) -> Result<()> {
    FormPost::new("/cart/add")
        .field("productId", product_id)
        .field("quantity", quantity)
        .submit(&*ctx.dom)
}

pub fn update_cart_item<D: Platform>(
    ctx: &PageContext<D>,
    product_id: ProductId,
    quantity: u32,
) -> Result<()> {
    FormPost::new("/cart/update")
        .field("productId", product_id)
        .field("quantity", quantity)
        .submit(&*ctx.dom)
}

pub fn remove_from_cart<D: Platform>(ctx: &PageContext<D>, product_id: ProductId) -> Result<Submission> {
    confirm_then_submit(
        ctx,
        REMOVE_PROMPT,
        FormPost::new("/cart/remove").field("productId", product_id),
    )
}

pub fn clear_cart<D: Platform>(ctx: &PageContext<D>) -> Result<Submission> {
    confirm_then_submit(ctx, CLEAR_PROMPT, FormPost::new("/cart/clear"))
}
