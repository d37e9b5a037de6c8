//! Wishlist Commands

use crate::context::{PageContext, Platform};
use crate::error::Result;
use crate::models::ProductId;

use super::{confirm_then_submit, FormPost, Submission};

pub const CLEAR_PROMPT: &str = "Clear all items from wishlist?";

fn post_product<D: Platform>(ctx: &PageContext<D>, action: &str, product_id: ProductId) -> Result<()> {
    FormPost::new(action)
        .field("productId", product_id)
        .submit(&*ctx.dom)
}

pub fn add_to_wishlist<D: Platform>(ctx: &PageContext<D>, product_id: ProductId) -> Result<()> {
    post_product(ctx, "/wishlist/add", product_id)
}

pub fn remove_from_wishlist<D: Platform>(ctx: &PageContext<D>, product_id: ProductId) -> Result<()> {
    post_product(ctx, "/wishlist/remove", product_id)
}

pub fn move_wishlist_item_to_cart<D: Platform>(ctx: &PageContext<D>, product_id: ProductId) -> Result<()> {
    post_product(ctx, "/wishlist/move-to-cart", product_id)
}

pub fn clear_wishlist<D: Platform>(ctx: &PageContext<D>) -> Result<Submission> {
    confirm_then_submit(ctx, CLEAR_PROMPT, FormPost::new("/wishlist/clear"))
}
