//! Order Commands

use crate::context::{PageContext, Platform};
use crate::error::Result;
use crate::models::OrderId;

use super::{confirm_then_submit, FormPost, Submission};

pub const CANCEL_PROMPT: &str = "Cancel this order?";

pub fn cancel_order<D: Platform>(ctx: &PageContext<D>, order_id: OrderId) -> Result<Submission> {
    confirm_then_submit(
        ctx,
        CANCEL_PROMPT,
        FormPost::new(format!("/orders/{}/cancel", order_id)),
    )
}
