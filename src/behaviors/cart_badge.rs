//! Cart Badge
//!
//! Pulses the cart count badge whenever its content changes.

use std::rc::Rc;

use tracing::warn;

use crate::context::{PageContext, Platform, CART_BADGE_SELECTOR};
use crate::dom::Dom;

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    let Some(badge) = ctx.dom.query(CART_BADGE_SELECTOR) else {
        return;
    };
    let pulse_ctx = Rc::clone(ctx);
    if let Err(err) = ctx
        .dom
        .observe_changes(&badge, Rc::new(move || pulse_ctx.pulse_cart_badge()))
    {
        warn!(%err, "cannot watch cart badge");
    }
}
