//! Staggered fade-in of `.card` elements.

use std::rc::Rc;

use crate::context::{PageContext, Platform};
use crate::dom::Dom;

pub const CARD_SELECTOR: &str = ".card";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    let stagger = ctx.config.card_stagger_ms;
    for (index, card) in ctx.dom.query_all(CARD_SELECTOR).into_iter().enumerate() {
        ctx.dom.set_style(&card, "opacity", "0");
        ctx.dom.set_style(&card, "transform", "translateY(20px)");

        let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger);
        let dom = Rc::clone(&ctx.dom);
        ctx.timers.schedule(delay, move || {
            dom.set_style(&card, "transition", "all 0.5s ease");
            dom.set_style(&card, "opacity", "1");
            dom.set_style(&card, "transform", "translateY(0)");
        });
    }
}
