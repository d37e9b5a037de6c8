//! Smooth scrolling for same-page anchor links.

use std::rc::Rc;

use tracing::trace;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    for link in ctx.dom.query_all(ANCHOR_SELECTOR) {
        let dom = Rc::clone(&ctx.dom);
        let source = link.clone();
        ctx.dom.listen(
            &link,
            "click",
            listener(move |ev| {
                ev.prevent_default();
                let Some(href) = dom.attribute(&source, "href") else {
                    return;
                };
                // The fragment doubles as an id selector
                match dom.query(&href) {
                    Some(target) => dom.scroll_into_view(&target),
                    None => trace!(%href, "anchor target missing"),
                }
            }),
        );
    }
}
