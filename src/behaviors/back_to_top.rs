//! Back To Top
//!
//! Floating round button that shows up once the page is scrolled past the
//! configured threshold.

use std::rc::Rc;

use tracing::warn;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};
use crate::error::Result;

pub const BUTTON_HTML: &str = r#"<i class="fas fa-arrow-up"></i>"#;
pub const BUTTON_CLASS: &str = "btn btn-primary position-fixed";
pub const BUTTON_STYLE: &str = "bottom: 20px; right: 20px; z-index: 1000; border-radius: 50%; width: 50px; height: 50px; display: none;";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) -> Option<D::Node> {
    match create_button(ctx) {
        Ok(button) => Some(button),
        Err(err) => {
            warn!(%err, "could not add back-to-top button");
            None
        }
    }
}

fn create_button<D: Platform>(ctx: &Rc<PageContext<D>>) -> Result<D::Node> {
    let dom = &ctx.dom;
    let button = dom.create_element("button")?;
    dom.set_inner_html(&button, BUTTON_HTML);
    dom.set_class_name(&button, BUTTON_CLASS);
    dom.set_style_text(&button, BUTTON_STYLE);
    dom.set_attribute(&button, "aria-label", "Back to top")?;
    dom.append_to_body(&button)?;

    let scroll_dom = Rc::clone(dom);
    let target = button.clone();
    let threshold = ctx.config.back_to_top_threshold_px;
    dom.listen_window(
        "scroll",
        listener(move |_| {
            let display = if scroll_dom.scroll_offset() > threshold {
                "block"
            } else {
                "none"
            };
            scroll_dom.set_style(&target, "display", display);
        }),
    );

    let click_dom = Rc::clone(dom);
    dom.listen(&button, "click", listener(move |_| click_dom.scroll_to_top()));

    Ok(button)
}
