//! Confirmation Buttons
//!
//! Destructive buttons marked with an inline `confirm` handler ask first and
//! cancel the click when the shopper declines.

use std::rc::Rc;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};

pub const CONFIRM_BUTTON_SELECTOR: &str = r#"button[onclick*="confirm"]"#;
pub const DEFAULT_PROMPT: &str = "Are you sure?";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    for button in ctx.dom.query_all(CONFIRM_BUTTON_SELECTOR) {
        let dom = Rc::clone(&ctx.dom);
        let source = button.clone();
        ctx.dom.listen(
            &button,
            "click",
            listener(move |event| {
                let message = prompt_for(&*dom, &source);
                if !dom.confirm(&message) {
                    event.prevent_default();
                }
            }),
        );
    }
}

/// `data-confirm` when set and non-empty
fn prompt_for<D: Dom>(dom: &D, button: &D::Node) -> String {
    dom.attribute(button, "data-confirm")
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
}
