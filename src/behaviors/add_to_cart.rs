//! Add-to-cart Feedback
//!
//! Cosmetic "Added!" state on the add-to-cart buttons. It shows on click and
//! does not wait for the form submission.

use std::cell::RefCell;
use std::rc::Rc;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};

pub const ADD_TO_CART_SELECTOR: &str = r#"form[action*="/cart/add"] button"#;

pub const ADDED_HTML: &str = r#"<i class="fas fa-check me-1"></i>Added!"#;

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    for button in ctx.dom.query_all(ADD_TO_CART_SELECTOR) {
        let handler_ctx = Rc::clone(ctx);
        let source = button.clone();
        let original: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
        ctx.dom.listen(
            &button,
            "click",
            listener(move |_| show_added(&handler_ctx, &source, &original)),
        );
    }
}

fn show_added<D: Platform>(
    ctx: &Rc<PageContext<D>>,
    button: &D::Node,
    original: &Rc<RefCell<Option<String>>>,
) {
    // Already showing; keep the first label
    if original.borrow().is_some() {
        return;
    }
    let dom = &ctx.dom;
    *original.borrow_mut() = Some(dom.inner_html(button));
    dom.set_inner_html(button, ADDED_HTML);
    dom.add_class(button, "btn-success");
    dom.remove_class(button, "btn-primary");

    let dom = Rc::clone(&ctx.dom);
    let button = button.clone();
    let original = Rc::clone(original);
    ctx.timers.schedule(ctx.config.add_to_cart_feedback_ms, move || {
        if let Some(label) = original.borrow_mut().take() {
            dom.set_inner_html(&button, &label);
        }
        dom.remove_class(&button, "btn-success");
        dom.add_class(&button, "btn-primary");
    });
}
