//! Submit Spinner
//!
//! Swaps a form's submit button for a disabled spinner while the browser
//! navigates, with a timed fallback that restores it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};

pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

pub const SPINNER_HTML: &str = r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>Processing..."#;

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    let forms = ctx.dom.query_all("form");
    debug!(count = forms.len(), "wiring submit spinners");
    for form in forms {
        let handler_ctx = Rc::clone(ctx);
        let source = form.clone();
        // Label to restore; `Some` while the spinner is showing
        let original: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
        ctx.dom.listen(
            &form,
            "submit",
            listener(move |_| show_spinner(&handler_ctx, &source, &original)),
        );
    }
}

fn show_spinner<D: Platform>(
    ctx: &Rc<PageContext<D>>,
    form: &D::Node,
    original: &Rc<RefCell<Option<String>>>,
) {
    let dom = &ctx.dom;
    let Some(button) = dom.query_in(form, SUBMIT_BUTTON_SELECTOR) else {
        return;
    };
    if original.borrow().is_some() {
        return;
    }

    *original.borrow_mut() = Some(dom.inner_html(&button));
    dom.set_inner_html(&button, SPINNER_HTML);
    dom.set_disabled(&button, true);

    let dom = Rc::clone(&ctx.dom);
    let original = Rc::clone(original);
    ctx.timers.schedule(ctx.config.submit_reenable_ms, move || {
        if let Some(label) = original.borrow_mut().take() {
            dom.set_inner_html(&button, &label);
        }
        dom.set_disabled(&button, false);
    });
}
