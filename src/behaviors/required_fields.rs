//! Required Fields
//!
//! Bootstrap validation classes for required inputs: checked when the field
//! loses focus, then live while it is marked invalid.

use std::rc::Rc;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};

pub const REQUIRED_FIELD_SELECTOR: &str = "input[required], textarea[required], select[required]";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    for field in ctx.dom.query_all(REQUIRED_FIELD_SELECTOR) {
        let dom = Rc::clone(&ctx.dom);
        let source = field.clone();
        ctx.dom.listen(
            &field,
            "blur",
            listener(move |_| {
                validate_field(&*dom, &source);
            }),
        );

        let dom = Rc::clone(&ctx.dom);
        let source = field.clone();
        ctx.dom.listen(
            &field,
            "input",
            listener(move |_| {
                if dom.has_class(&source, "is-invalid") {
                    validate_field(&*dom, &source);
                }
            }),
        );
    }
}

/// Mark `field` valid when its trimmed value is non-empty
pub fn validate_field<D: Dom>(dom: &D, field: &D::Node) -> bool {
    let filled = !dom.value(field).trim().is_empty();
    if filled {
        dom.remove_class(field, "is-invalid");
        dom.add_class(field, "is-valid");
    } else {
        dom.remove_class(field, "is-valid");
        dom.add_class(field, "is-invalid");
    }
    filled
}
