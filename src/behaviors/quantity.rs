//! Quantity Clamp
//!
//! Keeps `input[name="quantity"]` within its `min`/`max` attributes and warns
//! when a request exceeds available stock.

use std::rc::Rc;

use number_format::parse_int;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};
use crate::models::Severity;

pub const QUANTITY_SELECTOR: &str = r#"input[name="quantity"]"#;

/// Result of checking a quantity against its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    Unchanged,
    RaisedToMin(i64),
    CappedAtMax(i64),
}

/// Compare `value` against the bounds. A missing operand (unparsable text)
/// fails its comparison, so the value is left alone.
pub fn clamp_quantity(value: Option<i64>, min: Option<i64>, max: Option<i64>) -> Clamp {
    let Some(value) = value else {
        return Clamp::Unchanged;
    };
    match (min, max) {
        (Some(min), _) if value < min => Clamp::RaisedToMin(min),
        (_, Some(max)) if value > max => Clamp::CappedAtMax(max),
        _ => Clamp::Unchanged,
    }
}

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    for input in ctx.dom.query_all(QUANTITY_SELECTOR) {
        let handler_ctx = Rc::clone(ctx);
        let source = input.clone();
        ctx.dom.listen(
            &input,
            "change",
            listener(move |_| {
                apply_clamp(&handler_ctx, &source);
            }),
        );
    }
}

/// Clamp the input's current value in place
pub fn apply_clamp<D: Platform>(ctx: &PageContext<D>, input: &D::Node) -> Clamp {
    let dom = &ctx.dom;
    let bound = |name: &str| dom.attribute(input, name).and_then(|v| parse_int(&v));
    let outcome = clamp_quantity(parse_int(&dom.value(input)), bound("min"), bound("max"));

    match outcome {
        Clamp::RaisedToMin(min) => dom.set_value(input, &min.to_string()),
        Clamp::CappedAtMax(max) => {
            dom.set_value(input, &max.to_string());
            ctx.notify(
                &format!("Maximum available quantity is {}", max),
                Severity::Warning,
            );
        }
        Clamp::Unchanged => {}
    }
    outcome
}
