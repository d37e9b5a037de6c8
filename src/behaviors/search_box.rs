//! Search Box
//!
//! Debounces typing in the header search input. Once typing settles the
//! text goes to the page's search hook (see
//! [`PageContext::on_search_settled`]).

use std::rc::Rc;

use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};
use crate::timers::debounce;

pub const SEARCH_INPUT_SELECTOR: &str = r#"input[name="search"]"#;

/// Returns `false` when the page has no search input
pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) -> bool {
    let Some(input) = ctx.dom.query(SEARCH_INPUT_SELECTOR) else {
        return false;
    };

    let hook_ctx = Rc::clone(ctx);
    let settle = debounce(
        ctx.timers.clone(),
        ctx.config.search_debounce_ms,
        move |query: String| hook_ctx.search_settled(&query),
    );

    let dom = Rc::clone(&ctx.dom);
    let source = input.clone();
    ctx.dom
        .listen(&input, "input", listener(move |_| settle(dom.value(&source))));
    true
}
