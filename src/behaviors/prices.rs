//! Price Formatting
//!
//! Rewrites `.price` text in the store's currency format.

use std::rc::Rc;

use number_format::{keep_numeric, parse_float};
use tracing::trace;

use crate::context::{PageContext, Platform};
use crate::dom::Dom;

pub const PRICE_SELECTOR: &str = ".price";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    let symbol = &ctx.config.currency_symbol;
    for node in ctx.dom.query_all(PRICE_SELECTOR) {
        let text = ctx.dom.text_content(&node);
        match parse_price(&text) {
            Some(amount) => ctx.dom.set_text_content(&node, &format_currency(symbol, amount)),
            None => trace!(text = %text, "skipping unparsable price"),
        }
    }
}

/// Digits, `.` and `-` from `text`, read as a float. `None` when that is NaN.
pub fn parse_price(text: &str) -> Option<f64> {
    let amount = parse_float(&keep_numeric(text));
    (!amount.is_nan()).then_some(amount)
}

/// `symbol` followed by the en-IN grouped amount, two decimals
pub fn format_currency(symbol: &str, amount: f64) -> String {
    number_format::format_currency(symbol, amount)
}

/// Like [`format_currency`] for raw text; non-numeric text gives `{symbol}NaN`
pub fn format_currency_input(symbol: &str, raw: &str) -> String {
    format_currency(symbol, parse_float(raw))
}
