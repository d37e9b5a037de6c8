//! Number Format Utilities
//!
//! Number parsing with the same leniency as the browser's `parseInt` /
//! `parseFloat`, and Indian-locale (en-IN) currency rendering.

mod currency;
mod parse;

pub use currency::{format_currency, format_grouped};
pub use parse::{keep_numeric, parse_float, parse_int};
