//! Search Command

use tracing::debug;

use crate::context::{PageContext, Platform};
use crate::dom::Dom;
use crate::error::Result;

pub const SEARCH_FORM_SELECTOR: &str = r#"form[action="/products"]"#;
pub const SEARCH_FIELD_SELECTOR: &str = r#"input[name="search"]"#;

/// Put `query` in the product search form and submit it.
///
/// Returns `Ok(false)` when the query is too short or the page has no
/// search form.
pub fn perform_search<D: Platform>(ctx: &PageContext<D>, query: &str) -> Result<bool> {
    // Length in UTF-16 code units, as the browser counts it
    if query.encode_utf16().count() < ctx.config.min_search_len {
        return Ok(false);
    }

    let dom = &ctx.dom;
    let Some(form) = dom.query(SEARCH_FORM_SELECTOR) else {
        debug!("no product search form on page");
        return Ok(false);
    };
    let Some(input) = dom.query_in(&form, SEARCH_FIELD_SELECTOR) else {
        debug!("search form has no search field");
        return Ok(false);
    };

    dom.set_value(&input, query);
    dom.submit(&form)?;
    Ok(true)
}
