//! Mobile Menu

use crate::context::{PageContext, Platform};
use crate::dom::Dom;

pub const NAVBAR_COLLAPSE_SELECTOR: &str = ".navbar-collapse";

/// Toggle `show` on the collapsible navbar. Returns whether the menu is open
/// afterwards; `false` when the page has no navbar.
pub fn toggle_mobile_menu<D: Platform>(ctx: &PageContext<D>) -> bool {
    match ctx.dom.query(NAVBAR_COLLAPSE_SELECTOR) {
        Some(menu) => ctx.dom.toggle_class(&menu, "show"),
        None => false,
    }
}
