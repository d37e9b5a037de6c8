//! Storefront Commands
//!
//! Actions the page triggers against server routes. Routes take ordinary
//! form posts, so each command builds a hidden `<form>`, appends it to the
//! body and submits it (a full page navigation).

pub mod cart;
pub mod order;
pub mod payment;
pub mod search;
pub mod wishlist;

use tracing::debug;

use crate::context::{PageContext, Platform};
use crate::dom::Dom;
use crate::error::Result;

pub use cart::{add_to_cart, clear_cart, remove_from_cart, update_cart_item};
pub use order::cancel_order;
pub use payment::{initialize_payment, CheckoutOptions, PaymentGateway, Razorpay};
pub use search::perform_search;
pub use wishlist::{
    add_to_wishlist, clear_wishlist, move_wishlist_item_to_cart, remove_from_wishlist,
};

// ========================
// Form Posts
// ========================

/// A `POST` to `action` with hidden string fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPost {
    action: String,
    fields: Vec<(String, String)>,
}

impl FormPost {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Build the form in the document and submit it
    pub fn submit<D: Dom>(&self, dom: &D) -> Result<()> {
        let form = dom.create_element("form")?;
        dom.set_attribute(&form, "method", "POST")?;
        dom.set_attribute(&form, "action", &self.action)?;

        for (name, value) in &self.fields {
            let input = dom.create_element("input")?;
            dom.set_attribute(&input, "type", "hidden")?;
            dom.set_attribute(&input, "name", name)?;
            dom.set_attribute(&input, "value", value)?;
            dom.append_child(&form, &input)?;
        }

        dom.append_to_body(&form)?;
        debug!(action = %self.action, fields = self.fields.len(), "submitting form");
        dom.submit(&form)
    }
}

/// Outcome of a command that asks the shopper first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Submitted,
    Cancelled,
}

/// Submit `post` only if the shopper accepts `message`
pub fn confirm_then_submit<D: Platform>(
    ctx: &PageContext<D>,
    message: &str,
    post: FormPost,
) -> Result<Submission> {
    if !ctx.dom.confirm(message) {
        debug!(action = %post.action(), "shopper cancelled");
        return Ok(Submission::Cancelled);
    }
    post.submit(&*ctx.dom)?;
    Ok(Submission::Submitted)
}
