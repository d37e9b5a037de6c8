//! JS Exports
//!
//! Global helpers for inline handlers in the server templates
//! (`onclick="removeFromCart(3)"` and the like). They act on the page
//! started by [`start`].

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::behaviors::{self, format_currency_input, validate_field};
use crate::browser::Browser;
use crate::commands::{self, payment, CheckoutOptions, Razorpay, Submission};
use crate::config::StoreConfig;
use crate::context::PageContext;
use crate::error::StorefrontError;
use crate::logging;
use crate::models::{OrderId, ProductId, Severity};
use crate::page::Page;

thread_local! {
    static PAGE: RefCell<Option<Page<Browser>>> = const { RefCell::new(None) };
}

/// Load config, start logging and wire the page
pub fn start(dom: Rc<Browser>) {
    let (config, config_error) = match StoreConfig::from_dom(&*dom) {
        Ok(config) => (config, None),
        Err(err) => (StoreConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        warn!(%err, "using default store config");
    }

    let page = Page::init(PageContext::new(dom, config));
    PAGE.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(page) {
            info!("replacing previously started page");
            previous.teardown();
        }
    });
}

fn with_page<R>(f: impl FnOnce(&Rc<PageContext<Browser>>) -> R) -> Result<R, StorefrontError> {
    let ctx = PAGE.with(|slot| slot.borrow().as_ref().map(|page| Rc::clone(page.context())));
    match ctx {
        Some(ctx) => Ok(f(&ctx)),
        None => Err(StorefrontError::ElementNotFound("storefront page".into())),
    }
}

/// Largest integer a JS number holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A whole JS number within `0..=max`
fn whole_number(raw: f64, max: f64) -> Option<f64> {
    (raw.is_finite() && raw.fract() == 0.0 && (0.0..=max).contains(&raw)).then_some(raw)
}

fn id_from_js(raw: f64) -> Result<u64, StorefrontError> {
    whole_number(raw, MAX_SAFE_INTEGER)
        .map(|id| id as u64)
        .ok_or_else(|| StorefrontError::Serialization(format!("invalid id {}", raw)))
}

fn quantity_from_js(raw: f64) -> Result<u32, StorefrontError> {
    whole_number(raw, f64::from(u32::MAX))
        .map(|quantity| quantity as u32)
        .ok_or_else(|| StorefrontError::Serialization(format!("invalid quantity {}", raw)))
}

fn submitted(outcome: Submission) -> bool {
    outcome == Submission::Submitted
}

// ========================
// Utilities
// ========================

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> Option<Element> {
    let severity = Severity::parse(kind.as_deref().unwrap_or("info"));
    with_page(|ctx| ctx.notify(message, severity)).ok().flatten()
}

#[wasm_bindgen(js_name = getIconForType)]
pub fn icon_for_type(kind: &str) -> String {
    Severity::parse(kind).icon().to_string()
}

#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(field: &Element) -> Result<bool, JsValue> {
    let dom = Browser::new()?;
    Ok(validate_field(&dom, field))
}

/// Numbers format directly; anything else goes through `parseFloat`
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: JsValue) -> String {
    let symbol = with_page(|ctx| ctx.config.currency_symbol.clone())
        .unwrap_or_else(|_| StoreConfig::default().currency_symbol);
    match amount.as_f64() {
        Some(value) => behaviors::format_currency(&symbol, value),
        None => format_currency_input(&symbol, &amount.as_string().unwrap_or_default()),
    }
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() -> bool {
    with_page(|ctx| behaviors::toggle_mobile_menu(ctx)).unwrap_or(false)
}

#[wasm_bindgen(js_name = pulseCartBadge)]
pub fn pulse_cart_badge() {
    let _ = with_page(|ctx| ctx.pulse_cart_badge());
}

// ========================
// Commands
// ========================

#[wasm_bindgen(js_name = initializeRazorpayPayment)]
pub fn initialize_razorpay_payment(options: JsValue) -> Result<(), JsValue> {
    // The widget gets the object as given; the typed view only drives verification.
    let mut typed = serde_wasm_bindgen::from_value::<CheckoutOptions>(options.clone())
        .unwrap_or_else(|err| {
            warn!(%err, "checkout options not understood, forwarding them as given");
            CheckoutOptions::default()
        });
    typed.caller_handler = js_sys::Reflect::get(&options, &JsValue::from_str("handler"))
        .map(|handler| handler.is_function())
        .unwrap_or(false);
    let gateway = Razorpay::forwarding(&options);
    with_page(|ctx| payment::initialize_payment(ctx, &gateway, &typed))??;
    Ok(())
}

#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(product_id: f64, quantity: f64) -> Result<(), JsValue> {
    let id = ProductId(id_from_js(product_id)?);
    let quantity = quantity_from_js(quantity)?;
    with_page(|ctx| commands::add_to_cart(ctx, id, quantity))??;
    Ok(())
}

#[wasm_bindgen(js_name = updateCartItem)]
pub fn update_cart_item(product_id: f64, quantity: f64) -> Result<(), JsValue> {
    let id = ProductId(id_from_js(product_id)?);
    let quantity = quantity_from_js(quantity)?;
    with_page(|ctx| commands::update_cart_item(ctx, id, quantity))??;
    Ok(())
}

#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(product_id: f64) -> Result<bool, JsValue> {
    let id = ProductId(id_from_js(product_id)?);
    Ok(submitted(with_page(|ctx| commands::remove_from_cart(ctx, id))??))
}

#[wasm_bindgen(js_name = clearCart)]
pub fn clear_cart() -> Result<bool, JsValue> {
    Ok(submitted(with_page(|ctx| commands::clear_cart(ctx))??))
}

#[wasm_bindgen(js_name = addToWishlist)]
pub fn add_to_wishlist(product_id: f64) -> Result<(), JsValue> {
    let id = ProductId(id_from_js(product_id)?);
    with_page(|ctx| commands::add_to_wishlist(ctx, id))??;
    Ok(())
}

#[wasm_bindgen(js_name = removeFromWishlist)]
pub fn remove_from_wishlist(product_id: f64) -> Result<(), JsValue> {
    let id = ProductId(id_from_js(product_id)?);
    with_page(|ctx| commands::remove_from_wishlist(ctx, id))??;
    Ok(())
}

#[wasm_bindgen(js_name = clearWishlist)]
pub fn clear_wishlist() -> Result<bool, JsValue> {
    Ok(submitted(with_page(|ctx| commands::clear_wishlist(ctx))??))
}

#[wasm_bindgen(js_name = moveWishlistItemToCart)]
pub fn move_wishlist_item_to_cart(product_id: f64) -> Result<(), JsValue> {
    let id = ProductId(id_from_js(product_id)?);
    with_page(|ctx| commands::move_wishlist_item_to_cart(ctx, id))??;
    Ok(())
}

#[wasm_bindgen(js_name = cancelOrder)]
pub fn cancel_order(order_id: f64) -> Result<bool, JsValue> {
    let id = OrderId(id_from_js(order_id)?);
    Ok(submitted(with_page(|ctx| commands::cancel_order(ctx, id))??))
}

#[wasm_bindgen(js_name = performSearch)]
pub fn perform_search(query: &str) -> Result<bool, JsValue> {
    Ok(with_page(|ctx| commands::perform_search(ctx, query))??)
}
