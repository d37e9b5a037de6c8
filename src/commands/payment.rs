//! Payment Checkout
//!
//! Opens the hosted Razorpay checkout. The widget is reached through
//! [`PaymentGateway`] so checkout flows can be exercised without the script.

use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::context::{PageContext, Platform};
use crate::error::{Result, StorefrontError};
use crate::models::{OrderId, Severity};

use super::FormPost;

pub const GATEWAY_MISSING_MESSAGE: &str = "Payment gateway not loaded. Please refresh the page.";
pub const PAYMENT_FAILED_MESSAGE: &str = "Payment failed. Please try again.";
pub const VERIFY_ACTION: &str = "/checkout/payment/verify";

/// Key of the store order id in the options object and in `notes`
const STORE_ORDER_KEY: &str = "storeOrderId";

// ========================
// Checkout Options
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub color: String,
}

/// Options handed to the checkout widget. `amount` is in the currency's
/// smallest unit (paise for INR) and may arrive as a numeric string.
///
/// Fields the page passes that are not listed here travel to the widget
/// untouched through [`Razorpay::forwarding`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutOptions {
    pub key: String,
    #[serde(deserialize_with = "whole_number")]
    pub amount: u64,
    pub currency: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Gateway order created by the server for this checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefill: Option<Prefill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub notes: Map<String, Value>,
    /// Store order this payment settles. Posted for verification, never
    /// sent to the widget.
    #[serde(rename = "storeOrderId", skip_serializing, deserialize_with = "optional_whole_number")]
    pub store_order_id: Option<u64>,
    /// The page registered its own success `handler`
    #[serde(skip)]
    pub caller_handler: bool,
}

impl CheckoutOptions {
    /// `storeOrderId`, or `notes.storeOrderId` / `notes.orderId`
    pub fn store_order(&self) -> Option<OrderId> {
        self.store_order_id
            .or_else(|| {
                [STORE_ORDER_KEY, "orderId"]
                    .iter()
                    .find_map(|key| self.notes.get(*key).and_then(whole_from_value))
            })
            .map(OrderId)
    }
}

/// JSON number or numeric string holding a non-negative whole number
fn whole_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    whole_from_value(&value).ok_or_else(|| de::Error::custom(format!("not a whole number: {}", value)))
}

fn optional_whole_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<u64>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => whole_from_value(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("not a whole number: {}", value))),
    }
}

// ========================
// Callback Payloads
// ========================

/// Payload of the widget's success handler
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentSuccess {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

/// `error` object of a `payment.failed` event
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentFailure {
    pub code: Option<String>,
    pub description: Option<String>,
    pub reason: Option<String>,
}

pub struct CheckoutCallbacks {
    /// `None` when the page handles success itself
    pub on_success: Option<Box<dyn FnOnce(PaymentSuccess)>>,
    pub on_failure: Box<dyn Fn(PaymentFailure)>,
}

pub trait PaymentGateway {
    /// Whether the checkout script is present on the page
    fn is_loaded(&self) -> bool;

    /// Create a checkout session and show it
    fn open(&self, options: &CheckoutOptions, callbacks: CheckoutCallbacks) -> Result<()>;
}

// ========================
// Checkout Flow
// ========================

/// Open checkout for `options`.
///
/// Without the gateway script the shopper gets a danger notification and
/// nothing is created. A completed payment posts the store order and the
/// gateway identifiers to the verification route, unless the page brought
/// its own success handler. A failed one only notifies.
pub fn initialize_payment<D, G>(
    ctx: &Rc<PageContext<D>>,
    gateway: &G,
    options: &CheckoutOptions,
) -> Result<()>
where
    D: Platform,
    G: PaymentGateway + ?Sized,
{
    if !gateway.is_loaded() {
        ctx.notify(GATEWAY_MISSING_MESSAGE, Severity::Danger);
        return Err(StorefrontError::GatewayUnavailable);
    }

    let on_success: Option<Box<dyn FnOnce(PaymentSuccess)>> = if options.caller_handler {
        None
    } else {
        let success_ctx = Rc::clone(ctx);
        let store_order = options.store_order();
        Some(Box::new(move |payment: PaymentSuccess| {
            info!(payment_id = %payment.razorpay_payment_id, "payment completed");
            let Some(order) = store_order else {
                warn!("checkout has no store order id, skipping verification");
                return;
            };
            if let Err(err) = verification_post(order, &payment).submit(&*success_ctx.dom) {
                warn!(%err, "could not submit payment verification");
            }
        }))
    };

    let failure_ctx = Rc::clone(ctx);
    let callbacks = CheckoutCallbacks {
        on_success,
        on_failure: Box::new(move |failure: PaymentFailure| {
            warn!(
                code = failure.code.as_deref().unwrap_or(""),
                reason = failure.reason.as_deref().unwrap_or(""),
                "payment failed"
            );
            failure_ctx.notify(PAYMENT_FAILED_MESSAGE, Severity::Danger);
        }),
    };

    gateway.open(options, callbacks)
}

/// The verification route looks the order up by the store's numeric id,
/// sent as `razorpayOrderId`.
pub fn verification_post(order: OrderId, payment: &PaymentSuccess) -> FormPost {
    FormPost::new(VERIFY_ACTION)
        .field("razorpayOrderId", order)
        .field("razorpayPaymentId", &payment.razorpay_payment_id)
        .field("razorpaySignature", &payment.razorpay_signature)
}

// ========================
// Razorpay Widget
// ========================

/// The global `Razorpay` constructor from checkout.js
#[derive(Debug, Clone, Default)]
pub struct Razorpay {
    /// Options object exactly as the page passed it
    passthrough: Option<Object>,
}

impl Razorpay {
    /// Send the page's own options object along, so fields
    /// [`CheckoutOptions`] does not model (`modal`, `retry`, callbacks)
    /// reach the widget unchanged.
    pub fn forwarding(options: &JsValue) -> Self {
        Self {
            passthrough: options.dyn_ref::<Object>().cloned(),
        }
    }

    fn constructor() -> Option<Function> {
        Reflect::get(&js_sys::global(), &JsValue::from_str("Razorpay"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    }
}

impl PaymentGateway for Razorpay {
    fn is_loaded(&self) -> bool {
        Self::constructor().is_some()
    }

    fn open(&self, options: &CheckoutOptions, callbacks: CheckoutCallbacks) -> Result<()> {
        let constructor = Self::constructor().ok_or(StorefrontError::GatewayUnavailable)?;
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_options: Object = options.serialize(&serializer)?.dyn_into()?;
        if let Some(raw) = &self.passthrough {
            Object::assign(&js_options, raw);
            Reflect::delete_property(&js_options, &JsValue::from_str(STORE_ORDER_KEY))?;
        }

        let CheckoutCallbacks {
            on_success,
            on_failure,
        } = callbacks;

        if let Some(on_success) = on_success {
            let mut on_success = Some(on_success);
            let handler = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
                let Some(on_success) = on_success.take() else {
                    return;
                };
                match serde_wasm_bindgen::from_value::<PaymentSuccess>(response) {
                    Ok(payment) => on_success(payment),
                    Err(err) => warn!(%err, "unreadable payment response"),
                }
            });
            Reflect::set(&js_options, &JsValue::from_str("handler"), handler.as_ref())?;
            handler.forget();
        }

        let instance = Reflect::construct(&constructor, &Array::of1(&js_options))?;

        let failed = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let failure = Reflect::get(&response, &JsValue::from_str("error"))
                .ok()
                .and_then(|error| serde_wasm_bindgen::from_value::<PaymentFailure>(error).ok())
                .unwrap_or_default();
            on_failure(failure);
        });
        let on: Function = Reflect::get(&instance, &JsValue::from_str("on"))?.dyn_into()?;
        on.call2(&instance, &JsValue::from_str("payment.failed"), failed.as_ref())?;
        failed.forget();

        let open: Function = Reflect::get(&instance, &JsValue::from_str("open"))?.dyn_into()?;
        open.call0(&instance)?;
        Ok(())
    }
}
