//! Storefront Configuration
//!
//! Delays, thresholds and display settings. Pages may override any field
//! with a JSON block:
//!
//! ```html
//! <script type="application/json" id="storefront-config">
//!   { "logLevel": "debug", "searchDebounceMs": 250 }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::dom::Dom;
use crate::error::{Result, StorefrontError};

/// Element holding the JSON overrides
pub const CONFIG_SELECTOR: &str = "script#storefront-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub currency_symbol: String,
    /// `trace` | `debug` | `info` | `warn` | `error`
    pub log_level: String,
    pub alert_dismiss_ms: u32,
    pub notification_dismiss_ms: u32,
    /// Fallback re-enable of a submit button, not tied to any response
    pub submit_reenable_ms: u32,
    /// Per-card delay; card `i` fades in after `i * card_stagger_ms`
    pub card_stagger_ms: u32,
    pub add_to_cart_feedback_ms: u32,
    pub search_debounce_ms: u32,
    pub badge_pulse_ms: u32,
    pub back_to_top_threshold_px: f64,
    /// Shorter queries are ignored by `perform_search` (UTF-16 units)
    pub min_search_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            log_level: "info".to_string(),
            alert_dismiss_ms: 5000,
            notification_dismiss_ms: 5000,
            submit_reenable_ms: 10000,
            card_stagger_ms: 100,
            add_to_cart_feedback_ms: 2000,
            search_debounce_ms: 300,
            badge_pulse_ms: 200,
            back_to_top_threshold_px: 300.0,
            min_search_len: 2,
        }
    }
}

impl StoreConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| StorefrontError::Config(e.to_string()))
    }

    /// Read overrides from the page; no config element means defaults.
    pub fn from_dom<D: Dom>(dom: &D) -> Result<Self> {
        match dom.query(CONFIG_SELECTOR) {
            Some(node) => Self::from_json(&dom.text_content(&node)),
            None => Ok(Self::default()),
        }
    }
}
