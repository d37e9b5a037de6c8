//! Page Context
//!
//! Shared state handed to every behaviour and command: the DOM backend, the
//! page's timer scope and the loaded configuration.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::config::StoreConfig;
use crate::dom::Dom;
use crate::models::Severity;
use crate::notify;
use crate::timers::{TimerDriver, TimerScope};

/// A backend that provides both the document and timers
pub trait Platform: Dom + TimerDriver + 'static {}

impl<T: Dom + TimerDriver + 'static> Platform for T {}

pub const CART_BADGE_SELECTOR: &str = ".badge";

pub struct PageContext<D: Platform> {
    pub dom: Rc<D>,
    pub timers: TimerScope<D>,
    pub config: StoreConfig,
    /// Called with the search text once typing settles
    search_settled: RefCell<Option<Rc<dyn Fn(&str)>>>,
}

impl<D: Platform> PageContext<D> {
    pub fn new(dom: Rc<D>, config: StoreConfig) -> Rc<Self> {
        Rc::new(Self {
            timers: TimerScope::new(Rc::clone(&dom)),
            dom,
            config,
            search_settled: RefCell::new(None),
        })
    }

    /// Show a floating alert that closes itself
    pub fn notify(&self, message: &str, severity: Severity) -> Option<D::Node> {
        notify::show_notification(self, message, severity)
    }

    /// Hook for search suggestions; replaces any previous hook
    pub fn on_search_settled(&self, hook: impl Fn(&str) + 'static) {
        *self.search_settled.borrow_mut() = Some(Rc::new(hook));
    }

    pub(crate) fn search_settled(&self, query: &str) {
        let hook = self.search_settled.borrow().clone();
        match hook {
            Some(hook) => hook(query),
            None => trace!(query, "search input settled"),
        }
    }

    /// Briefly scale up the cart count badge
    pub fn pulse_cart_badge(&self) {
        let Some(badge) = self.dom.query(CART_BADGE_SELECTOR) else {
            return;
        };
        self.dom.set_style(&badge, "transform", "scale(1.2)");
        let dom = Rc::clone(&self.dom);
        self.timers.schedule(self.config.badge_pulse_ms, move || {
            dom.set_style(&badge, "transform", "scale(1)");
        });
    }
}
