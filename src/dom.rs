//! DOM Abstraction
//!
//! Everything the storefront does to the page goes through [`Dom`], so
//! behaviours run against the real browser or an in-memory document alike.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::Result;

/// Bootstrap widgets created from `data-bs-toggle` markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Tooltip,
    Popover,
}

impl Widget {
    /// Constructor name under the global `bootstrap` object
    pub fn class_name(self) -> &'static str {
        match self {
            Widget::Tooltip => "Tooltip",
            Widget::Popover => "Popover",
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Widget::Tooltip => r#"[data-bs-toggle="tooltip"]"#,
            Widget::Popover => r#"[data-bs-toggle="popover"]"#,
        }
    }
}

/// Event handed to listeners. Backends apply `prevent_default` to the
/// native event once the listener returns.
#[derive(Debug)]
pub struct DomEvent {
    kind: String,
    persisted: bool,
    default_prevented: Cell<bool>,
}

impl DomEvent {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            persisted: false,
            default_prevented: Cell::new(false),
        }
    }

    /// `pagehide`/`pageshow` event; `persisted` is set when the page goes
    /// into (or comes back from) the back/forward cache.
    pub fn page_transition(kind: &str, persisted: bool) -> Self {
        Self {
            persisted,
            ..Self::new(kind)
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn persisted(&self) -> bool {
        self.persisted
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

pub type Listener = Rc<dyn Fn(&DomEvent)>;

/// Box a closure as a [`Listener`]
pub fn listener(f: impl Fn(&DomEvent) + 'static) -> Listener {
    Rc::new(f)
}

/// Document and window operations used by the storefront.
///
/// Lookups that find nothing (or get an invalid selector) return `None` /
/// an empty list; mutations on detached or unsuitable nodes are ignored.
pub trait Dom {
    type Node: Clone + 'static;

    // ========================
    // Queries
    // ========================

    fn query(&self, selector: &str) -> Option<Self::Node>;

    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    // ========================
    // Tree
    // ========================

    fn create_element(&self, tag: &str) -> Result<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    fn append_to_body(&self, node: &Self::Node) -> Result<()>;

    fn remove(&self, node: &Self::Node);

    // ========================
    // Attributes, classes, content
    // ========================

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Returns whether the class is present afterwards
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_class_name(&self, node: &Self::Node, class_name: &str);

    fn inner_html(&self, node: &Self::Node) -> String;

    fn set_inner_html(&self, node: &Self::Node, html: &str);

    fn text_content(&self, node: &Self::Node) -> String;

    fn set_text_content(&self, node: &Self::Node, text: &str);

    /// Current value of an input, textarea or select
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&self, node: &Self::Node, value: &str);

    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Replace the whole inline style
    fn set_style_text(&self, node: &Self::Node, css: &str);

    // ========================
    // Events and observers
    // ========================

    fn listen(&self, node: &Self::Node, event: &str, listener: Listener);

    fn listen_window(&self, event: &str, listener: Listener);

    /// Run `on_visible` the first time `node` enters the viewport, then stop
    /// observing it.
    fn observe_visible(&self, node: &Self::Node, on_visible: Box<dyn FnOnce()>) -> Result<()>;

    /// Run `on_change` whenever children or text under `node` change
    fn observe_changes(&self, node: &Self::Node, on_change: Rc<dyn Fn()>) -> Result<()>;

    // ========================
    // Window
    // ========================

    /// Smooth scroll so `node` sits at the top of the viewport
    fn scroll_into_view(&self, node: &Self::Node);

    fn scroll_to_top(&self);

    /// Vertical scroll offset in CSS pixels
    fn scroll_offset(&self) -> f64;

    /// Blocking confirm dialog; `false` when declined or unavailable
    fn confirm(&self, message: &str) -> bool;

    /// Submit a form element (full page navigation)
    fn submit(&self, form: &Self::Node) -> Result<()>;

    // ========================
    // Bootstrap
    // ========================

    fn init_widget(&self, node: &Self::Node, widget: Widget) -> Result<()>;

    /// Fade out and remove an `.alert` through Bootstrap's Alert API
    fn close_alert(&self, node: &Self::Node) -> Result<()>;
}
