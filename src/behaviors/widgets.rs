//! Bootstrap tooltips and popovers.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::context::{PageContext, Platform};
use crate::dom::{Dom, Widget};

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    for widget in [Widget::Tooltip, Widget::Popover] {
        let nodes = ctx.dom.query_all(widget.selector());
        for node in &nodes {
            if let Err(err) = ctx.dom.init_widget(node, widget) {
                // Missing library fails every node the same way
                warn!(%err, widget = widget.class_name(), "widget init failed");
                break;
            }
        }
        debug!(count = nodes.len(), widget = widget.class_name(), "widgets wired");
    }
}
