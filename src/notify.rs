//! Notifications
//!
//! Floating, dismissible Bootstrap alerts pinned to the top right corner.

use std::rc::Rc;

use tracing::warn;

use crate::context::{PageContext, Platform};
use crate::dom::Dom;
use crate::models::Severity;

const NOTIFICATION_STYLE: &str = "top: 20px; right: 20px; z-index: 9999; min-width: 300px;";

/// Append an alert to `body` and close it after the configured delay.
///
/// The message is inserted as text, not markup.
pub fn show_notification<D: Platform>(
    ctx: &PageContext<D>,
    message: &str,
    severity: Severity,
) -> Option<D::Node> {
    let dom = &ctx.dom;
    let alert = match dom.create_element("div") {
        Ok(node) => node,
        Err(err) => {
            warn!(%err, "could not create notification");
            return None;
        }
    };

    dom.set_class_name(
        &alert,
        &format!(
            "alert alert-{} alert-dismissible fade show position-fixed",
            severity.as_str()
        ),
    );
    dom.set_style_text(&alert, NOTIFICATION_STYLE);
    dom.set_inner_html(
        &alert,
        &format!(
            "\n        <i class=\"fas fa-{} me-2\"></i>\n        {}\n        <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\"></button>\n    ",
            severity.icon(),
            escape_html(message)
        ),
    );

    if let Err(err) = dom.append_to_body(&alert) {
        warn!(%err, "could not attach notification");
        return None;
    }

    let closing = alert.clone();
    let dom = Rc::clone(&ctx.dom);
    ctx.timers
        .schedule(ctx.config.notification_dismiss_ms, move || close_alert(&*dom, &closing));

    Some(alert)
}

/// Close through Bootstrap, or drop the node when Bootstrap is missing
pub(crate) fn close_alert<D: Dom>(dom: &D, alert: &D::Node) {
    if let Err(err) = dom.close_alert(alert) {
        warn!(%err, "bootstrap alert unavailable, removing node");
        dom.remove(alert);
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
