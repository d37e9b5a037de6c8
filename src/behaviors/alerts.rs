//! Auto-dismiss of alert banners rendered with the page.

use std::rc::Rc;

use tracing::debug;

use crate::context::{PageContext, Platform};
use crate::dom::Dom;
use crate::notify::close_alert;

pub const ALERT_SELECTOR: &str = ".alert";

pub fn install<D: Platform>(ctx: &Rc<PageContext<D>>) {
    let alerts = ctx.dom.query_all(ALERT_SELECTOR);
    debug!(count = alerts.len(), "scheduling alert dismissal");
    for alert in alerts {
        let dom = Rc::clone(&ctx.dom);
        ctx.timers
            .schedule(ctx.config.alert_dismiss_ms, move || close_alert(&*dom, &alert));
    }
}
