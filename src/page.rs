//! Page Lifecycle
//!
//! Wires every behaviour onto a loaded page and owns the teardown that stops
//! its pending timers.

use std::rc::Rc;

use tracing::info;

use crate::behaviors::{
    add_to_cart, alerts, anchors, back_to_top, cards, cart_badge, confirm_buttons, lazy_images,
    prices, quantity, required_fields, search_box, submit_spinner, widgets,
};
use crate::context::{PageContext, Platform};
use crate::dom::{listener, Dom};

pub struct Page<D: Platform> {
    ctx: Rc<PageContext<D>>,
}

impl<D: Platform> Page<D> {
    /// Install all behaviours. Listeners stay attached for the life of the
    /// document. Leaving the page cancels pending timers, unless it is kept
    /// in the back/forward cache: a restored page resumes its timers.
    pub fn init(ctx: Rc<PageContext<D>>) -> Self {
        widgets::install(&ctx);
        alerts::install(&ctx);
        submit_spinner::install(&ctx);
        cards::install(&ctx);
        anchors::install(&ctx);
        add_to_cart::install(&ctx);
        quantity::install(&ctx);
        search_box::install(&ctx);
        lazy_images::install(&ctx);
        back_to_top::install(&ctx);
        confirm_buttons::install(&ctx);
        required_fields::install(&ctx);
        prices::install(&ctx);
        cart_badge::install(&ctx);

        let timers = ctx.timers.clone();
        ctx.dom.listen_window(
            "pagehide",
            listener(move |event| {
                if !event.persisted() {
                    timers.cancel_all();
                }
            }),
        );

        info!("E-Commerce Store initialized successfully!");
        Self { ctx }
    }

    pub fn context(&self) -> &Rc<PageContext<D>> {
        &self.ctx
    }

    /// Cancel pending timers; later scheduling is a no-op
    pub fn teardown(&self) {
        if !self.ctx.timers.is_closed() {
            info!(pending = self.ctx.timers.pending(), "tearing down page");
        }
        self.ctx.timers.cancel_all();
    }
}

impl<D: Platform> Drop for Page<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}
