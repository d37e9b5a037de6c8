//! Storefront Frontend Entry Point

mod behaviors;
mod browser;
mod commands;
mod config;
mod context;
mod dom;
mod error;
mod exports;
mod logging;
mod models;
mod notify;
mod page;
mod timers;

#[cfg(test)]
mod testing;

use std::rc::Rc;

use browser::Browser;

fn main() {
    console_error_panic_hook::set_once();

    let browser = match Browser::new() {
        Ok(browser) => Rc::new(browser),
        Err(err) => {
            web_sys::console::error_1(&format!("storefront: {}", err).into());
            return;
        }
    };

    let ready = Rc::clone(&browser);
    browser.when_ready(move || exports::start(ready));
}
