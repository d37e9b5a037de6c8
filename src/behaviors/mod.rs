//! Page Behaviours
//!
//! Each module wires one independent enhancement onto server-rendered
//! markup. `install` functions run once per page load.

pub mod add_to_cart;
pub mod alerts;
pub mod anchors;
pub mod back_to_top;
pub mod cards;
pub mod cart_badge;
pub mod confirm_buttons;
pub mod lazy_images;
pub mod mobile_menu;
pub mod prices;
pub mod quantity;
pub mod required_fields;
pub mod search_box;
pub mod submit_spinner;
pub mod widgets;

pub use mobile_menu::toggle_mobile_menu;
pub use prices::{format_currency, format_currency_input};
pub use quantity::{clamp_quantity, Clamp};
pub use required_fields::validate_field;
