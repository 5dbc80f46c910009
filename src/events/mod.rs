pub mod form;
pub mod menu;
pub mod pointer;
pub mod scroll;

pub use form::wire_contact_form;
pub use menu::wire_mobile_menu;
pub use pointer::{wire_cursor, wire_parallax};
pub use scroll::{wire_navbar, wire_smooth_scroll};
