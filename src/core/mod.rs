pub mod constants;
pub mod counter;
pub mod cursor;
pub mod driver;
pub mod form;
pub mod menu;
pub mod navbar;
pub mod particles;
pub mod scroll;
pub mod surface;
pub mod terminal;
pub mod typing;

pub use counter::*;
pub use cursor::*;
pub use driver::*;
pub use form::*;
pub use menu::*;
pub use navbar::*;
pub use particles::*;
pub use scroll::*;
pub use surface::*;
pub use terminal::*;
pub use typing::*;
