pub mod auth_form;
pub mod button;
pub mod icons;
pub mod text_input;
pub mod track_player;

pub use auth_form::*;
pub use button::*;
pub use icons::*;
pub use text_input::*;
pub use track_player::*;
