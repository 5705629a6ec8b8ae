mod game_type;
mod grid;
pub mod layout;
mod view;

pub use game_type::*;
pub use grid::*;
pub use view::*;
