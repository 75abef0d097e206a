pub mod catching;
pub mod hook;
pub mod input;
pub mod movement;

pub use catching::*;
pub use hook::*;
pub use input::*;
pub use movement::*;
