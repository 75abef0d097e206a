//! Catch loop for the fishing scene
//!
//! Drag the hook, drop it, and catch fish on the way back up. Everything
//! engine-specific comes in through [`host::Host`].

pub mod camera;
pub mod catch_loop;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod host;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use camera::*;
pub use catch_loop::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use host::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use systems::PointerEvent;
