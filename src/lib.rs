mod board;
mod config;
mod error;
mod game;
mod logging;
mod placement;
mod randomizer;
mod store;
mod targeting;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use logging::init_logging;
pub use placement::*;
pub use randomizer::*;
pub use store::*;
pub use targeting::*;
