pub mod ai;
pub mod collision;
pub mod movement;
pub mod paddles;
pub mod powerups;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use movement::*;
pub use paddles::*;
pub use powerups::*;
pub use scoring::*;
