pub mod level_of_detail;
pub mod limits;
pub mod viewport;

pub use level_of_detail::{DetailLadder, DetailStep};
pub use limits::ViewLimits;
pub use viewport::Viewport;
