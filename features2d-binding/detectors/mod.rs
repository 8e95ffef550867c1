//! One wrapper class per detector family.

mod akaze;
mod brisk;
mod kaze;
mod orb;

pub use akaze::AkazeDetector;
pub use brisk::BriskDetector;
pub use kaze::KazeDetector;
pub use orb::OrbDetector;
