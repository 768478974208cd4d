pub mod distance;
pub mod range;
pub mod resolve;

pub use distance::*;
pub use range::*;
pub use resolve::*;
