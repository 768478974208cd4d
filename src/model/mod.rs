pub mod club;
pub mod registration;
pub mod tournament;
pub mod types;

pub use club::*;
pub use registration::*;
pub use tournament::*;
pub use types::*;
