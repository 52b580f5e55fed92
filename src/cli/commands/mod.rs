pub mod crop;

pub use crop::*;
