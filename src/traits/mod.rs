pub mod hands;

pub use hands::*;
