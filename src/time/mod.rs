pub mod normalized;
pub mod parser;

pub use normalized::*;
pub use parser::*;
