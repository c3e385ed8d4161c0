//! RPSL data structures: attributes and the objects they make up.

mod attribute;
mod object;

pub use attribute::*;
pub use object::*;
