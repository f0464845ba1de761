mod enums;
mod object;

pub use enums::*;
pub use object::*;
