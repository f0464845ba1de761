use thiserror::Error;

use crate::layout::Field;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Field {field} at offset {offset} (width {width}) exceeds structure size {size}")]
    FieldOutOfBounds {
        field: Field,
        offset: usize,
        width: usize,
        size: usize,
    },

    #[error("Field {first} overlaps field {second}")]
    FieldOverlap { first: Field, second: Field },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
