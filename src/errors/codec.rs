use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the base62 alphabet
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The decoded value does not fit in a u32
    #[error("value exceeds {}", u32::MAX)]
    Overflow,
}
