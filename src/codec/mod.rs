pub mod base62;

pub use base62::{decode, encode, ALPHABET, BASE};
