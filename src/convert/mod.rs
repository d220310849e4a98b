//! Decode, normalize to RGBA-32, and re-encode as PNG.

mod converter;

pub use converter::{convert, Config, Converter};
