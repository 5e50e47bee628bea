//! Image decoding and encoding.

pub mod codec;

pub use codec::{ImageCodec, PngCodec};
