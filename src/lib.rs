//! hqx - pixel-art image magnification from the command line.
//!
//! Decodes an image, normalizes it to packed ARGB and runs the hq2x, hq3x
//! and hq4x transforms of the `hqx-scale` crate over it, writing one PNG per
//! factor. This library exposes the pipeline for the binary and for
//! integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
