//! hqx-scale: pixel-art magnification by neighbourhood pattern matching
//!
//! This library provides the two collaborators the `hqx` converter needs to
//! enlarge an image: colour lookup tables for perceptual similarity tests and
//! the upscaling transforms themselves.
//!
//! # Quick Start
//!
//! ```
//! use hqx_scale::{ColorTables, HqxScaler, ScaleFactor};
//!
//! let tables = ColorTables::init();
//! let src = vec![0xFF00_00FF_u32; 4];
//! let mut dst = vec![0u32; 4 * 9];
//!
//! ScaleFactor::X3.apply(&HqxScaler, &tables, &src, &mut dst, 2, 2);
//! assert!(dst.iter().all(|&p| p == 0xFF00_00FF));
//! ```
//!
//! # Pixel Format
//!
//! Every buffer is a row-major slice of packed `0xAARRGGBB` values. The
//! destination of a factor `f` transform holds exactly
//! `width * f * height * f` pixels.
//!
//! # Color Tables
//!
//! [`ColorTables`] is acquired once per run with [`ColorTables::init()`] and
//! handed to every transform by reference. Dropping it releases the tables.
//! There is no process-wide state, so independent runs cannot leak into each
//! other.
//!
//! # Transforms
//!
//! The [`Upscaler`] trait has one operation per supported factor. Dispatch is
//! a match over the closed [`ScaleFactor`] enum:
//!
//! ```text
//! ScaleFactor::X2 ---> Upscaler::scale2x
//! ScaleFactor::X3 ---> Upscaler::scale3x
//! ScaleFactor::X4 ---> Upscaler::scale4x
//! ```
//!
//! [`HqxScaler`] is the bundled implementation.

pub mod color;
pub mod scale;

pub use color::{ColorTables, Yuv};
pub use scale::{HqxScaler, ScaleFactor, UnsupportedFactor, Upscaler};
