//! Colour-space lookup tables
//!
//! The upscalers decide whether two neighbouring pixels belong to the same
//! shape by comparing them in YUV space. [`ColorTables`] holds the
//! precomputed per-channel contributions so each comparison is a handful of
//! table reads.
//!
//! # Example
//!
//! ```
//! use hqx_scale::ColorTables;
//!
//! let tables = ColorTables::init();
//! let black = 0xFF00_0000;
//! let white = 0xFFFF_FFFF;
//!
//! assert!(tables.differ(black, white));
//! assert!(!tables.differ(black, 0xFF01_0101));
//! ```

mod tables;

pub use tables::{ColorTables, Yuv};
