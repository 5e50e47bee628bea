//! Magnification transforms.
//!
//! All transforms implement the [`Upscaler`] trait, which carries one
//! operation per supported factor. [`ScaleFactor`] names the factors and
//! dispatches to the matching operation.
//!
//! # Contract
//!
//! For a source of `width * height` pixels and factor `f`, an operation:
//!
//! - reads `src` only (it is borrowed immutably)
//! - writes every one of the `width * f * height * f` pixels of `dst`
//! - reads the colour tables only through [`ColorTables`] methods

mod hqx;

pub use hqx::HqxScaler;

use crate::color::ColorTables;
use std::fmt;

/// Pixel-art magnification, one operation per supported factor.
///
/// Buffers hold packed `0xAARRGGBB` pixels in row-major order. `dst` must
/// hold exactly `src.len() * f * f` pixels for factor `f`.
pub trait Upscaler {
    /// Magnify `src` by two in each direction.
    fn scale2x(
        &self,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    );

    /// Magnify `src` by three in each direction.
    fn scale3x(
        &self,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    );

    /// Magnify `src` by four in each direction.
    fn scale4x(
        &self,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    );
}

/// Supported magnification factors.
///
/// Ordered by magnitude, so sorted collections iterate 2x, 3x, 4x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScaleFactor {
    X2,
    X3,
    X4,
}

impl ScaleFactor {
    /// Every supported factor, ascending.
    pub const ALL: [ScaleFactor; 3] = [ScaleFactor::X2, ScaleFactor::X3, ScaleFactor::X4];

    /// The integer multiplier applied to width and height.
    #[inline]
    pub fn multiplier(self) -> u32 {
        match self {
            ScaleFactor::X2 => 2,
            ScaleFactor::X3 => 3,
            ScaleFactor::X4 => 4,
        }
    }

    /// Run the operation of `upscaler` that matches this factor.
    pub fn apply<U: Upscaler + ?Sized>(
        self,
        upscaler: &U,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    ) {
        match self {
            ScaleFactor::X2 => upscaler.scale2x(tables, src, dst, width, height),
            ScaleFactor::X3 => upscaler.scale3x(tables, src, dst, width, height),
            ScaleFactor::X4 => upscaler.scale4x(tables, src, dst, width, height),
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hq{}x", self.multiplier())
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = UnsupportedFactor;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ScaleFactor::X2),
            3 => Ok(ScaleFactor::X3),
            4 => Ok(ScaleFactor::X4),
            other => Err(UnsupportedFactor(other)),
        }
    }
}

/// A multiplier outside the supported set {2, 3, 4}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedFactor(pub u32);

impl fmt::Display for UnsupportedFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported scaling factor {} (expected 2, 3 or 4)", self.0)
    }
}

impl std::error::Error for UnsupportedFactor {}
