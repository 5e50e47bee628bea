//! Neighbourhood-pattern upscaler.
//!
//! Each source pixel becomes an `n x n` block. The block is filled by
//! looking at the 3x3 neighbourhood around the source pixel:
//!
//! ```text
//! 0 1 2
//! 3 4 5      4 is the source pixel
//! 6 7 8
//! ```
//!
//! Neighbours that [`ColorTables::differ`] from the centre are treated as
//! the other side of an edge and never bleed into the block. Similar
//! neighbours are blended into the sub-pixels nearest to them, and a pair of
//! similar edge neighbours that both differ from the centre pulls the
//! shared corner towards them, which rounds off diagonal staircases.

use super::Upscaler;
use crate::color::ColorTables;

const CENTER: usize = 4;

/// The bundled pattern upscaler for 2x, 3x and 4x.
#[derive(Debug, Clone, Copy, Default)]
pub struct HqxScaler;

impl HqxScaler {
    pub fn new() -> Self {
        Self
    }
}

impl Upscaler for HqxScaler {
    fn scale2x(
        &self,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    ) {
        magnify(tables, src, dst, width, height, 2);
    }

    fn scale3x(
        &self,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    ) {
        magnify(tables, src, dst, width, height, 3);
    }

    fn scale4x(
        &self,
        tables: &ColorTables,
        src: &[u32],
        dst: &mut [u32],
        width: usize,
        height: usize,
    ) {
        magnify(tables, src, dst, width, height, 4);
    }
}

/// Fill `dst` with the `n`-times magnification of `src`.
///
/// # Panics (debug only)
///
/// Debug-asserts the buffer lengths against `width`, `height` and `n`.
fn magnify(
    tables: &ColorTables,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    n: usize,
) {
    debug_assert_eq!(src.len(), width * height, "source length must be width * height");
    debug_assert_eq!(
        dst.len(),
        src.len() * n * n,
        "destination length must be {n}x{n} the source length"
    );

    let dst_width = width * n;
    for y in 0..height {
        for x in 0..width {
            let hood = Neighbourhood::gather(tables, src, x, y, width, height);
            for sy in 0..n {
                let row = (y * n + sy) * dst_width + x * n;
                for sx in 0..n {
                    dst[row + sx] = hood.subpixel(tables, n, sx, sy);
                }
            }
        }
    }
}

/// The 3x3 pixels around one source pixel, edges clamped.
struct Neighbourhood {
    pixels: [u32; 9],
    /// Whether each neighbour differs from the centre.
    differs: [bool; 9],
}

impl Neighbourhood {
    fn gather(
        tables: &ColorTables,
        src: &[u32],
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Self {
        let xs = [x.saturating_sub(1), x, (x + 1).min(width - 1)];
        let ys = [y.saturating_sub(1), y, (y + 1).min(height - 1)];

        let mut pixels = [0u32; 9];
        for (row, &sy) in ys.iter().enumerate() {
            for (col, &sx) in xs.iter().enumerate() {
                pixels[row * 3 + col] = src[sy * width + sx];
            }
        }

        let center = pixels[CENTER];
        let mut differs = [false; 9];
        for (flag, &pixel) in differs.iter_mut().zip(pixels.iter()) {
            *flag = tables.differ(center, pixel);
        }

        Self { pixels, differs }
    }

    /// Index of the neighbour at offset (`dx`, `dy`), each in -1..=1.
    #[inline]
    fn at(dx: i32, dy: i32) -> usize {
        ((dy + 1) * 3 + dx + 1) as usize
    }

    /// Colour of sub-pixel (`sx`, `sy`) of an `n x n` block.
    fn subpixel(&self, tables: &ColorTables, n: usize, sx: usize, sy: usize) -> u32 {
        // Offset from the block centre in half sub-pixels: odd for even n,
        // zero on the middle row/column for odd n.
        let dx = 2 * sx as i32 + 1 - n as i32;
        let dy = 2 * sy as i32 + 1 - n as i32;

        match (dx.signum(), dy.signum()) {
            (0, 0) => self.pixels[CENTER],
            (hx, 0) => self.edge(Self::at(hx, 0)),
            (0, vy) => self.edge(Self::at(0, vy)),
            (hx, vy) => {
                let reach = dx.unsigned_abs() + dy.unsigned_abs();
                let max_reach = 2 * (n as u32 - 1);
                self.corner(tables, hx, vy, reach, max_reach)
            }
        }
    }

    fn edge(&self, side: usize) -> u32 {
        let center = self.pixels[CENTER];
        if self.differs[side] {
            center
        } else {
            blend(&[(center, 3), (self.pixels[side], 1)])
        }
    }

    fn corner(&self, tables: &ColorTables, hx: i32, vy: i32, reach: u32, max_reach: u32) -> u32 {
        let center = self.pixels[CENTER];
        let h = Self::at(hx, 0);
        let v = Self::at(0, vy);
        let d = Self::at(hx, vy);
        let (hp, vp) = (self.pixels[h], self.pixels[v]);
        let outermost = reach == max_reach;

        match (self.differs[h], self.differs[v]) {
            // A diagonal edge cuts across this corner.
            (true, true) if !tables.differ(hp, vp) => {
                blend(&[(center, 4 * max_reach - 2 * reach), (hp, reach), (vp, reach)])
            }
            (false, false) if outermost && !self.differs[d] => {
                blend(&[(center, 2), (hp, 1), (vp, 1)])
            }
            (false, false) if outermost => blend(&[(center, 6), (hp, 1), (vp, 1)]),
            (false, true) if outermost => blend(&[(center, 3), (hp, 1)]),
            (true, false) if outermost => blend(&[(center, 3), (vp, 1)]),
            _ => center,
        }
    }
}

/// Weighted per-channel average of packed ARGB pixels.
#[inline]
fn blend(parts: &[(u32, u32)]) -> u32 {
    let total: u32 = parts.iter().map(|&(_, weight)| weight).sum();
    let mut out = 0u32;
    for shift in [24, 16, 8, 0] {
        let sum: u32 = parts
            .iter()
            .map(|&(pixel, weight)| ((pixel >> shift) & 0xFF) * weight)
            .sum();
        out |= ((sum / total) & 0xFF) << shift;
    }
    out
}
