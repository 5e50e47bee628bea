//! RGB to YUV lookup tables and the pixel similarity test.

/// Y/U/V contribution weights per channel (r, g, b), scaled by [`SCALE`].
const Y_WEIGHTS: [i32; 3] = [299, 587, 114];
const U_WEIGHTS: [i32; 3] = [-169, -331, 500];
const V_WEIGHTS: [i32; 3] = [500, -419, -81];
const SCALE: i32 = 1000;

/// Chroma offset so that U and V land in 0..=255.
const CHROMA_BIAS: i32 = 128;

/// Pixels whose components differ by more than these are "different".
const Y_THRESHOLD: i32 = 0x30;
const U_THRESHOLD: i32 = 0x07;
const V_THRESHOLD: i32 = 0x06;
const A_THRESHOLD: i32 = 0x00;

/// Per-channel table: `[channel][value]` with channels ordered r, g, b.
type ChannelTable = [[i32; 256]; 3];

/// A pixel in YUV space, each component in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuv {
    pub y: i32,
    pub u: i32,
    pub v: i32,
}

/// Precomputed RGB to YUV lookup tables.
///
/// Built once per conversion run with [`init()`](Self::init) and shared by
/// reference with every transform. The tables are read-only after
/// construction, so a single instance may be read from many places at once.
/// Dropping the value releases them.
pub struct ColorTables {
    y: Box<ChannelTable>,
    u: Box<ChannelTable>,
    v: Box<ChannelTable>,
}

impl ColorTables {
    /// Build the lookup tables.
    pub fn init() -> Self {
        Self {
            y: build_table(Y_WEIGHTS),
            u: build_table(U_WEIGHTS),
            v: build_table(V_WEIGHTS),
        }
    }

    /// Convert a packed `0xAARRGGBB` pixel to YUV. Alpha is ignored.
    #[inline]
    pub fn yuv(&self, argb: u32) -> Yuv {
        let [_, r, g, b] = argb.to_be_bytes();
        let (r, g, b) = (r as usize, g as usize, b as usize);
        Yuv {
            y: (self.y[0][r] + self.y[1][g] + self.y[2][b]) / SCALE,
            u: (self.u[0][r] + self.u[1][g] + self.u[2][b]) / SCALE + CHROMA_BIAS,
            v: (self.v[0][r] + self.v[1][g] + self.v[2][b]) / SCALE + CHROMA_BIAS,
        }
    }

    /// Whether two pixels are perceptually different.
    ///
    /// Any component of the YUV difference above its threshold, or any alpha
    /// difference, makes the pixels different.
    #[inline]
    pub fn differ(&self, a: u32, b: u32) -> bool {
        if a == b {
            return false;
        }
        let alpha_delta = ((a >> 24) as i32 - (b >> 24) as i32).abs();
        if alpha_delta > A_THRESHOLD {
            return true;
        }
        let (ya, yb) = (self.yuv(a), self.yuv(b));
        (ya.y - yb.y).abs() > Y_THRESHOLD
            || (ya.u - yb.u).abs() > U_THRESHOLD
            || (ya.v - yb.v).abs() > V_THRESHOLD
    }
}

fn build_table(weights: [i32; 3]) -> Box<ChannelTable> {
    let mut table = Box::new([[0i32; 256]; 3]);
    for (channel, &weight) in weights.iter().enumerate() {
        for (value, slot) in table[channel].iter_mut().enumerate() {
            *slot = weight * value as i32;
        }
    }
    table
}
