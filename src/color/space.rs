/// Number of fractional bits of the fixed point coefficients
pub(crate) const SHIFT: u32 = 16;

/// Added before shifting down to round to nearest
pub(crate) const ROUND: i32 = 1 << (SHIFT - 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// YUV Rec. ITU-R BT.601-7 625
    BT601,

    /// YUV Rec. ITU-R BT.709-6
    BT709,

    /// YUV Rec. ITU-R BT.2020-2
    BT2020,
}

impl ColorSpace {
    pub(crate) fn coefficients(self, full_range: bool) -> &'static Coefficients {
        match (self, full_range) {
            (ColorSpace::BT601, true) => &BT601_FULL,
            (ColorSpace::BT601, false) => &BT601_LIMITED,
            (ColorSpace::BT709, true) => &BT709_FULL,
            (ColorSpace::BT709, false) => &BT709_LIMITED,
            (ColorSpace::BT2020, true) => &BT2020_FULL,
            (ColorSpace::BT2020, false) => &BT2020_LIMITED,
        }
    }
}

/// YUV to RGB matrix in 16.16 fixed point
///
/// ```text
/// y' = (Y - y_offset) * y_mul
/// R  = y'                                + r_v * (V - 128)
/// G  = y' - g_u * (U - 128) - g_v * (V - 128)
/// B  = y' + b_u * (U - 128)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coefficients {
    pub(crate) y_offset: i32,
    pub(crate) y_mul: i32,

    pub(crate) r_v: i32,
    pub(crate) g_u: i32,
    pub(crate) g_v: i32,
    pub(crate) b_u: i32,
}

impl Coefficients {
    /// Derive the matrix from the luma weights `kr` and `kb`
    const fn new(kr: f64, kb: f64, full_range: bool) -> Self {
        let kg = 1.0 - kr - kb;

        // Standard range is scaled up to the full 0..=255 range
        let (y_offset, y_scale, uv_scale) = if full_range {
            (0, 1.0, 1.0)
        } else {
            (16, 255.0 / 219.0, 255.0 / 224.0)
        };

        Self {
            y_offset,
            y_mul: fixed(y_scale),
            r_v: fixed((2.0 - 2.0 * kr) * uv_scale),
            g_u: fixed((kb / kg) * (2.0 - 2.0 * kb) * uv_scale),
            g_v: fixed((kr / kg) * (2.0 - 2.0 * kr) * uv_scale),
            b_u: fixed((2.0 - 2.0 * kb) * uv_scale),
        }
    }

    /// Convert a single pixel, returns the clamped `[r, g, b]`
    #[inline(always)]
    pub(crate) fn yuv_to_rgb(&self, y: u8, u: i32, v: i32) -> [u8; 3] {
        let y = (y as i32 - self.y_offset) * self.y_mul + ROUND;

        [
            clamp(y + self.r_v * v),
            clamp(y - self.g_u * u - self.g_v * v),
            clamp(y + self.b_u * u),
        ]
    }

    /// Convert a 2x2 block sharing one chroma pair, in `00, 01, 10, 11` order
    #[inline(always)]
    pub(crate) fn yx4_uv_to_rgb(&self, y: [u8; 4], u: u8, v: u8) -> [[u8; 3]; 4] {
        let u = u as i32 - 128;
        let v = v as i32 - 128;

        y.map(|y| self.yuv_to_rgb(y, u, v))
    }
}

/// Scale to 16.16 fixed point, rounding to nearest. Only used for positive values.
const fn fixed(value: f64) -> i32 {
    (value * (1 << SHIFT) as f64 + 0.5) as i32
}

#[inline(always)]
fn clamp(value: i32) -> u8 {
    (value >> SHIFT).clamp(0, 255) as u8
}

static BT601_FULL: Coefficients = Coefficients::new(0.299, 0.114, true);
static BT601_LIMITED: Coefficients = Coefficients::new(0.299, 0.114, false);
static BT709_FULL: Coefficients = Coefficients::new(0.2126, 0.0722, true);
static BT709_LIMITED: Coefficients = Coefficients::new(0.2126, 0.0722, false);
static BT2020_FULL: Coefficients = Coefficients::new(0.2627, 0.0593, true);
static BT2020_LIMITED: Coefficients = Coefficients::new(0.2627, 0.0593, false);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bt601_full_matches_jfif_constants() {
        let c = ColorSpace::BT601.coefficients(true);

        assert_eq!(c.y_offset, 0);
        assert_eq!(c.y_mul, 65536);
        assert_eq!(c.r_v, 91881); // 1.402
        assert_eq!(c.g_u, 22553); // 0.344136
        assert_eq!(c.g_v, 46802); // 0.714136
        assert_eq!(c.b_u, 116130); // 1.772
    }

    #[test]
    fn bt601_limited_scales_luma() {
        let c = ColorSpace::BT601.coefficients(false);

        assert_eq!(c.y_offset, 16);
        assert_eq!(c.y_mul, 76309); // 255 / 219

        // Nominal black and white map to the ends of the full range
        assert_eq!(c.yx4_uv_to_rgb([16; 4], 128, 128)[0], [0, 0, 0]);
        assert_eq!(c.yx4_uv_to_rgb([235; 4], 128, 128)[0], [255, 255, 255]);
    }

    #[test]
    fn neutral_chroma_is_gray() {
        for space in [ColorSpace::BT601, ColorSpace::BT709, ColorSpace::BT2020] {
            let c = space.coefficients(true);

            for y in [0, 1, 64, 128, 200, 255] {
                assert_eq!(c.yx4_uv_to_rgb([y; 4], 128, 128)[0], [y, y, y]);
            }
        }
    }

    #[test]
    fn extremes_clamp() {
        let c = ColorSpace::BT601.coefficients(true);

        assert_eq!(c.yx4_uv_to_rgb([255; 4], 255, 255)[0][0], 255);
        assert_eq!(c.yx4_uv_to_rgb([255; 4], 255, 255)[0][2], 255);
        assert_eq!(c.yx4_uv_to_rgb([0; 4], 0, 0)[0][0], 0);
        assert_eq!(c.yx4_uv_to_rgb([0; 4], 0, 0)[0][2], 0);
        assert_eq!(c.yx4_uv_to_rgb([255; 4], 0, 0)[0][1], 255);
        assert_eq!(c.yx4_uv_to_rgb([0; 4], 255, 255)[0][1], 0);
    }
}
