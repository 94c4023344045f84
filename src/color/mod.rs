pub(crate) mod space;

pub use space::ColorSpace;

/// Color description of a YUV image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YuvColorInfo {
    pub space: ColorSpace,

    /// If the image uses either full or standard range
    ///
    /// - full range (0 - 255)
    /// - standard range Y (16 - 235), U & V (16 - 240)
    pub full_range: bool,
}

impl Default for YuvColorInfo {
    /// Full range BT.601, the JFIF / camera preview convention
    fn default() -> Self {
        Self {
            space: ColorSpace::BT601,
            full_range: true,
        }
    }
}
