use crate::plane_decs::{PLANAR_PLANES, PlaneDesc, SEMI_PLANAR_PLANES};
use crate::{Buffer, ConvertError};

/// Supported YUV 4:2:0 source layouts, all 8 bits per sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YuvLayout {
    /// Y plane and interleaved VU plane
    NV21,

    /// Y plane and interleaved UV plane
    NV12,

    /// Y, U and V planes
    I420,

    /// Y, V and U planes
    YV12,
}

/// Position of the two chroma samples relative to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromaOrder {
    UV,
    VU,
}

impl YuvLayout {
    /// Calculate the required buffer size in bytes for the given dimensions.
    ///
    /// # Panics
    ///
    /// If the size overflows `usize`
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.checked_buffer_size(width, height)
            .expect("buffer size overflows usize")
    }

    pub(crate) fn checked_buffer_size(self, width: usize, height: usize) -> Option<usize> {
        self.plane_desc()
            .iter()
            .try_fold(0usize, |size, plane| size.checked_add(plane.len(width, height)?))
    }

    /// Check that `data` can hold an image of this layout with the given dimensions
    pub fn bounds_check(
        self,
        data: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(), ConvertError> {
        verify_dimensions(width, height)?;

        let minimum = self
            .checked_buffer_size(width, height)
            .ok_or(ConvertError::InvalidDimension { width, height })?;

        if data.len() < minimum {
            return Err(ConvertError::BufferTooSmall {
                buffer: Buffer::Source,
                minimum,
                got: data.len(),
            });
        }

        Ok(())
    }

    /// Returns true for layouts storing U and V interleaved in a single plane
    pub fn is_semi_planar(self) -> bool {
        matches!(self, YuvLayout::NV21 | YuvLayout::NV12)
    }

    pub(crate) fn chroma_order(self) -> ChromaOrder {
        match self {
            YuvLayout::NV12 | YuvLayout::I420 => ChromaOrder::UV,
            YuvLayout::NV21 | YuvLayout::YV12 => ChromaOrder::VU,
        }
    }

    pub(crate) fn plane_desc(self) -> &'static [PlaneDesc] {
        if self.is_semi_planar() {
            &SEMI_PLANAR_PLANES
        } else {
            &PLANAR_PLANES
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        use YuvLayout::*;

        [NV21, NV12, I420, YV12]
    }
}

/// Checks that both dimensions are non-zero and even, returns the pixel count
pub(crate) fn verify_dimensions(width: usize, height: usize) -> Result<usize, ConvertError> {
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(ConvertError::InvalidDimension { width, height });
    }

    width
        .checked_mul(height)
        .ok_or(ConvertError::InvalidDimension { width, height })
}

/// Byte layout of a packed 32 bit pixel
///
/// Alpha is always fully opaque (255), YUV sources carry no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelOrder {
    /// `A << 24 | B << 16 | G << 8 | R`
    ///
    /// Red is the least significant byte, so the little endian memory order is R, G, B, A.
    RGBA,

    /// `A << 24 | R << 16 | G << 8 | B`
    ARGB,
}

impl ChannelOrder {
    /// Pack an opaque pixel
    pub const fn pack(self, r: u8, g: u8, b: u8) -> u32 {
        match self {
            ChannelOrder::RGBA => pack::<false>(r, g, b),
            ChannelOrder::ARGB => pack::<true>(r, g, b),
        }
    }

    /// Split a packed pixel into `[r, g, b, a]`
    pub const fn unpack(self, px: u32) -> [u8; 4] {
        let [b0, b1, b2, b3] = px.to_le_bytes();

        match self {
            ChannelOrder::RGBA => [b0, b1, b2, b3],
            ChannelOrder::ARGB => [b2, b1, b0, b3],
        }
    }
}

#[inline(always)]
pub(crate) const fn pack<const ARGB: bool>(r: u8, g: u8, b: u8) -> u32 {
    let (hi, lo) = if ARGB { (r, b) } else { (b, r) };

    0xFF00_0000 | ((hi as u32) << 16) | ((g as u32) << 8) | lo as u32
}
