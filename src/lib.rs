//! Convert YUV 4:2:0 frames into packed 32 bit RGBA / ARGB pixels.
//!
//! All math is done in 16.16 fixed point, so the output is bit identical on every platform.
//!
//! ```
//! use yuv_packed::{ChannelOrder, convert_to_rgba};
//!
//! let (width, height) = (2, 2);
//!
//! // NV21: four Y samples followed by a single V, U pair
//! let yuv = [128u8; 6];
//! let mut out = vec![0u32; width * height];
//!
//! convert_to_rgba(&yuv, width, height, &mut out).unwrap();
//!
//! assert!(out.iter().all(|&px| ChannelOrder::RGBA.unpack(px) == [128, 128, 128, 255]));
//! ```

pub use color::{ColorSpace, YuvColorInfo};
pub use error::{Buffer, ConvertError};
pub use frame::YuvFrame;
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_multi_thread;
pub use pixel_format::{ChannelOrder, YuvLayout};

mod color;
mod error;
mod formats;
mod frame;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;
mod plane_decs;
mod planes;

/// Layout assumed by [`convert_to_rgba`] and [`convert_to_argb`]
///
/// A full resolution Y plane followed by a half resolution plane of interleaved V, U pairs.
/// This is the default preview format of Android cameras.
pub const SOURCE_LAYOUT: YuvLayout = YuvLayout::NV21;

/// Convert a [`SOURCE_LAYOUT`] buffer into packed [`ChannelOrder::RGBA`] pixels, using full range BT.601
///
/// `out` must hold exactly `width * height` pixels. Nothing is written when an error is returned.
pub fn convert_to_rgba(
    yuv: &[u8],
    width: usize,
    height: usize,
    out: &mut [u32],
) -> Result<(), ConvertError> {
    let src = YuvFrame::new(SOURCE_LAYOUT, yuv, width, height)?;

    convert(&src, out, ChannelOrder::RGBA)
}

/// Convert a [`SOURCE_LAYOUT`] buffer into packed [`ChannelOrder::ARGB`] pixels, using full range BT.601
///
/// `out` must hold exactly `width * height` pixels. Nothing is written when an error is returned.
pub fn convert_to_argb(
    yuv: &[u8],
    width: usize,
    height: usize,
    out: &mut [u32],
) -> Result<(), ConvertError> {
    let src = YuvFrame::new(SOURCE_LAYOUT, yuv, width, height)?;

    convert(&src, out, ChannelOrder::ARGB)
}

/// Convert `src` into `dst` using the given channel order
pub fn convert(
    src: &YuvFrame<'_>,
    dst: &mut [u32],
    order: ChannelOrder,
) -> Result<(), ConvertError> {
    verify_output(src, dst)?;

    let planes = src.planes();
    let color = src.color();

    match order {
        ChannelOrder::RGBA => {
            formats::convert_planes::<false>(&planes, &color, src.width(), src.height(), dst)
        }
        ChannelOrder::ARGB => {
            formats::convert_planes::<true>(&planes, &color, src.width(), src.height(), dst)
        }
    }

    Ok(())
}

/// Verify that the destination matches the source dimensions exactly
fn verify_output(src: &YuvFrame<'_>, dst: &[u32]) -> Result<(), ConvertError> {
    let expected = src.pixel_count();

    if dst.len() < expected {
        return Err(ConvertError::BufferTooSmall {
            buffer: Buffer::Destination,
            minimum: expected,
            got: dst.len(),
        });
    }

    if dst.len() > expected {
        return Err(ConvertError::OutputSizeMismatch {
            expected,
            got: dst.len(),
        });
    }

    Ok(())
}
