use super::{RgbBlock, RgbSrc};
use crate::formats::visit_2x2::{Image2x2Visitor, visit};
use crate::pixel_format::pack;

/// Writes 2x2 blocks as packed `u32` pixels, `ARGB` selects the channel order
pub(crate) struct PackedWriter<'a, const ARGB: bool, S>
where
    S: RgbSrc,
{
    dst: &'a mut [u32],

    width: usize,

    rgb_src: S,
}

impl<'a, const ARGB: bool, S> PackedWriter<'a, ARGB, S>
where
    S: RgbSrc,
{
    /// `dst` must hold exactly `width * height` pixels, checked by the caller
    pub(crate) fn write(dst: &'a mut [u32], width: usize, height: usize, rgb_src: S) {
        debug_assert_eq!(dst.len(), width * height);

        visit(
            width,
            height,
            Self {
                dst,
                width,
                rgb_src,
            },
        )
    }
}

impl<const ARGB: bool, S> Image2x2Visitor for PackedWriter<'_, ARGB, S>
where
    S: RgbSrc,
{
    #[inline(always)]
    fn visit(&mut self, x: usize, y: usize) {
        let RgbBlock {
            px00,
            px01,
            px10,
            px11,
        } = self.rgb_src.read(x, y);

        let offset00 = y * self.width + x;
        let offset10 = offset00 + self.width;

        self.dst[offset00] = pack_px::<ARGB>(px00);
        self.dst[offset00 + 1] = pack_px::<ARGB>(px01);
        self.dst[offset10] = pack_px::<ARGB>(px10);
        self.dst[offset10 + 1] = pack_px::<ARGB>(px11);
    }
}

#[inline(always)]
fn pack_px<const ARGB: bool>([r, g, b]: [u8; 3]) -> u32 {
    pack::<ARGB>(r, g, b)
}
