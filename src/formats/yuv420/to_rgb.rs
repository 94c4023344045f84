use super::{Yuv420Block, Yuv420Src};
use crate::YuvColorInfo;
use crate::color::space::Coefficients;
use crate::formats::packed::{RgbBlock, RgbSrc};

/// YUV 420 to RGB converter source
pub(crate) struct ToRgb<S> {
    yuv420_src: S,

    coefficients: &'static Coefficients,
}

impl<S: Yuv420Src> ToRgb<S> {
    pub(crate) fn new(color: &YuvColorInfo, yuv420_src: S) -> Self {
        Self {
            yuv420_src,
            coefficients: color.space.coefficients(color.full_range),
        }
    }
}

impl<S: Yuv420Src> RgbSrc for ToRgb<S> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> RgbBlock {
        let Yuv420Block {
            y00,
            y01,
            y10,
            y11,
            u,
            v,
        } = self.yuv420_src.read(x, y);

        let [px00, px01, px10, px11] = self
            .coefficients
            .yx4_uv_to_rgb([y00, y01, y10, y11], u, v);

        RgbBlock {
            px00,
            px01,
            px10,
            px11,
        }
    }
}
