use crate::formats::yuv420::{Yuv420Block, Yuv420Src};
use crate::planes::YuvPlanes;

/// Reader for the semi planar layouts, `VU` selects NV21 over NV12
pub(crate) struct Read2Plane<'a, const VU: bool> {
    y: &'a [u8],
    uv: &'a [u8],

    width: usize,
}

impl<'a, const VU: bool> Read2Plane<'a, VU> {
    pub(crate) fn new(planes: &YuvPlanes<'a>, width: usize) -> Self {
        debug_assert!(planes.layout.is_semi_planar());

        let [y, uv, _] = planes.planes;

        Self { y, uv, width }
    }
}

impl<const VU: bool> Yuv420Src for Read2Plane<'_, VU> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> Yuv420Block {
        let y00_offset = y * self.width + x;
        let y10_offset = y00_offset + self.width;

        // The interleaved plane has a full width row per two luma rows
        let uv_offset = (y / 2) * self.width + x;

        let (u, v) = if VU {
            (self.uv[uv_offset + 1], self.uv[uv_offset])
        } else {
            (self.uv[uv_offset], self.uv[uv_offset + 1])
        };

        Yuv420Block {
            y00: self.y[y00_offset],
            y01: self.y[y00_offset + 1],
            y10: self.y[y10_offset],
            y11: self.y[y10_offset + 1],
            u,
            v,
        }
    }
}
