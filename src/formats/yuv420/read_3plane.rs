use crate::formats::yuv420::{Yuv420Block, Yuv420Src};
use crate::pixel_format::ChromaOrder;
use crate::planes::YuvPlanes;

/// Reader for the planar layouts (I420, YV12)
pub(crate) struct Read3Plane<'a> {
    y: &'a [u8],
    u: &'a [u8],
    v: &'a [u8],

    y_stride: usize,
    uv_stride: usize,
}

impl<'a> Read3Plane<'a> {
    pub(crate) fn new(planes: &YuvPlanes<'a>, width: usize) -> Self {
        debug_assert!(!planes.layout.is_semi_planar());

        let [y, u, v] = match planes.layout.chroma_order() {
            ChromaOrder::UV => planes.planes,
            ChromaOrder::VU => {
                let [y, v, u] = planes.planes;
                [y, u, v]
            }
        };

        Self {
            y,
            u,
            v,
            y_stride: width,
            uv_stride: width / 2,
        }
    }
}

impl Yuv420Src for Read3Plane<'_> {
    #[inline(always)]
    fn read(&mut self, x: usize, y: usize) -> Yuv420Block {
        let y00_offset = (y * self.y_stride) + x;
        let y10_offset = ((y + 1) * self.y_stride) + x;

        let uv_offset = (y / 2) * self.uv_stride + (x / 2);

        Yuv420Block {
            y00: self.y[y00_offset],
            y01: self.y[y00_offset + 1],
            y10: self.y[y10_offset],
            y11: self.y[y10_offset + 1],
            u: self.u[uv_offset],
            v: self.v[uv_offset],
        }
    }
}
