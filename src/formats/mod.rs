mod packed;
mod visit_2x2;
mod yuv420;

use crate::planes::YuvPlanes;
use crate::{YuvColorInfo, YuvLayout};
use packed::PackedWriter;
use yuv420::{Read2Plane, Read3Plane, ToRgb};

/// Convert already validated planes into `dst`
pub(crate) fn convert_planes<const ARGB: bool>(
    planes: &YuvPlanes<'_>,
    color: &YuvColorInfo,
    width: usize,
    height: usize,
    dst: &mut [u32],
) {
    match planes.layout {
        YuvLayout::NV21 => PackedWriter::<ARGB, _>::write(
            dst,
            width,
            height,
            ToRgb::new(color, Read2Plane::<true>::new(planes, width)),
        ),
        YuvLayout::NV12 => PackedWriter::<ARGB, _>::write(
            dst,
            width,
            height,
            ToRgb::new(color, Read2Plane::<false>::new(planes, width)),
        ),
        YuvLayout::I420 | YuvLayout::YV12 => PackedWriter::<ARGB, _>::write(
            dst,
            width,
            height,
            ToRgb::new(color, Read3Plane::new(planes, width)),
        ),
    }
}
