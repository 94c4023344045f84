use crate::YuvLayout;
use crate::plane_decs::PlaneDesc;

/// The planes of a YUV image, in storage order of its layout
///
/// Semi planar layouts only use the first two entries, the last one is empty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YuvPlanes<'a> {
    pub(crate) layout: YuvLayout,
    pub(crate) planes: [&'a [u8]; 3],
}

impl<'a> YuvPlanes<'a> {
    /// Infer the planes for a full image in the given layout using the given dimensions
    ///
    /// # Panics
    ///
    /// If `buf` is too small for the given dimensions this function will panic
    pub(crate) fn infer(layout: YuvLayout, mut buf: &'a [u8], width: usize, height: usize) -> Self {
        let mut planes: [&'a [u8]; 3] = [&[]; 3];

        for (desc, out) in layout.plane_desc().iter().zip(planes.iter_mut()) {
            let (plane, rem) = buf.split_at(desc.row_len(width) * desc.rows(height));

            *out = plane;
            buf = rem;
        }

        Self { layout, planes }
    }

    /// Restrict all planes to the band of luma rows `first_row..first_row + rows`
    ///
    /// Both `first_row` and `rows` must be even, so the band covers whole chroma rows.
    pub(crate) fn band(&self, width: usize, first_row: usize, rows: usize) -> Self {
        debug_assert!(first_row % 2 == 0 && rows % 2 == 0);

        let mut planes = self.planes;

        for (desc, plane) in self.layout.plane_desc().iter().zip(planes.iter_mut()) {
            *plane = band_of(desc, plane, width, first_row, rows);
        }

        Self {
            layout: self.layout,
            planes,
        }
    }
}

fn band_of<'a>(
    desc: &PlaneDesc,
    plane: &'a [u8],
    width: usize,
    first_row: usize,
    rows: usize,
) -> &'a [u8] {
    let row_len = desc.row_len(width);

    let start = desc.rows(first_row) * row_len;
    let end = desc.rows(first_row + rows) * row_len;

    &plane[start..end]
}
