use crate::formats::convert_planes;
use crate::{ChannelOrder, ConvertError, YuvFrame, convert, verify_output};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Like [`convert`], but splits the frame into bands of rows which are converted in parallel
///
/// The output is identical to the one of [`convert`].
#[inline(never)]
pub fn convert_multi_thread(
    src: &YuvFrame<'_>,
    dst: &mut [u32],
    order: ChannelOrder,
) -> Result<(), ConvertError> {
    verify_output(src, dst)?;

    let threads = num_cpus::get();

    if threads == 1 {
        return convert(src, dst, order);
    }

    let width = src.width();
    let planes = src.planes();
    let color = src.color();

    // Every band must start on an even row to keep the chroma rows intact
    let rows_per_band = src.height().div_ceil(threads).next_multiple_of(2);

    dst.par_chunks_mut(rows_per_band * width)
        .enumerate()
        .for_each(|(i, dst)| {
            let first_row = i * rows_per_band;
            let rows = dst.len() / width;

            let band = planes.band(width, first_row, rows);

            match order {
                ChannelOrder::RGBA => convert_planes::<false>(&band, &color, width, rows, dst),
                ChannelOrder::ARGB => convert_planes::<true>(&band, &color, width, rows, dst),
            }
        });

    Ok(())
}
