use criterion::{Criterion, criterion_group, criterion_main};

use std::hint::black_box;
use yuv_packed::{ChannelOrder, ConvertError, YuvFrame, YuvLayout, convert};

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;

fn do_convert(src: &YuvFrame<'_>, dst: &mut [u32], order: ChannelOrder) {
    convert(black_box(src), black_box(dst), order).unwrap();
}

#[cfg(feature = "multi-thread")]
fn do_convert_multi_thread(src: &YuvFrame<'_>, dst: &mut [u32], order: ChannelOrder) {
    use yuv_packed::convert_multi_thread;

    convert_multi_thread(black_box(src), black_box(dst), order).unwrap();
}

type ConvertFunction = fn(&YuvFrame<'_>, &mut [u32], ChannelOrder);

fn run_benchmarks(c: &mut Criterion, do_convert: ConvertFunction, s: &str) {
    let mut rgb = vec![0u32; IMAGE_WIDTH * IMAGE_HEIGHT];

    for layout in YuvLayout::variants() {
        let yuv = vec![128u8; layout.buffer_size(IMAGE_WIDTH, IMAGE_HEIGHT)];
        let src = frame(layout, &yuv).unwrap();

        for order in [ChannelOrder::RGBA, ChannelOrder::ARGB] {
            c.bench_function(&format!("{layout:?} to {order:?} {s}"), |b| {
                b.iter(|| do_convert(&src, &mut rgb, order))
            });
        }
    }
}

fn frame(layout: YuvLayout, yuv: &[u8]) -> Result<YuvFrame<'_>, ConvertError> {
    YuvFrame::new(layout, yuv, IMAGE_WIDTH, IMAGE_HEIGHT)
}

fn single_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert, "single threaded")
}

#[cfg(feature = "multi-thread")]
fn multi_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert_multi_thread, "multi threaded")
}

#[cfg(feature = "multi-thread")]
criterion_group!(img, single_threaded, multi_threaded);

#[cfg(not(feature = "multi-thread"))]
criterion_group!(img, single_threaded);

criterion_main!(img);
