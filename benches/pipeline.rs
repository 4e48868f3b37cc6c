//! Benchmarks for drawing and the ASCII codec.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pnm::codec::{decode, encode};
use pnm::types::{Bitmap, Graymap, Image, Pixmap, Point, Rgb};
use pnm::{Draw, Scene};

// -- Drawing benchmarks --

fn bench_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawing");

    group.bench_function("lines_256", |b| {
        let mut grid = Bitmap::blank(256, 256).unwrap();
        b.iter(|| {
            for i in (0..256).step_by(8) {
                grid.draw_line(Point::new(0, i), black_box(Point::new(255, 255 - i)), true);
            }
        })
    });

    group.bench_function("filled_circle_128", |b| {
        let mut grid = Graymap::blank(256, 256, 255).unwrap();
        b.iter(|| grid.draw_filled_circle(Point::new(128, 128), black_box(100), 200))
    });

    group.bench_function("filled_polygon_256", |b| {
        let mut grid = Pixmap::blank(256, 256, 255).unwrap();
        let hexagon = [
            Point::new(64, 8),
            Point::new(192, 8),
            Point::new(248, 128),
            Point::new(192, 248),
            Point::new(64, 248),
            Point::new(8, 128),
        ];
        b.iter(|| grid.draw_filled_polygon(black_box(&hexagon), Rgb::new(255, 0, 0)))
    });

    group.bench_function("scene_64", |b| {
        let scene = Scene::parse_yaml(
            "canvas: { format: ppm, width: 64, height: 64 }\n\
             shapes:\n\
             \x20 - { shape: line, from: [0, 0], to: [63, 63], color: \"#FF0000\" }\n\
             \x20 - { shape: circle, center: [32, 32], radius: 20, color: \"#00FF00\", filled: true }\n\
             \x20 - { shape: rectangle, origin: [4, 4], width: 56, height: 56, color: black }\n",
        )
        .unwrap();
        b.iter(|| {
            let mut image = scene.create_canvas().unwrap();
            scene.apply(black_box(&mut image)).unwrap()
        })
    });

    group.finish();
}

// -- Codec benchmarks --

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    // 128x128 pixmap with varied colours
    let rows: Vec<Vec<Rgb>> = (0..128)
        .map(|y| {
            (0..128)
                .map(|x| {
                    Rgb::new(
                        ((x * 2) % 256) as u8,
                        ((y * 2) % 256) as u8,
                        (((x + y) * 3) % 256) as u8,
                    )
                })
                .collect()
        })
        .collect();
    let image = Image::Pixmap(Pixmap::from_rows(rows, 255).unwrap());
    let source = encode(&image);

    group.bench_function("encode_ppm_128", |b| b.iter(|| encode(black_box(&image))));

    group.bench_function("decode_ppm_128", |b| {
        b.iter(|| decode(black_box(&source)).unwrap())
    });

    group.bench_function("reduce_ppm_to_pbm_128", |b| {
        b.iter(|| black_box(&image).clone().reduce_to(pnm::Format::Pbm).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_drawing, bench_codec);
criterion_main!(benches);
