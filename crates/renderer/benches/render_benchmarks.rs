//! Benchmarks for raster layer rendering and PNG encoding.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use renderer::png;
use renderer::{
    render_contour_bands, render_cross_section, ColourScale, GridRasterLayer, GridSource,
    RasterConfig,
};
use std::sync::Arc;
use test_utils::{create_geo_grid, create_grid_with, IdentityProjector, DEPTH_CSV};

fn depth_scale() -> ColourScale {
    let mut scale = ColourScale::new();
    let _ = scale.load_csv_str("Depth", DEPTH_CSV);
    scale
}

/// A smooth field with values spread over the depth scale.
fn generate_field(width: usize, height: usize) -> grid_common::Grid {
    create_grid_with(width, height, |col, row| {
        let fx = col as f64 / width as f64;
        let fy = row as f64 / height as f64;
        let v1 = (fx * std::f64::consts::PI * 4.0).sin() * 10.0;
        let v2 = (fy * std::f64::consts::PI * 2.0).cos() * 10.0;
        20.0 + v1 + v2
    })
}

// =============================================================================
// LAYER RENDER BENCHMARKS
// =============================================================================

fn bench_layer_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_render");

    let config = RasterConfig {
        property: "Depth".to_string(),
        ..RasterConfig::default()
    };
    let scale = Arc::new(depth_scale());

    // (grid columns, grid rows, projector scale)
    let scenarios = [(100, 100, 2.0), (500, 250, 2.0), (1000, 500, 1.0)];

    for (columns, rows, zoom) in scenarios {
        let grid = create_geo_grid(columns, rows, (0.0, 0.0, 300.0, 200.0), 0.0);
        let layer = GridRasterLayer::new(GridSource::Rectangular(grid), config.clone())
            .with_colour_scale(Arc::clone(&scale));
        let projector = IdentityProjector { scale: zoom };
        let Some(extent) = layer.extent(&projector) else {
            continue;
        };

        group.throughput(Throughput::Elements((extent.width() * extent.height()) as u64));
        group.bench_with_input(
            BenchmarkId::new("rectangular", format!("{}x{}", columns, rows)),
            &extent,
            |b, extent| b.iter(|| layer.render(black_box(&projector), black_box(extent))),
        );
    }

    group.finish();
}

// =============================================================================
// CROSS-SECTION AND BAND BENCHMARKS
// =============================================================================

fn bench_cross_section(c: &mut Criterion) {
    let scale = depth_scale();
    let grid = generate_field(50, 40);

    c.bench_function("cross_section_50x40_to_800x600", |b| {
        b.iter(|| render_cross_section(black_box(&grid), &scale, "Depth", 800, 600, false))
    });
}

fn bench_contour_bands(c: &mut Criterion) {
    let mut group = c.benchmark_group("contour_bands");
    let scale = depth_scale();

    for size in [128, 512] {
        let grid = generate_field(size, size);
        let mut trips = vec![0.0, 10.0, 20.0, 30.0, 40.0];

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| render_contour_bands(black_box(&grid), &mut trips, &scale, "Depth"))
        });
    }

    group.finish();
}

// =============================================================================
// PNG ENCODING BENCHMARKS
// =============================================================================

fn bench_png_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encode");
    let scale = depth_scale();

    for size in [256, 512] {
        let grid = generate_field(50, 40);
        let bitmap = render_cross_section(&grid, &scale, "Depth", size, size, true);

        group.throughput(Throughput::Bytes(bitmap.pixels().len() as u64));
        group.bench_with_input(BenchmarkId::new("auto", size), &bitmap, |b, bitmap| {
            b.iter(|| png::create_png_auto(black_box(bitmap.pixels()), size, size))
        });
        group.bench_with_input(BenchmarkId::new("rgba", size), &bitmap, |b, bitmap| {
            b.iter(|| png::create_png(black_box(bitmap.pixels()), size, size))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_layer_render,
    bench_cross_section,
    bench_contour_bands,
    bench_png_encode,
);
criterion_main!(benches);
