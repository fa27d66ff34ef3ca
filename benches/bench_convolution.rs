use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use canvas_filters::{laplacian_u8, sobel_u8, ExecutionStrategy, PixelBuffer};

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convolution");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let data: Vec<u8> = (0..width * height * 4).map(|i| (i * 31 % 251) as u8).collect();
        let image = PixelBuffer::new(data, *width, *height).unwrap();

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("parallel", ExecutionStrategy::Parallel),
            ("workers_4", ExecutionStrategy::Workers(4)),
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("sobel_{name}"), &parameter_string),
                &image,
                |b, img| b.iter(|| black_box(sobel_u8(img, strategy))),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("laplacian_{name}"), &parameter_string),
                &image,
                |b, img| b.iter(|| black_box(laplacian_u8(img, strategy))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_convolution);
criterion_main!(benches);
