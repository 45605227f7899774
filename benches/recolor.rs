use chroma_swap::recolor_pipeline::{
    BatchItem, Channel, ChannelMode, ChannelSelection, ImageBuffer, ImageProcessor, ProcessingConfig,
    TargetColor,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn generate_mock_image(width: usize, height: usize) -> ImageBuffer {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            data.extend_from_slice(&[value, 255 - value, value / 2, 255]);
        }
    }
    ImageBuffer { width, height, data }
}

fn target() -> TargetColor {
    TargetColor::from_hex("#1e90ff").unwrap()
}

fn benchmark_image_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_by_size");
    let selection = ChannelSelection::with_channels(ChannelMode::Hsv, &[Channel::Hue]);

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            let processor = ImageProcessor::new(ProcessingConfig::default());

            b.iter(|| {
                let _ = processor.process_image(black_box(image), &selection, &target());
            });
        });
    }

    group.finish();
}

fn benchmark_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_modes");
    let image = generate_mock_image(500, 500);
    let processor = ImageProcessor::new(ProcessingConfig::default());

    let selections = vec![
        (ChannelSelection::with_channels(ChannelMode::Rgb, &[Channel::Red, Channel::Blue]), "rgb"),
        (ChannelSelection::with_channels(ChannelMode::Hsv, &[Channel::Hue, Channel::Value]), "hsv"),
    ];

    for (selection, label) in selections {
        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| {
                let _ = processor.process_image(black_box(image), &selection, &target());
            });
        });
    }

    group.finish();
}

fn benchmark_batch_parallelism(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_parallelism");
    let selection = ChannelSelection::with_channels(ChannelMode::Hsv, &[Channel::Saturation]);
    let items: Vec<BatchItem> = (0..8)
        .map(|i| BatchItem::new(format!("frame_{}.png", i), generate_mock_image(400, 300)))
        .collect();

    for workers in [1, 2, 4] {
        group.bench_with_input(BenchmarkId::new("workers", workers), &items, |b, items| {
            let config = ProcessingConfig::builder().workers(workers).build();
            let processor = ImageProcessor::new(config);

            b.iter(|| {
                let _ = processor.process_batch(black_box(items), &selection, &target(), |_| {});
            });
        });
    }

    group.bench_function("parallel_pixels", |b| {
        let config = ProcessingConfig::builder().parallel_pixels(true).build();
        let processor = ImageProcessor::new(config);

        b.iter(|| {
            let _ = processor.process_batch(black_box(&items), &selection, &target(), |_| {});
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_image_sizes,
    benchmark_modes,
    benchmark_batch_parallelism
);
criterion_main!(benches);
