use chroma_swap::logger;
use chroma_swap::recolor_pipeline::{
    BatchItem, Channel, ColorModel, ChannelMode, ImageBuffer, ImageProcessor, Pixel,
    ProcessingConfig,
};

use tracing::{error, info};

/// Horizontal hue sweep with a vertical brightness ramp.
fn sample_image(width: usize, height: usize, alpha: u8) -> ImageBuffer {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = 255 - r;
            data.extend_from_slice(&Pixel::new(r, g, b, alpha).to_rgba());
        }
    }
    ImageBuffer { width, height, data }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting chroma_swap...");

    let mut model = ColorModel::new();
    model.set_from_hex("#1e90ff")?;
    model.set_mode(ChannelMode::Hsv);
    model.select(Channel::Hue);
    model.select(Channel::Saturation);

    info!("Target color: {} / {} / {}", model.to_hex(), model.target().rgb(), model.target().hsv());
    info!(
        "Channels: {}",
        model
            .selection()
            .channels()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let config = ProcessingConfig::builder()
        .workers(2)
        .parallel_pixels(true)
        .build();
    let processor = ImageProcessor::new(config);

    let mut items = vec![
        BatchItem::new("sunrise.png", sample_image(640, 480, 255)),
        BatchItem::new("overlay.webp", sample_image(320, 240, 128)),
        BatchItem::new("thumbnail.jpg", sample_image(64, 64, 255)),
    ];

    let result = processor.process_batch_items(
        &mut items,
        model.selection(),
        model.target(),
        |progress| {
            info!(
                "{:.0}% Complete ({}/{})",
                progress.percentage(),
                progress.completed,
                progress.total
            );
        },
    );

    match result {
        Ok(()) => {
            for item in &items {
                if let Some(output) = &item.output {
                    info!("{} -> {} ({}x{})", item.name, item.output_name(), output.width, output.height);
                }
            }
            info!("Recolor successful!");
        }
        Err(e) => error!("Recolor failed: {}", e),
    }

    Ok(())
}
