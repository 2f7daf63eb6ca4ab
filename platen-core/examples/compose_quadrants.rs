use image::{Rgba, RgbaImage};
use platen::TemplateLayout;
use serde_json::json;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = json!({
        "placeholders": {
            "top-left": { "left": 0, "top": 0, "width": 128, "height": 128 },
            "top-right": { "left": 128, "top": 0, "width": 128, "height": 128 },
            "bottom-left": { "left": 0, "top": 128, "width": 128, "height": 128 },
            "bottom-right": { "left": 128, "top": 128, "width": 128, "height": 128 }
        }
    });

    let mut template = solid(256, 256, [0, 0, 0, 255]);
    let mut layout = TemplateLayout::new(&mut template, &config)?;

    layout.apply_component("top-left", &solid(128, 128, [214, 69, 80, 255]))?;
    layout.apply_component("top-right", &solid(128, 128, [245, 186, 66, 255]))?;
    layout.apply_component("bottom-left", &solid(128, 128, [66, 135, 245, 255]))?;
    layout.apply_component("bottom-right", &solid(128, 128, [92, 184, 92, 255]))?;

    let (covered, total) = layout.placeholder_total_coverage()?;
    eprintln!(
        "applied {} placeholders, coverage {covered}/{total}",
        layout.applied_placeholder_names().len()
    );

    let out_path = std::path::Path::new("target").join("compose_quadrants.png");
    template.save(&out_path)?;
    eprintln!("wrote {}", out_path.display());
    Ok(())
}
