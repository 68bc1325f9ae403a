//! Ribbon demo: renders one label per corner into an SVG document.
//!
//! Usage:
//! ```text
//! cargo run --example ribbon                       # SVG on stdout
//! cargo run --example ribbon -- ribbons.svg        # write to a file
//! RUST_LOG=ribbon=debug cargo run --example ribbon # log computed offsets
//! ```

mod svg;

use ribbon::geometry::{BandStyle, ContainerSize, Corner, TextBounds};
use ribbon::label::{ImageBackground, LabelSpec, Rgba, TextDirection, TextSize};
use ribbon::render::DrawLabel;
use ribbon::Result;
use svg::SvgCanvas;

const PANEL: i32 = 200;
const GAP: i32 = 20;

/// Rough sans-serif metrics: 0.6 em advance per character, 0.7 em cap height.
fn approximate_bounds(text: &str, size: f64) -> TextBounds {
    let chars = f64::from(u32::try_from(text.chars().count()).unwrap_or(u32::MAX));
    TextBounds::new(chars * size * 0.6, size * 0.7)
}

fn labels() -> Result<Vec<LabelSpec>> {
    let base = LabelSpec::builder()
        .distance(20)
        .thickness(24)
        .text_size(TextSize::px(14.0)?)
        .build();

    Ok(vec![
        base.to_builder()
            .corner(Corner::TopLeft)
            .text("NEW")
            .background("black".parse::<Rgba>()?)
            .text_color("white".parse::<Rgba>()?)
            .build(),
        base.to_builder()
            .corner(Corner::TopRight)
            .text("SALE")
            .background("red".parse::<Rgba>()?)
            .text_color("yellow".parse::<Rgba>()?)
            .band_style(BandStyle::Stroke)
            .build(),
        base.to_builder()
            .corner(Corner::BottomRight)
            .distance(8)
            .thickness(30)
            .text("HOT")
            .background("blue".parse::<Rgba>()?)
            .text_color("green".parse::<Rgba>()?)
            .build(),
        base.to_builder()
            .corner(Corner::BottomLeft)
            .text("BETA")
            .background(ImageBackground::new("stripes.png", 256, 32))
            .text_color(Rgba::BLACK)
            .text_direction(TextDirection::RightToLeft)
            .build(),
    ])
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=ribbon=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("ribbon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let size = ContainerSize::new(PANEL, PANEL);
    let mut canvas = SvgCanvas::new();
    let labels = labels()?;

    for (i, spec) in (0_i32..).zip(&labels) {
        let x = GAP + (i % 2) * (PANEL + GAP);
        let y = GAP + (i / 2) * (PANEL + GAP);
        canvas.begin_panel(x, y, PANEL, PANEL)?;
        let geometry = DrawLabel::new(spec, size).execute(&approximate_bounds, &mut canvas)?;
        canvas.end_panel()?;
        tracing::info!(corner = %spec.corner(), ?geometry.bisector, "drew label");
    }

    let extent = GAP + 2 * (PANEL + GAP);
    let document = canvas.finish(extent, extent);
    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(err) = std::fs::write(&path, document) {
                tracing::error!(%path, %err, "failed to write SVG");
                std::process::exit(1);
            }
        }
        None => print!("{document}"),
    }
    Ok(())
}
