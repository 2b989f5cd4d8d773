// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use collider_timeline::data_input::dataset_file::load_dataset;
use collider_timeline::output_format::parse_formats;
use collider_timeline::style::load_style;
use collider_timeline::timeline::PlotOptions;
use collider_timeline::{crate_version, make_collider_plot};

#[derive(Parser, Debug)]
#[command(
    name = "collider-timeline",
    version = crate_version(),
    about = "Timeline chart of particle colliders: operating years vs. energy"
)]
struct Cli {
    /// Built-in collider set (current, future1, future2) or a TOML dataset file.
    #[arg(short = 'C', long, default_value = "current")]
    colliders: String,

    /// Built-in style (style) or a TOML style file.
    #[arg(short = 'S', long, default_value = "style")]
    style: String,

    /// Base name for the output image file(s).
    #[arg(short, long, default_value = "colliders")]
    output: String,

    /// Format(s) for the output image files.
    #[arg(short, long = "format", num_args = 1.., default_values = ["png", "svg"])]
    formats: Vec<String>,

    /// Livingston plot style: show s/(2 m_proton) instead of sqrt(s).
    #[arg(short, long, default_value_t = false)]
    livingston: bool,

    /// Use a linear y scale.
    #[arg(long, default_value_t = false)]
    liny: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let formats = parse_formats(&cli.formats)?;
    let records = load_dataset(&cli.colliders)
        .with_context(|| format!("failed to load colliders '{}'", cli.colliders))?;
    let style = load_style(&cli.style).with_context(|| format!("failed to load style '{}'", cli.style))?;

    let options = PlotOptions {
        livingston: cli.livingston,
        linear_y: cli.liny,
    };
    let written = make_collider_plot(&records, &style, &cli.output, &formats, options)?;
    log::info!("Wrote {} file(s).", written.len());
    Ok(())
}
