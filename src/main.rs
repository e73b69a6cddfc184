use clap::Parser;
use std::path::PathBuf;

use feature_graphic::GraphicConfig;
use feature_graphic::render::{build_standard_pipeline, canvas, export};

#[derive(Parser)]
#[command(name = "feature-graphic")]
#[command(about = "Generate the HerdWise 1024x500 store feature graphic")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save the canvas after every stage to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = GraphicConfig::default();

    println!("Generating HerdWise feature graphic...");

    let mut pipeline = build_standard_pipeline(&config, args.verbose);
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let canvas = canvas::new_canvas(config.width, config.height, config.base_color);
    let output = pipeline.run(canvas)?;

    if args.verbose && !output.diagnostics.is_empty() {
        println!("{} asset(s) fell back", output.diagnostics.len());
    }

    let report = export::export_graphic(&output.canvas, &config.export)?;

    println!("Feature graphic saved as: {}", report.jpeg_path.display());
    println!("Dimensions: {}x{} pixels", report.width, report.height);
    println!("Ready to upload to Google Play Console!");
    println!("Also saved as: {}", report.png_path.display());

    Ok(())
}
