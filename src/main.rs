use clap::Parser;
use image::ImageReader;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use platechars::batch::collect_images;
use platechars::config::{FilterParams, load_config};
use platechars::detection::{build_standard_pipeline, extract_regions};
use platechars::pipeline::{Pipeline, PipelineData};
use platechars::report;

#[derive(Parser)]
#[command(name = "platechars")]
#[command(about = "Locate the character row of license plates in images")]
struct Cli {
    /// Image files, or directories of images
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Write a text record of the located regions to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file of filter parameters; fields it leaves out take the library
    /// defaults, which search lines of constant column
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("platechars={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn process_image(pipeline: &Pipeline, path: &Path) -> anyhow::Result<PipelineData> {
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    let (regions, dims) = extract_regions(&img)?;
    info!("{}: {}x{}, {} regions", path.display(), dims.width, dims.height, regions.len());

    pipeline.run(regions, dims)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let params = match &args.config {
        Some(path) => load_config(path)?,
        None => FilterParams::plate_row(),
    };
    let pipeline = build_standard_pipeline(&params);
    let images = collect_images(&args.inputs)?;

    let mut record = match &args.output {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    for (count, path) in images.iter().enumerate() {
        info!("Handling #{}: {}", count + 1, path.display());

        let result = match process_image(&pipeline, path) {
            Ok(result) => result,
            Err(e) => {
                error!("Skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        if let Some(line) = result.line.as_ref().filter(|l| l.is_found()) {
            info!("degree: {}, radius: {}", line.angle_degrees, line.radius);
        }
        info!("{} region(s) found", result.len());
        for region in &result.regions {
            info!(
                "area: {}\tratio: {:.3}\tcenter: ({:.1}, {:.1})",
                region.area,
                region.bbox.aspect_ratio(),
                region.centroid.row,
                region.centroid.col
            );
        }

        if let Some(writer) = record.as_mut() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            report::write_record(writer, &name, &result.regions)?;
        }
    }

    if let Some(mut writer) = record {
        writer.flush()?;
    }

    Ok(())
}
