use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fast_image_filter::{pnm, FilterOptions, FilterType, Filtered, Filterer, Image};
use log::{debug, error, warn};

mod structs;

const FILTER_TYPES_HELP: &str = "Filter types:\n  1 - Blur\n  2 - Edge Detection";

#[derive(Parser)]
#[clap(author = "Kirill K.")]
#[clap(version, about, long_about = None)]
#[clap(after_help = FILTER_TYPES_HELP)]
struct Cli {
    /// Path to source image file (binary PPM)
    #[clap(value_parser)]
    input_path: PathBuf,

    /// Path to result image file
    #[clap(value_parser)]
    output_path: PathBuf,

    /// Type of filter: 1 - blur, 2 - edge detection.
    /// Image is left unchanged for other values.
    #[clap(allow_negative_numbers = true)]
    filter_type: String,

    /// Maximum number of threads used by the parallel run (0 - all available CPUs)
    #[clap(short, long, default_value_t = 0)]
    threads: usize,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("{}", err.kind());
            print_usage();
            process::exit(1);
        }
    };
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    filter(&cli)
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
    println!("{FILTER_TYPES_HELP}");
}

fn filter(cli: &Cli) -> Result<()> {
    let filter_type = structs::parse_filter_code(&cli.filter_type);
    if filter_type.is_none() {
        warn!(
            "Unknown filter type {:?}, the image will be left unchanged",
            cli.filter_type
        );
    }

    let src_image = pnm::read_file(&cli.input_path)
        .with_context(|| format!("Failed to read source image from {:?}", cli.input_path))?;
    debug!(
        "Source image has size {}x{}",
        src_image.width(),
        src_image.height()
    );

    let options = FilterOptions::new();
    let (sequential, sequential_time) =
        timed_filter(&src_image, filter_type, options.sequential())?;
    let (parallel, parallel_time) =
        timed_filter(&src_image, filter_type, options.parallel(cli.threads))?;

    if sequential.image != parallel.image {
        error!("Results of sequential and parallel filtering are different");
    }

    let report = structs::Report {
        sequential: sequential_time,
        parallel: parallel_time,
        threads_used: parallel.threads_used,
    };
    print!("{report}");

    debug!("Save the result image into the file {:?}", cli.output_path);
    pnm::write_file(&cli.output_path, &parallel.image)
        .with_context(|| format!("Failed to write result image into {:?}", cli.output_path))?;
    Ok(())
}

fn timed_filter(
    src_image: &Image,
    filter_type: Option<FilterType>,
    options: FilterOptions,
) -> Result<(Filtered, Duration)> {
    let start = Instant::now();
    let result = match filter_type {
        Some(filter_type) => Filterer::new(options.filter(filter_type))
            .filter(src_image)
            .with_context(|| "Failed to filter image")?,
        None => Filtered {
            image: src_image.clone(),
            threads_used: 1,
        },
    };
    let elapsed = start.elapsed();
    debug!(
        "Filtering with {:?} took {:?} ({} threads)",
        options.threading, elapsed, result.threads_used
    );
    Ok((result, elapsed))
}
