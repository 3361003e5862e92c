#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{fmt::Display, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use gamutshift::{ColorReducer, ColorSpace, ImagePipeline, Operation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Copy, Clone, ValueEnum)]
enum CliColorSpace {
    AdobeRgb,
    AppleRgb,
    WideGamut,
}

impl From<CliColorSpace> for ColorSpace {
    fn from(value: CliColorSpace) -> Self {
        match value {
            CliColorSpace::AdobeRgb => ColorSpace::AdobeRgb,
            CliColorSpace::AppleRgb => ColorSpace::AppleRgb,
            CliColorSpace::WideGamut => ColorSpace::WideGamut,
        }
    }
}

impl Display for CliColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ColorSpace::from(*self))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert to gray with the 0.3 / 0.59 / 0.11 luminance weights.
    Gray,
    /// Convert to another RGB color space through CIE XYZ.
    Space {
        #[arg(long, default_value_t = CliColorSpace::AdobeRgb)]
        space: CliColorSpace,
    },
    /// Reduce the number of levels of each channel.
    Reduce {
        #[arg(value_parser = clap::value_parser!(u16).range(1..=256))]
        red: u16,

        #[arg(value_parser = clap::value_parser!(u16).range(1..=256))]
        green: u16,

        #[arg(value_parser = clap::value_parser!(u16).range(1..=256))]
        blue: u16,
    },
}

#[derive(Parser)]
pub struct Options {
    #[arg(short, long, default_value_t = 0)]
    threads: u8,

    #[arg(long)]
    verbose: bool,

    input: PathBuf,

    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

fn operation(command: Command) -> Result<Operation, gamutshift::InvalidArgument> {
    Ok(match command {
        Command::Gray => Operation::Grayscale,
        Command::Space { space } => ColorSpace::from(space).into(),
        Command::Reduce { red, green, blue } => ColorReducer::new(red, green, blue)?.into(),
    })
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let Options { threads, input, output, command, .. } = options;

    macro_rules! timed {
        ($name: expr, $val: expr) => {{
            let time = std::time::Instant::now();
            let value = $val;
            tracing::info!(stage = %$name, elapsed_ms = time.elapsed().as_millis(), "done");
            value
        }};
    }

    let operation = operation(command)?;
    let image = timed!("read image", image::open(&input)?).into_rgba8();

    let mut pipeline = ImagePipeline::from(&image);
    pipeline.operation(operation);

    let image = timed!(
        operation,
        match threads {
            0 => pipeline.rgbaimage_par(),
            1 => pipeline.rgbaimage(),
            t => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t.into())
                    .build()?;

                pool.install(|| pipeline.rgbaimage_par())
            }
        }
    );

    timed!("write image", image.save(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    let options = Options::parse();

    let default_filter = if options.verbose {
        "gamutshift=debug,convert=info"
    } else {
        "convert=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
