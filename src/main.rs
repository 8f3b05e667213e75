use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use fractal_view::{
    Command, DEFAULT_JPEG_QUALITY, FilePresenterPort, JpegFilePresenter, PpmFilePresenter,
    REFERENCE_HEIGHT, REFERENCE_WIDTH, RenderGrid, Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Jpeg,
    Ppm,
}

impl OutputFormat {
    /// `.ppm` files are written as PPM, everything else as JPEG.
    fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ppm") => Self::Ppm,
            _ => Self::Jpeg,
        }
    }
}

/// Render the Mandelbrot set after a sequence of pan/zoom commands.
#[derive(Debug, Parser)]
#[command(name = "fractal_view", version)]
struct Args {
    #[arg(long, default_value_t = REFERENCE_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = REFERENCE_HEIGHT)]
    height: u32,

    #[arg(short, long, default_value = "mandelbrot.jpg")]
    output: PathBuf,

    /// Defaults to the output file's extension.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// JPEG quality, 1-100.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    quality: u8,

    /// Navigation steps applied in order: left, right, up, down, plus, minus.
    commands: Vec<String>,
}

fn run<P: FilePresenterPort>(
    mut session: Session<P>,
    commands: &[Command],
    output: &Path,
) -> Result<()> {
    for &command in commands {
        session.apply(command);
    }

    session.generate();
    info!("{}", session.viewport());
    session
        .write(output)
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(())
}

/// Validates every argument before rendering anything.
fn execute(args: Args) -> Result<()> {
    let grid = RenderGrid::new(args.width, args.height).context("invalid render size")?;
    let commands = args
        .commands
        .iter()
        .map(|token| token.parse::<Command>())
        .collect::<Result<Vec<_>, _>>()?;

    match args.format.unwrap_or_else(|| OutputFormat::infer(&args.output)) {
        OutputFormat::Jpeg => run(
            Session::new(grid, JpegFilePresenter::new(args.quality)),
            &commands,
            &args.output,
        ),
        OutputFormat::Ppm => run(
            Session::new(grid, PpmFilePresenter::new()),
            &commands,
            &args.output,
        ),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    execute(Args::parse())
}
