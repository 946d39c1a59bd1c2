use clap::{Parser, Subcommand};
use nocrop::config::{self, BatchConfig, BorderPlacement, Centering, FillColor, FrameConfig};
use nocrop::{output, process};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nocrop")]
#[command(about = "Letterbox photos into a fixed portrait frame without cropping")]
#[command(long_about = "\
Letterbox photos into a fixed portrait frame without cropping

Every image in the input directory is scaled to fit the frame interior,
centered on the fill color, and surrounded by a border. Outputs keep the
source filename behind a prefix:

  image/                      exports/
  ├── beach.jpg        →      ├── nocrop_beach.jpg     (1100x1370)
  ├── IMG_0042.PNG     →      ├── nocrop_IMG_0042.PNG  (1100x1370)
  ├── notes.txt               │   skipped
  └── broken.webp             │   reported, batch continues

The picture fits the frame minus one border width (1060x1330 by default) and
the border is added around it. Use --border-inside to keep the canvas at the
frame size instead. Portrait images are scaled to the interior height,
landscape and square images to the interior width. Nothing is ever cropped.

Set RUST_LOG=debug for per-image geometry and skipped entries.")]
#[command(version = env!("NOCROP_VERSION"))]
struct Cli {
    /// Directory to read images from
    #[arg(long, default_value = "image", global = true)]
    input: PathBuf,

    /// Directory to write framed images to (created if missing)
    #[arg(long, default_value = "exports", global = true)]
    output: PathBuf,

    /// Border width in pixels on every edge
    #[arg(long, default_value_t = 20, global = true)]
    border: u32,

    /// Carve the border out of the frame so outputs match the frame size exactly
    #[arg(long, global = true)]
    border_inside: bool,

    /// Output canvas width in pixels
    #[arg(long, default_value_t = 1080, global = true)]
    frame_width: u32,

    /// Output canvas height in pixels
    #[arg(long, default_value_t = 1350, global = true)]
    frame_height: u32,

    /// Padding and border color: white, black, #rrggbb or #rgb
    #[arg(long, default_value = "white", global = true)]
    fill: FillColor,

    /// Comma-separated list of extensions to process
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "jpg,jpeg,png,webp,bmp,tiff",
        global = true
    )]
    ext: Vec<String>,

    /// Prefix prepended to each output filename
    #[arg(long, default_value = "nocrop_", global = true)]
    prefix: String,

    /// Give odd centering leftovers to the right/bottom so outputs always match the frame
    #[arg(long, global = true)]
    exact_centering: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Letterbox every image in the input directory (default)
    Process,
    /// Print the planned geometry for each image without writing anything
    Check,
}

impl Cli {
    fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            input_dir: self.input.clone(),
            output_dir: self.output.clone(),
            extensions: self
                .ext
                .iter()
                .map(|e| config::normalize_extension(e))
                .filter(|e| !e.is_empty())
                .collect(),
            prefix: self.prefix.clone(),
            frame: FrameConfig {
                frame_width: self.frame_width,
                frame_height: self.frame_height,
                border_width: self.border,
                border_placement: if self.border_inside {
                    BorderPlacement::Inside
                } else {
                    BorderPlacement::Outside
                },
                fill: self.fill,
                centering: if self.exact_centering {
                    Centering::Exact
                } else {
                    Centering::Truncate
                },
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = cli.batch_config();

    match cli.command.as_ref().unwrap_or(&Command::Process) {
        Command::Process => {
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_process_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            // The sender moves into process and drops on return, ending the printer
            let result = process::process(&config, Some(tx));
            if printer.join().is_err() {
                tracing::warn!("progress printer panicked");
            }
            let report = result?;

            output::print_summary(&report);
            if report.errors() > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Check => {
            println!("==> Checking {}", config.input_dir.display());
            let entries = process::check(&config)?;
            output::print_check_output(&entries);
            if entries.iter().any(|e| e.plan.is_err()) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
