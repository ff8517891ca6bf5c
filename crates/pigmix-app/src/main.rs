//! Pigmix - natural pigment color mixing from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pigmix_app::commands;
use pigmix_app::render::save_gradient;
use pigmix_app::AppConfig;
use pigmix_color::{LutFormat, Mixer};
use pigmix_core::{parse_color, to_hex};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "pigmix")]
#[command(about = "Mix colors the way paint mixes")]
struct Cli {
    /// JSON config file
    #[arg(long, env = "PIGMIX_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// LUT file to mix with
    #[arg(long, env = "PIGMIX_LUT", global = true)]
    lut: Option<PathBuf>,

    /// LUT file format: "compressed" (base64 zlib) or "raw"
    #[arg(long, env = "PIGMIX_LUT_FORMAT", global = true)]
    lut_format: Option<LutFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mix two colors and print pigment and naive results as JSON
    Mix {
        /// First color (#rrggbb or pigment name)
        a: String,
        /// Second color (#rrggbb or pigment name)
        b: String,
        /// Amount of the second color, 0..1 (values outside extrapolate)
        #[arg(short, long, default_value = "0.5", allow_hyphen_values = true)]
        ratio: String,
    },
    /// Render naive vs pigment gradients to a PNG file
    Gradient {
        a: String,
        b: String,
        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 400)]
        width: u32,
        #[arg(long, default_value_t = 100)]
        height: u32,
    },
    /// Mix several colors given as COLOR:WEIGHT
    Blend {
        #[arg(required = true)]
        parts: Vec<String>,
    },
    /// Convert a raw LUT into the compressed base64 form
    PackLut {
        input: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a summary of the configured LUT
    InspectLut,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine readable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(cli.lut, cli.lut_format);

    let load_mixer = || -> Result<Mixer> { Ok(Mixer::new(Arc::new(config.open_lut()?))) };

    match cli.command {
        Commands::Mix { a, b, ratio } => {
            let report = commands::mix(&load_mixer()?, &a, &b, &ratio)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Gradient {
            a,
            b,
            output,
            width,
            height,
        } => {
            let a = parse_color(&a).context("first color")?;
            let b = parse_color(&b).context("second color")?;
            save_gradient(&load_mixer()?, a, b, width, height, &output)?;
        }
        Commands::Blend { parts } => {
            let rgb = commands::blend(&load_mixer()?, &parts)?;
            println!("{} {:?}", to_hex(rgb), rgb);
        }
        Commands::PackLut { input, output } => {
            let packed = commands::pack_lut(&input)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, packed)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "Compressed LUT written");
                }
                None => println!("{}", packed),
            }
        }
        Commands::InspectLut => {
            let mixer = load_mixer()?;
            let summary = commands::inspect(mixer.lut());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
