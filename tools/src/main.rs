use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use encoder::{encode_animation, AnimationConfig, DisposalMethod, EncodeLimits, Rgb};
use gifweave_tools::{
    collect_frame_entries, format_report_pretty, inspect_animation, load_config, merge_config,
    parse_rgb_hex, ConfigOverrides,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gifweave-tools",
    version,
    about = "Assemble static GIF frames into an animation and inspect GIF block layout"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge static GIF frames into one animated GIF.
    Assemble(AssembleArgs),
    /// Report the block layout of GIF files.
    Inspect {
        /// A GIF file, or a directory of them.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
    },
}

#[derive(Args)]
struct AssembleArgs {
    /// Frame files or directories of frames, in display order.
    #[arg(required = true)]
    frames: Vec<PathBuf>,
    /// Where to write the animation.
    #[arg(short, long)]
    output: PathBuf,
    /// Frame delay in hundredths of a second; once for all frames or once per frame.
    #[arg(long = "delay")]
    delays: Vec<u32>,
    /// Repeat count; 0 writes no loop extension.
    #[arg(long)]
    loop_count: Option<u16>,
    /// Color to make transparent, as RRGGBB.
    #[arg(long, value_parser = parse_rgb_hex)]
    transparent: Option<Rgb>,
    /// Disposal method for every frame.
    #[arg(long, value_enum)]
    disposal: Option<DisposalArg>,
    /// Saturate delays above 65535 instead of failing.
    #[arg(long)]
    clamp_delays: bool,
    /// JSON animation config; explicit flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Glob filter applied to directory arguments.
    #[arg(long)]
    glob: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DisposalArg {
    None,
    Keep,
    Background,
    Previous,
}

impl From<DisposalArg> for DisposalMethod {
    fn from(arg: DisposalArg) -> Self {
        match arg {
            DisposalArg::None => Self::Unspecified,
            DisposalArg::Keep => Self::Keep,
            DisposalArg::Background => Self::RestoreBackground,
            DisposalArg::Previous => Self::RestorePrevious,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assemble(args) => assemble(args),
        Command::Inspect { path, glob, format } => inspect(path, glob.as_deref(), format),
    }
}

fn assemble(args: AssembleArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => load_config(path).context("load config")?,
        None => AnimationConfig::default(),
    };
    let entries = collect_frame_entries(&args.frames, args.glob.as_deref())?;
    if entries.is_empty() {
        bail!("no frame files found");
    }
    let frames = entries
        .iter()
        .map(|entry| {
            fs::read(&entry.path).with_context(|| format!("read frame {}", entry.path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let overrides = ConfigOverrides {
        delays: args.delays,
        loop_count: args.loop_count,
        transparent: args.transparent,
        disposal: args.disposal.map(DisposalMethod::from),
        clamp_delays: args.clamp_delays,
    };
    let config = merge_config(base, &overrides, frames.len())?;
    let animation =
        encode_animation(&frames, &config, &EncodeLimits::default()).context("encode animation")?;

    fs::write(&args.output, animation.as_bytes())
        .with_context(|| format!("write animation {}", args.output.display()))?;
    tracing::info!(
        frames = frames.len(),
        bytes = animation.len(),
        output = %args.output.display(),
        "wrote animation"
    );
    Ok(())
}

fn inspect(path: PathBuf, glob: Option<&str>, format: InspectFormat) -> Result<()> {
    let many = path.is_dir();
    let entries = collect_frame_entries(&[path], glob)?;
    for entry in entries {
        let bytes =
            fs::read(&entry.path).with_context(|| format!("read gif {}", entry.path.display()))?;
        let report = inspect_animation(&bytes)
            .with_context(|| format!("inspect {}", entry.path.display()))?;
        match format {
            InspectFormat::Json => {
                let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                println!("{json}");
            }
            InspectFormat::Pretty => {
                if many {
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                }
                print!("{}", format_report_pretty(&report));
            }
        }
    }
    Ok(())
}
