use clap::{Parser, Subcommand};
use qr_layout::config::RenderOptions;
use qr_layout::geometry::{ReservedMask, alignment_anchors};
use qr_layout::layout::{EncodingRegion, regions_for_all_versions};
use qr_layout::render::{self, RenderError};
use qr_layout::QrLayout;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrlayout", version, about = "QR symbol layout tools")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a symbol layout as a PNG
    Render {
        /// Symbol version (1-40, 41-44 for M1-M4)
        #[arg(value_name = "VERSION", allow_hyphen_values = true)]
        symbol: i64,
        #[arg(long, default_value = "qr.png")]
        output: PathBuf,
        /// Pixels per module
        #[arg(long)]
        scale: Option<u32>,
        /// Light border in modules
        #[arg(long)]
        quiet_zone: Option<u32>,
        /// Do not paint codeword blocks over structural patterns
        #[arg(long)]
        exclude_reserved: bool,
        /// Only draw the structural patterns
        #[arg(long)]
        blank: bool,
    },
    /// Print the codeword blocks in placement order
    Blocks {
        #[arg(value_name = "VERSION", allow_hyphen_values = true)]
        symbol: i64,
        #[arg(long)]
        exclude_reserved: bool,
    },
    /// Print the blank symbol as ASCII
    Show {
        #[arg(value_name = "VERSION", allow_hyphen_values = true)]
        symbol: i64,
    },
    /// Print size and block counts for every version
    Summary,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose, directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` directives take precedence; `--verbose` only raises the default
fn build_env_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn run(command: Command) -> Result<(), RenderError> {
    match command {
        Command::Render {
            symbol,
            output,
            scale,
            quiet_zone,
            exclude_reserved,
            blank,
        } => {
            let defaults = RenderOptions::from_env();
            let opts = RenderOptions {
                scale: scale.unwrap_or(defaults.scale),
                quiet_zone: quiet_zone.unwrap_or(defaults.quiet_zone),
                exclude_reserved: exclude_reserved || defaults.exclude_reserved,
            }
            .normalized();
            render_cmd(symbol, &output, &opts, blank)
        }
        Command::Blocks {
            symbol,
            exclude_reserved,
        } => blocks_cmd(symbol, exclude_reserved),
        Command::Show { symbol } => show_cmd(symbol),
        Command::Summary => {
            summary_cmd();
            Ok(())
        }
    }
}

fn render_cmd(
    symbol: i64,
    output: &std::path::Path,
    opts: &RenderOptions,
    blank: bool,
) -> Result<(), RenderError> {
    let layout = QrLayout::new(symbol)?;
    let img = if blank {
        render::blank_image(&layout, opts)
    } else {
        render::debug_image(&layout, opts)
    };
    render::save_png(&img, output)?;
    println!(
        "Version {} ({}x{} modules) -> {} ({}x{} px)",
        layout.version(),
        layout.width(),
        layout.width(),
        output.display(),
        img.width(),
        img.height()
    );
    Ok(())
}

fn blocks_cmd(symbol: i64, exclude_reserved: bool) -> Result<(), RenderError> {
    let layout = QrLayout::new(symbol)?;
    let excluded;
    let region = if exclude_reserved {
        excluded = EncodingRegion::generate_excluding(&layout.reserved_mask());
        &excluded
    } else {
        layout.encoding_region()
    };

    println!(
        "Version {}: {} blocks, {} modules",
        layout.version(),
        region.len(),
        region.module_count()
    );
    for (i, block) in region.blocks().iter().enumerate() {
        let coords: Vec<String> = block.iter().map(|c| format!("({},{})", c.x, c.y)).collect();
        println!("  [{:3}] {}", i, coords.join(" "));
    }
    Ok(())
}

fn show_cmd(symbol: i64) -> Result<(), RenderError> {
    let layout = QrLayout::new(symbol)?;
    println!("Version {} ({}x{}):", layout.version(), layout.width(), layout.width());
    print!("{}", render::to_ascii(&layout.blank_symbol()));
    Ok(())
}

fn summary_cmd() {
    println!(
        "{:>7} {:>5} {:>8} {:>7} {:>7} {:>5}",
        "version", "width", "anchors", "modules", "blocks", "data"
    );
    for (version, region) in regions_for_all_versions() {
        let data = ReservedMask::new(version).data_module_count();
        println!(
            "{:>7} {:>5} {:>8} {:>7} {:>7} {:>5}",
            version.to_string(),
            version.width(),
            alignment_anchors(version).len(),
            region.module_count(),
            region.len(),
            data
        );
    }
}
