use android_sizes::config::ConvertConfig;
use android_sizes::density::Density;
use android_sizes::{batch, output};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::LazyLock;

/// Exit code when `--type` is missing.
const EXIT_USAGE: u8 = 2;

/// `--version` text: the crate version on a release tag, else the commit
/// the binary was built from.
static VERSION: LazyLock<String> = LazyLock::new(|| {
    match (env!("ON_RELEASE_TAG"), env!("GIT_HASH")) {
        ("true", _) => env!("CARGO_PKG_VERSION").to_string(),
        (_, "") => "dev@unknown".to_string(),
        (_, hash) => format!("dev@{hash}"),
    }
});

#[derive(Parser)]
#[command(name = "android-sizes")]
#[command(about = "Resize images into the other Android density buckets")]
#[command(long_about = "\
Resize images into the other Android density buckets

Every jpg, png and jpeg file directly inside --directory is taken to be at
the --type density. Resized copies for the three other densities are
written to sibling directories named after each density:

  res/
  ├── mdpi/            # --directory res/mdpi --type mdpi
  │   └── icon.png     # 100×100
  ├── ldpi/icon.png    # 75×75
  ├── hdpi/icon.png    # 150×150
  └── xhdpi/icon.png   # 200×200

Width ratios (height keeps the aspect ratio):

  from \\ to   ldpi   mdpi   hdpi   xhdpi
  ldpi          -    1.333  2.0    2.666
  mdpi        0.75     -    1.5    2.0
  hdpi        0.5    0.75     -    1.333
  xhdpi       0.375  0.5    0.666    -

Existing files in the density directories are overwritten.

Set ANDROID_SIZES_LOG (e.g. debug) for diagnostic logging on stderr.")]
#[command(version = VERSION.as_str())]
struct Cli {
    /// Density of the existing images
    #[arg(long = "type", value_enum)]
    density: Option<Density>,

    /// Directory to look in for the existing images
    #[arg(long, default_value = ".")]
    directory: PathBuf,

    /// Maximum parallel workers (default: all CPU cores)
    #[arg(long)]
    jobs: Option<usize>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let Some(density) = cli.density else {
        eprintln!("Please provide a --type argument");
        return ExitCode::from(EXIT_USAGE);
    };

    let config = ConvertConfig {
        max_processes: cli.jobs,
        ..ConvertConfig::new(cli.directory, density)
    };
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    init_thread_pool(&config);

    let report = match batch::run_batch(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    output::print_summary(&report);

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Route `tracing` output to stderr, filtered by `ANDROID_SIZES_LOG`.
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = std::env::var("ANDROID_SIZES_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Initialize the rayon thread pool from the configured worker cap.
fn init_thread_pool(config: &ConvertConfig) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_threads())
        .build_global()
        .ok();
}
