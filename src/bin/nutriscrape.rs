//! Command-line entry point.
//!
//! Exit codes: 0 success, 1 failure, 2 when extraction is asked to run
//! before discovery has produced a URL list.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use nutriscrape::artifact::{self, URL_LIST_FILE};
use nutriscrape::{Error, Fetch, HttpFetcher, Options, SiteProfile};

#[derive(Parser, Debug)]
#[command(name = "nutriscrape", version, about = "Collect nutritional facts from a product catalog")]
struct Cli {
    /// Site profile JSON (defaults to the built-in perdigao.com.br profile)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Directory for generated files
    #[arg(long, global = true, default_value = "dados")]
    out_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Also append log events to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect product URLs from every catalog section
    Discover(DiscoverArgs),
    /// Extract nutritional data for every URL in the URL list
    Extract(ExtractArgs),
    /// Discover, then extract
    Run {
        #[command(flatten)]
        discover: DiscoverArgs,
        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// Save one page's HTML for offline inspection
    Snapshot {
        /// Page to save
        url: String,
    },
}

#[derive(Args, Debug)]
struct DiscoverArgs {
    /// Pause between section requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// URL list path (defaults to <out-dir>/product_urls.json)
    #[arg(long)]
    urls: Option<PathBuf>,

    /// Dataset file name (defaults to a timestamped name)
    #[arg(long)]
    output: Option<String>,

    /// Leave the CATEGORIA column out
    #[arg(long)]
    no_category: bool,
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();
    Ok(())
}

struct App {
    profile: SiteProfile,
    options: Options,
    fetcher: HttpFetcher,
    out_dir: PathBuf,
}

fn discover(app: &App, args: &DiscoverArgs) -> anyhow::Result<PathBuf> {
    let options = Options {
        pause: Duration::from_millis(args.pause_ms),
        ..app.options.clone()
    };

    let urls = nutriscrape::discover(&app.fetcher, &app.profile, &options);
    let path = app.out_dir.join(URL_LIST_FILE);
    artifact::save_url_list(&path, &urls)?;

    for (i, url) in urls.iter().take(5).enumerate() {
        info!("{}. {url}", i + 1);
    }
    if urls.len() > 5 {
        info!("... and {} more", urls.len() - 5);
    }
    Ok(path)
}

fn extract(app: &App, args: &ExtractArgs, default_urls: &Path) -> anyhow::Result<()> {
    let urls_path = args.urls.as_deref().unwrap_or(default_urls);
    let urls = artifact::load_url_list(urls_path)?;
    info!(count = urls.len(), path = %urls_path.display(), "URL list loaded");

    let options = Options {
        include_category: !args.no_category,
        ..app.options.clone()
    };

    let dataset = nutriscrape::extract_all(&app.fetcher, &urls, &app.profile, &options);
    if dataset.is_empty() {
        bail!("no product could be extracted from {} URLs", urls.len());
    }

    let filename = artifact::dataset_filename(
        args.output.as_deref(),
        &app.profile.dataset_prefix,
        Local::now().naive_local(),
    );
    let path = artifact::save_dataset(&dataset, &app.out_dir, &filename)?;
    info!(path = %path.display(), records = dataset.len(), "done");
    Ok(())
}

fn snapshot(app: &App, url: &str) -> anyhow::Result<()> {
    let html = app.fetcher.fetch(url)?;
    let path = artifact::save_snapshot(&app.out_dir, url, &html, Local::now().naive_local())?;
    info!(path = %path.display(), "page saved");
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let profile = match &cli.profile {
        Some(path) => SiteProfile::from_path(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => SiteProfile::builtin()?,
    };
    info!(profile = %profile.name, sections = profile.sections.len(), "profile loaded");

    let options = Options {
        timeout: Duration::from_secs(cli.timeout),
        ..Options::default()
    };
    let fetcher = HttpFetcher::new(&options)?;

    let app = App {
        profile,
        options,
        fetcher,
        out_dir: cli.out_dir,
    };
    let default_urls = app.out_dir.join(URL_LIST_FILE);

    match &cli.command {
        Command::Discover(args) => {
            discover(&app, args)?;
        }
        Command::Extract(args) => extract(&app, args, &default_urls)?,
        Command::Run { discover: d, extract: e } => {
            let urls_path = discover(&app, d)?;
            extract(&app, e, &urls_path)?;
        }
        Command::Snapshot { url } => snapshot(&app, url)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::MissingUrlList { .. }) = err.downcast_ref::<Error>() {
                error!("{err}");
                return ExitCode::from(2);
            }
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
