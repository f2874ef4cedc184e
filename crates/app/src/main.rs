use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, CatalogService, CatalogSource, DEFAULT_DB_URL, normalize_sqlite_url,
    prepare_sqlite_dir,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidCatalogPath { raw: String },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog_service: Arc<CatalogService>,
    seeded_sample: bool,
}

impl UiApp for DesktopApp {
    fn catalog_service(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    fn seeded_sample(&self) -> bool {
        self.seeded_sample
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    catalog: Option<PathBuf>,
    log_level: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--catalog <catalog.json>] [--log-level <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --log-level {DEFAULT_LOG_LEVEL}");
    eprintln!();
    eprintln!("A --catalog file takes precedence over --db. An empty database is");
    eprintln!("seeded with the built-in sample catalog.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRACKER_DB_URL, TRACKER_CATALOG, TRACKER_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = normalize_sqlite_url(
            &env("TRACKER_DB_URL").unwrap_or_else(|| DEFAULT_DB_URL.into()),
        );
        let mut catalog = env("TRACKER_CATALOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut log_level = env("TRACKER_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(&value);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalogPath { raw: value });
                    }
                    catalog = Some(PathBuf::from(value));
                }
                "--log-level" => {
                    log_level = require_value(args, "--log-level")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if EnvFilter::try_new(&log_level).is_err() || log_level.trim().is_empty() {
            return Err(ArgsError::InvalidLogLevel { raw: log_level });
        }

        Ok(Self {
            db_url,
            catalog,
            log_level,
        })
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        eprintln!("logging already initialized; keeping the existing subscriber");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(&args.log_level);

    let source = match &args.catalog {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            CatalogSource::Json(path.clone())
        }
        None => {
            prepare_sqlite_dir(&args.db_url)?;
            log::info!("loading catalog from {}", args.db_url);
            CatalogSource::Sqlite(args.db_url.clone())
        }
    };
    let services = AppServices::bootstrap(source).await?;
    if services.seeded_sample() {
        log::info!("database was empty; seeded the built-in sample catalog");
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog_service: services.catalog_service(),
        seeded_sample: services.seeded_sample(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Course Tracker")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = argv.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.db_url, normalize_sqlite_url(DEFAULT_DB_URL));
        assert_eq!(args.catalog, None);
        assert_eq!(args.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--db", "sqlite:///tmp/flag.db", "--log-level", "debug"],
            &[("TRACKER_DB_URL", "sqlite:///tmp/env.db"), ("TRACKER_LOG", "warn")],
        )
        .unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/flag.db");
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn catalog_path_comes_from_env_or_flag() {
        let args = parse(&[], &[("TRACKER_CATALOG", "courses.json")]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("courses.json")));

        let args = parse(&["--catalog", "other.json"], &[("TRACKER_CATALOG", "courses.json")])
            .unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("other.json")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&["--db"], &[]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(&["--catalog", "  "], &[]),
            Err(ArgsError::InvalidCatalogPath { .. })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(&["--log-level", "app=loud"], &[]),
            Err(ArgsError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn env_and_flag_spellings_resolve_to_one_file() {
        let from_env = parse(&[], &[("TRACKER_DB_URL", "sqlite:dev.sqlite3")]).unwrap();
        let from_flag = parse(&["--db", "dev.sqlite3"], &[]).unwrap();
        let default = parse(&[], &[]).unwrap();
        assert_eq!(from_env.db_url, default.db_url);
        assert_eq!(from_flag.db_url, default.db_url);
    }
}
