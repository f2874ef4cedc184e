use std::fmt;
use std::path::PathBuf;

use storage::json::JsonCatalogRepository;
use storage::repository::{CatalogRepository, Storage};
use storage::sample::sample_catalog;
use storage::sqlite::{DEFAULT_DB_URL, normalize_sqlite_url, prepare_sqlite_dir};

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    from: Option<PathBuf>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidFrom { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidFrom { raw } => write!(f, "invalid --from value: {raw}"),
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url = normalize_sqlite_url(
            &std::env::var("TRACKER_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.into()),
        );
        let mut from = std::env::var("TRACKER_SEED_FROM").ok().map(PathBuf::from);

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(&value);
                }
                "--from" => {
                    let value = require_value(&mut args, "--from")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidFrom { raw: value });
                    }
                    from = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, from })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: {DEFAULT_DB_URL})");
    eprintln!("  --from <catalog.json>     Seed from a JSON catalog instead of the built-in sample");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  TRACKER_DB_URL, TRACKER_SEED_FROM");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = match &args.from {
        Some(path) => JsonCatalogRepository::new(path).load_catalog().await?,
        None => sample_catalog()?,
    };

    prepare_sqlite_dir(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    storage.catalog.replace_catalog(&catalog).await?;

    println!(
        "Seeded {} courses ({} content items) into {}",
        catalog.courses().len(),
        catalog.total_items(),
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
