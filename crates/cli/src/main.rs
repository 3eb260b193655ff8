// ABOUTME: CLI binary for gleaner: fetch a page, extract title/link records, write JSON/CSV.
// ABOUTME: Maps each pipeline error kind to a distinct process exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use gleaner::{Client, ErrorCode, Locator, Record, ScrapeError};

/// Fetch a web page and extract title/link records from repeated elements.
#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(about = "Extract title/link records from repeated page elements")]
#[command(group(ArgGroup::new("target").required(true).multiple(false)))]
struct Args {
    /// URL to scrape
    #[arg(short, long)]
    url: String,

    /// Element tag to match (e.g. span, div, li)
    #[arg(long)]
    tag: String,

    /// Match elements carrying this class token
    #[arg(long, group = "target")]
    class: Option<String>,

    /// Match the element with this exact id attribute
    #[arg(long, group = "target")]
    id: Option<String>,

    /// Write records to this path as a JSON array
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Write records to this path as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Print progress diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes, one per error kind: 2 config, 3 fetch, 4 extract, 5 write.
/// clap usage errors also exit with 2.
fn exit_code(err: &ScrapeError) -> ExitCode {
    match err.code {
        ErrorCode::Config => ExitCode::from(2),
        ErrorCode::Fetch => ExitCode::from(3),
        ErrorCode::Extract => ExitCode::from(4),
        ErrorCode::Write => ExitCode::from(5),
    }
}

fn fail(err: &ScrapeError) -> ExitCode {
    eprintln!("error: {}", err);
    exit_code(err)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The clap group already enforces exclusivity; the locator check is
    // authoritative for library callers.
    let locator = match Locator::from_args(&args.tag, args.class.clone(), args.id.clone()) {
        Ok(locator) => locator,
        Err(e) => return fail(&e),
    };

    let client = Client::builder().build();

    if args.verbose {
        eprintln!("fetching {}", args.url);
    }
    let fetched = match client.fetch(&args.url) {
        Ok(fetched) => fetched,
        Err(e) => return fail(&e),
    };
    if args.verbose {
        eprintln!(
            "fetched {} characters from {}",
            fetched.body.chars().count(),
            fetched.final_url
        );
    }

    let records = match gleaner::extract(&fetched.body, &locator) {
        Ok(records) => records,
        Err(e) => return fail(&e),
    };
    if args.verbose {
        eprintln!("found {} matching records", records.len());
        for Record { title, link } in &records {
            eprintln!("  {} -> {}", title, link);
        }
    }

    // Each output target is independent; a failed write does not stop the
    // other target from being attempted.
    let mut exit = ExitCode::SUCCESS;
    if let Some(path) = &args.json {
        match gleaner::write_json(&records, path) {
            Ok(()) => {
                if args.verbose {
                    eprintln!("wrote JSON to {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                exit = exit_code(&e);
            }
        }
    }
    if let Some(path) = &args.csv {
        match gleaner::write_csv(&records, path) {
            Ok(()) => {
                if args.verbose {
                    eprintln!("wrote CSV to {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                exit = exit_code(&e);
            }
        }
    }

    if args.json.is_none() && args.csv.is_none() {
        println!("matched {} record(s)", records.len());
    }

    exit
}
