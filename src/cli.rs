// src/cli.rs
use std::env;

use crate::config::options::{AppOptions, DelayRange};
use crate::csv::{rows_to_string, Quote};
use crate::error::{Result, ScrapeError};
use crate::progress::ConsoleProgress;
use crate::store::DataSet;

/// Delay used by the command line run; the library default is wider.
const CLI_DELAY: (f64, f64) = (2.0, 4.0);

pub struct CliArgs {
    pub options: AppOptions,
    pub preview: usize,
}

pub fn run() -> Result<()> {
    crate::log::init();
    let args = parse_args(env::args().skip(1))?;

    let mut progress = ConsoleProgress::new();
    let summary = crate::runner::run(&args.options, Some(&mut progress))?;

    if args.preview > 0 && !summary.reviews.is_empty() {
        let take = args.preview.min(summary.reviews.len());
        let ds = DataSet::from_reviews(&summary.reviews[..take]);
        print!("{}", rows_to_string(&ds.headers, &ds.rows, '\t', Quote::Needed));
    }
    if let Some(path) = &summary.written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<CliArgs> {
    let mut options = AppOptions::default();
    options.crawl.delay = DelayRange::new(CLI_DELAY.0, CLI_DELAY.1)?;
    let mut targets = Vec::new();
    let mut preview = 0usize;

    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-p" | "--pages" => {
                let v = args.next().ok_or_else(|| missing("--pages"))?;
                options.crawl.max_pages_each = v
                    .parse()
                    .map_err(|_| invalid(format!("Invalid page count: {v}")))?;
            }
            "--delay" => {
                let v = args.next().ok_or_else(|| missing("--delay"))?;
                options.crawl.delay = DelayRange::parse(&v)?;
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| missing("--out"))?;
                options.export.set_path(v);
            }
            "--preview" => {
                let v = args.next().ok_or_else(|| missing("--preview"))?;
                preview = v.parse().map_err(|_| invalid(format!("Invalid preview count: {v}")))?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => return Err(invalid(format!("Unknown arg: {flag}"))),
            url => targets.push(s!(url)),
        }
    }

    if !targets.is_empty() {
        options.targets = targets;
    }
    Ok(CliArgs { options, preview })
}

fn missing(flag: &str) -> ScrapeError {
    invalid(format!("Missing value for {flag}"))
}

fn invalid(msg: String) -> ScrapeError {
    ScrapeError::InvalidOptions(msg)
}
