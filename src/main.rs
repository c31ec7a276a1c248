use std::io::Read;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fscan::api::{self, finance, ScanRequestBody};
use fscan::cli::commands::{Cli, Command};
use fscan::cli::output;
use fscan::config::Settings;
use fscan::error::{FscanError, Result};
use fscan::models::{ScanRequest, SortField, SortOrder, TimeRange};
use fscan::query::QueryService;

fn main() {
    // Logs to stderr; stdout carries only JSON results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_cwd()?;
    match cli.command {
        Command::Scan {
            directory,
            hidden,
            pyc,
            init,
            ext,
            min_size,
            max_size,
            created,
            modified,
            accessed,
            sort_by,
            sort_order,
        } => cmd_scan(
            &settings,
            ScanArgs {
                directory,
                hidden,
                pyc,
                init,
                ext,
                min_size,
                max_size,
                created,
                modified,
                accessed,
                sort_by,
                sort_order,
            },
        ),
        Command::Request { body } => cmd_request(&settings, &body),
        Command::Finance { file } => cmd_finance(&settings, &file),
    }
}

struct ScanArgs {
    directory: String,
    hidden: bool,
    pyc: bool,
    init: bool,
    ext: Option<String>,
    min_size: Option<u64>,
    max_size: Option<u64>,
    created: Option<String>,
    modified: Option<String>,
    accessed: Option<String>,
    sort_by: SortField,
    sort_order: SortOrder,
}

fn cmd_scan(settings: &Settings, args: ScanArgs) -> Result<()> {
    let request = ScanRequest {
        directory: args.directory,
        exclude_hidden: !args.hidden,
        exclude_pyc: !args.pyc,
        exclude_init: !args.init,
        extensions: args
            .ext
            .map(|s| s.split(',').map(|e| e.trim().to_string()).collect()),
        min_size: args.min_size,
        max_size: args.max_size,
        created_range: parse_range_arg(args.created.as_deref())?,
        modified_range: parse_range_arg(args.modified.as_deref())?,
        accessed_range: parse_range_arg(args.accessed.as_deref())?,
        sort_by: args.sort_by,
        sort_order: args.sort_order,
    };

    let service = QueryService::from_settings(&settings.scan);
    let records = service.execute(&request)?;
    println!(
        "{}",
        output::format_json(&api::rows(&records), settings.output.pretty)
    );
    Ok(())
}

/// Parse a `START..END` range argument into an inclusive time range.
fn parse_range_arg(arg: Option<&str>) -> Result<Option<TimeRange>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let (start, end) = arg
        .split_once("..")
        .ok_or_else(|| FscanError::invalid_query("range must be in format START..END"))?;
    Ok(Some(TimeRange::new(
        api::parse_timestamp(start)?,
        api::parse_timestamp(end)?,
    )))
}

fn cmd_request(settings: &Settings, body: &str) -> Result<()> {
    let raw = if body == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(body)?
    };

    let request = serde_json::from_str::<ScanRequestBody>(&raw)
        .map_err(|e| FscanError::invalid_query(format!("bad request body: {e}")))?
        .into_request()?;

    let service = QueryService::from_settings(&settings.scan);
    let records = service.execute(&request)?;
    println!(
        "{}",
        output::format_json(&api::rows(&records), settings.output.pretty)
    );
    Ok(())
}

fn cmd_finance(settings: &Settings, file: &str) -> Result<()> {
    let report = finance::parse_finance_file(Path::new(file))?;
    println!("{}", output::format_json(&report, settings.output.pretty));
    Ok(())
}
