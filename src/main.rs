//! hdrscan CLI entry point

use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hdrscan::cli::Cli;
use hdrscan::error::{Result, ScanError};
use hdrscan::scan::HeaderScan;
use hdrscan::walk::collect_headers;
use hdrscan::xml::write_document;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap's default exit code for usage errors (2) would collide
            // with the input-error code, so the mapping lives here: help
            // and version exit 0, anything else is a usage error.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("hdrscan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hdrscan=warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut scan = HeaderScan::new(cli.scan_config());
    let scan_root = process_input(cli, &mut scan)?;
    let records = scan.into_records();
    debug!(functions = records.len(), "scan complete");

    match &cli.output {
        Some(path) => {
            let shown = path.display().to_string();
            let mut file = fs::File::create(path).map_err(|e| ScanError::output(&shown, e))?;
            write_document(&mut file, &records, &scan_root, cli.pretty_xml)
                .map_err(|e| ScanError::output(&shown, e))?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_document(&mut out, &records, &scan_root, cli.pretty_xml)
                .map_err(|e| ScanError::output("stdout", e))?;
        }
    }

    Ok(())
}

/// Feed every input file through the scan context. Returns the scan-root
/// string for the document's `dir` attribute: the directory path with a
/// trailing `/` ensured, or `""` when the input is a single file.
fn process_input(cli: &Cli, scan: &mut HeaderScan) -> Result<String> {
    let input: &Path = &cli.input;

    if input.is_dir() {
        for path in collect_headers(input)? {
            let rel = path
                .strip_prefix(input)
                .unwrap_or(&path)
                .display()
                .to_string();
            let raw = fs::read_to_string(&path)
                .map_err(|e| ScanError::input(path.display().to_string(), e))?;
            scan.process_file(&rel, &raw);
        }
        let mut root = input.display().to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        Ok(root)
    } else if input.is_file() {
        let shown = input.display().to_string();
        let raw = fs::read_to_string(input).map_err(|e| ScanError::input(shown.clone(), e))?;
        scan.process_file(&shown, &raw);
        Ok(String::new())
    } else {
        Err(ScanError::input(
            input.display().to_string(),
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        ))
    }
}
