//! CLI argument definitions using clap
//!
//! hdrscan is a single-purpose batch tool, so the interface is one flat
//! option set rather than subcommands. Option names follow the long-option
//! style throughout.

use clap::Parser;
use std::path::PathBuf;

use crate::schema::ScanConfig;

/// C header prototype scanner with XML output
#[derive(Parser, Debug)]
#[command(name = "hdrscan")]
#[command(about = "Scans C headers for function prototypes and emits them as XML")]
#[command(version)]
pub struct Cli {
    /// Input file or directory (directories are scanned recursively for
    /// *.h files)
    #[arg(long, value_name = "PATH", default_value = "./")]
    pub input: PathBuf,

    /// Output file (default: standard output)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Indent the XML output; N is the number of spaces per nesting level
    #[arg(
        long = "pretty-xml",
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "4"
    )]
    pub pretty_xml: Option<usize>,

    /// Skip declarations and definitions of inline functions
    #[arg(long = "no-inline")]
    pub no_inline: bool,

    /// Only keep functions with at most N named parameters
    #[arg(long = "max-par", value_name = "N")]
    pub max_par: Option<usize>,

    /// Keep only the first declaration of each function name
    #[arg(long = "no-duplicates")]
    pub no_duplicates: bool,

    /// Collapse whitespace runs and pointer spacing in type text
    #[arg(long = "remove-whitespace")]
    pub remove_whitespace: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the filtering policy from the parsed flags.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            skip_inline: self.no_inline,
            max_params: self.max_par,
            dedupe_by_name: self.no_duplicates,
            collapse_whitespace: self.remove_whitespace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["hdrscan"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("./"));
        assert!(cli.output.is_none());
        assert!(cli.pretty_xml.is_none());
        let config = cli.scan_config();
        assert!(!config.skip_inline);
        assert!(config.max_params.is_none());
        assert!(!config.dedupe_by_name);
        assert!(!config.collapse_whitespace);
    }

    #[test]
    fn pretty_xml_bare_defaults_to_four() {
        let cli = Cli::try_parse_from(["hdrscan", "--pretty-xml"]).unwrap();
        assert_eq!(cli.pretty_xml, Some(4));
    }

    #[test]
    fn pretty_xml_accepts_explicit_width() {
        let cli = Cli::try_parse_from(["hdrscan", "--pretty-xml", "2"]).unwrap();
        assert_eq!(cli.pretty_xml, Some(2));
        let cli = Cli::try_parse_from(["hdrscan", "--pretty-xml=0"]).unwrap();
        assert_eq!(cli.pretty_xml, Some(0));
    }

    #[test]
    fn max_par_rejects_non_numeric() {
        let err = Cli::try_parse_from(["hdrscan", "--max-par", "lots"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(Cli::try_parse_from(["hdrscan", "--bogus"]).is_err());
    }
}
