//! hdrscan: C header prototype scanner with XML output
//!
//! Scans C header text for function declarations and definitions and
//! renders every match (name, return type, parameter list, variadic flag)
//! as an XML document. Extraction is a two-stage text pipeline: a
//! finite-state scrubber removes comments, string-literal bodies, and
//! `#define` bodies, then a structural scanner matches prototype-shaped
//! text in the cleaned output. This is a best-effort textual heuristic,
//! not a C front end.
//!
//! # Example
//!
//! ```
//! use hdrscan::{HeaderScan, ScanConfig};
//!
//! let mut scan = HeaderScan::new(ScanConfig::default());
//! scan.process_file("log.h", "void log_msg(const char* fmt, ...);\n");
//!
//! let records = scan.into_records();
//! assert_eq!(records[0].name, "log_msg");
//! assert!(records[0].is_variadic);
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod scan;
pub mod schema;
pub mod scrub;
pub mod walk;
pub mod xml;

// Re-export commonly used types
pub use cli::Cli;
pub use error::{Result, ScanError};
pub use extract::{extract, normalize_type, split_params, Candidate};
pub use scan::HeaderScan;
pub use schema::{FunctionRecord, Parameter, ScanConfig};
pub use scrub::scrub;
pub use walk::collect_headers;
pub use xml::write_document;
