//! Run-scoped scan context: per-file pipeline and record accumulation
//!
//! `HeaderScan` owns the policy config and the growing record list for one
//! run. Files are fed through it sequentially; the accumulated records are
//! what cross-file policies (duplicate suppression) are checked against,
//! then the whole list is handed to the serializer once.

use tracing::debug;

use crate::extract::{extract, normalize_type, split_params, Candidate};
use crate::schema::{FunctionRecord, ScanConfig};
use crate::scrub::scrub;

/// Accumulates function records across every scanned file.
#[derive(Debug, Default)]
pub struct HeaderScan {
    config: ScanConfig,
    records: Vec<FunctionRecord>,
}

impl HeaderScan {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    /// Scrub one file's raw text, extract candidates, and keep the ones
    /// that pass the configured policies. Rejections are silent - a
    /// filtered candidate is an expected outcome, not an error.
    pub fn process_file(&mut self, source_path: &str, raw: &str) {
        let clean = scrub(raw);
        let candidates = extract(&clean);
        debug!(
            file = source_path,
            candidates = candidates.len(),
            "extracted candidates"
        );

        for candidate in candidates {
            self.apply(source_path, candidate);
        }
    }

    /// Policy chain, in order: inline skip, parameter cap, normalization,
    /// duplicate suppression, append.
    fn apply(&mut self, source_path: &str, candidate: Candidate) {
        if self.config.skip_inline && has_inline_token(&candidate.return_type) {
            return;
        }

        let Some((mut parameters, is_variadic)) =
            split_params(&candidate.args, self.config.max_params)
        else {
            return;
        };

        let mut return_type = candidate.return_type;
        if self.config.collapse_whitespace {
            return_type = normalize_type(&return_type);
            for param in &mut parameters {
                param.type_text = normalize_type(&param.type_text);
            }
        }

        if self.config.dedupe_by_name && self.records.iter().any(|r| r.name == candidate.name) {
            return;
        }

        self.records.push(FunctionRecord {
            return_type,
            name: candidate.name,
            parameters,
            is_variadic,
            source_path: source_path.to_string(),
        });
    }

    pub fn records(&self) -> &[FunctionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FunctionRecord> {
        self.records
    }
}

/// Whole-word check: `inline` as a token, not as a substring of another
/// identifier.
fn has_inline_token(return_type: &str) -> bool {
    return_type
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .any(|token| token == "inline")
}
