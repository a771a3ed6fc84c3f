//! Record model for discovered functions

/// One declared parameter of a function.
///
/// A parameter is always a named, typed parameter. The variadic ellipsis is
/// not represented here - it only sets [`FunctionRecord::is_variadic`] on
/// the owning record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Declared type, pointer qualifiers included.
    pub type_text: String,

    /// Parameter identifier.
    pub name: String,
}

/// One discovered function declaration or definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Declared return type.
    pub return_type: String,

    /// Function name.
    pub name: String,

    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,

    /// True when the parameter list ends in the ellipsis token.
    pub is_variadic: bool,

    /// Path of the declaring file, relative to the scan root for directory
    /// scans; the input path as given for a single-file scan.
    pub source_path: String,
}

/// Filtering and normalization policy for one run. Immutable once built.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    /// Drop functions whose return type carries the `inline` qualifier.
    pub skip_inline: bool,

    /// Drop functions with more named parameters than this. `None` means
    /// unbounded.
    pub max_params: Option<usize>,

    /// Keep only the first function seen under each name, across all files.
    pub dedupe_by_name: bool,

    /// Canonicalize whitespace and pointer spacing in type text.
    pub collapse_whitespace: bool,
}
