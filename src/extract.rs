//! Prototype extraction over scrubbed header text
//!
//! The extractor walks clean text (see [`crate::scrub`]) looking for the
//! textual shape `<type tokens> <identifier> ( <args> )`, then decomposes
//! each argument list into typed parameters. It is deliberately a greedy
//! textual heuristic, not a C parser: call-shaped text preceded by stray
//! identifier tokens (`return foo(x)`) produces a candidate too, and no
//! attempt is made to tell the two apart. Filtering decides what survives.

use crate::schema::Parameter;

/// One prototype-shaped match, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Declared return type, trimmed but otherwise as written.
    pub return_type: String,
    /// Function name, a single identifier token.
    pub name: String,
    /// Raw text between the matching parentheses.
    pub args: String,
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_type_char(c: char) -> bool {
    is_ident(c) || c.is_whitespace() || c == '*'
}

/// Find every candidate prototype in scrubbed text, left to right,
/// non-overlapping.
///
/// For each `(` the scanner walks backwards: the rightmost identifier run
/// before the paren is the name, and the maximal run of
/// identifier/whitespace/`*` characters before that is the return type.
/// Both must be non-empty. The argument text extends to the matching close
/// paren, tracking nesting depth; a list left open at end of input aborts
/// the candidate.
pub fn extract(clean: &str) -> Vec<Candidate> {
    let chars: Vec<char> = clean.chars().collect();
    let mut found = Vec::new();
    let mut i = 0;

    while let Some(p) = next_open_paren(&chars, i) {
        // Name: rightmost identifier run before the paren, whitespace
        // between the two allowed.
        let mut name_end = p;
        while name_end > i && chars[name_end - 1].is_whitespace() {
            name_end -= 1;
        }
        let mut name_start = name_end;
        while name_start > i && is_ident(chars[name_start - 1]) {
            name_start -= 1;
        }
        if name_start == name_end {
            i = p + 1;
            continue;
        }

        // Return type: everything type-shaped before the name, bounded by
        // the previous match so candidates never overlap.
        let mut type_start = name_start;
        while type_start > i && is_type_char(chars[type_start - 1]) {
            type_start -= 1;
        }
        let return_type = trim_type_region(&chars[type_start..name_start]);
        if return_type.is_empty() {
            i = p + 1;
            continue;
        }

        let Some(close) = matching_close(&chars, p) else {
            i = p + 1;
            continue;
        };

        found.push(Candidate {
            return_type,
            name: chars[name_start..name_end].iter().collect(),
            args: chars[p + 1..close].iter().collect(),
        });
        i = close + 1;
    }

    found
}

fn next_open_paren(chars: &[char], from: usize) -> Option<usize> {
    chars[from..]
        .iter()
        .position(|&c| c == '(')
        .map(|k| from + k)
}

/// Index of the `)` matching the `(` at `open`, tracking nesting.
fn matching_close(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (k, &c) in chars.iter().enumerate().skip(open + 1) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(k);
                }
            }
            _ => {}
        }
    }
    None
}

/// Trim a return-type region: outer whitespace goes, and leading `*`
/// characters belong to the preceding declarator, not to this type.
fn trim_type_region(region: &[char]) -> String {
    let text: String = region.iter().collect();
    let mut trimmed = text.trim();
    while let Some(rest) = trimmed.strip_prefix('*') {
        trimmed = rest.trim_start();
    }
    trimmed.to_string()
}

/// Decompose a raw argument list into parameters.
///
/// Segments split at top-level commas. A segment of exactly `...` sets the
/// variadic flag and contributes no parameter; a segment with no named
/// parameter (`void`, pure whitespace, a trailing comma's empty tail)
/// contributes nothing. Returns `None` as soon as the named-parameter count
/// exceeds `max_params` - the whole candidate is rejected without looking
/// at the remaining segments.
pub fn split_params(args: &str, max_params: Option<usize>) -> Option<(Vec<Parameter>, bool)> {
    let mut params = Vec::new();
    let mut variadic = false;

    for segment in split_top_level(args) {
        let seg = segment.trim();
        if seg.is_empty() {
            continue;
        }
        if seg == "..." {
            variadic = true;
        } else if let Some(param) = split_param(seg) {
            params.push(param);
            if max_params.is_some_and(|max| params.len() > max) {
                return None;
            }
        }
    }

    Some((params, variadic))
}

/// Split at commas that sit at paren depth zero.
fn split_top_level(args: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in args.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// Split one segment into (type, name).
///
/// The name is the last identifier run directly preceded by whitespace or
/// `*`; the lookbehind is what keeps a bare `void` from becoming a
/// parameter named `void`. Everything before the name, trimmed, is the
/// type text.
fn split_param(seg: &str) -> Option<Parameter> {
    let chars: Vec<char> = seg.chars().collect();
    let mut j = chars.len();

    while j > 0 {
        if !is_ident(chars[j - 1]) {
            j -= 1;
            continue;
        }
        let end = j;
        let mut start = j;
        while start > 0 && is_ident(chars[start - 1]) {
            start -= 1;
        }
        if start > 0 && (chars[start - 1].is_whitespace() || chars[start - 1] == '*') {
            let type_text: String = chars[..start].iter().collect();
            return Some(Parameter {
                type_text: type_text.trim().to_string(),
                name: chars[start..end].iter().collect(),
            });
        }
        j = start;
    }

    None
}

/// Canonicalize type spelling: whitespace runs collapse to a single space
/// and the space before a `*` is dropped, so `char  *` becomes `char*`.
pub fn normalize_type(ty: &str) -> String {
    let mut collapsed = String::with_capacity(ty.len());
    let mut pending_space = false;
    for c in ty.trim().chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !collapsed.is_empty() && c != '*' {
            collapsed.push(' ');
        }
        pending_space = false;
        collapsed.push(c);
    }
    collapsed
}
