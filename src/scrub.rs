//! Noise-removal state machine for C header text
//!
//! Before any structural matching happens, a header is "scrubbed": line and
//! block comments, string-literal bodies, and `#define` bodies are stripped
//! so that delimiters hiding inside them (`(`, `)`, `//`, `,`) cannot
//! confuse the extractor. Everything else, newlines included, passes
//! through verbatim, so line-oriented diagnostics still line up with the
//! original file.
//!
//! Scrubbing is total: an unterminated comment, string, or macro simply
//! extends to the end of the input.

/// Scanner state, one per noise construct being skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Plain code, emitted verbatim.
    Code,
    /// Saw a `/`, waiting for the next char to decide comment vs. operator.
    PossibleSlash,
    /// Inside `// ...`, discarding up to (not including) the newline.
    LineComment,
    /// Inside `/* ... */`, discarding up to and including the terminator.
    BlockComment,
    /// Inside a string literal; delimiters are kept, the body is dropped.
    InString,
    /// Inside a `#define` body, discarding up to the first newline that is
    /// not escaped by a backslash line-continuation.
    InMacro,
}

/// Strip comments, string-literal bodies, and macro definitions from raw
/// header text.
///
/// The output is never longer than the input, and scrubbing already-clean
/// text is a no-op, so the operation is idempotent.
pub fn scrub(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Code => {
                if c == '/' {
                    state = State::PossibleSlash;
                } else if c == '"' {
                    out.push('"');
                    state = State::InString;
                } else if c == '#' && lookahead_is(&chars, i + 1, "define") {
                    i += "define".len();
                    state = State::InMacro;
                } else {
                    out.push(c);
                }
                i += 1;
            }
            State::PossibleSlash => {
                if c == '/' {
                    state = State::LineComment;
                    i += 1;
                } else if c == '*' {
                    state = State::BlockComment;
                    i += 1;
                } else {
                    // A real division or pointer-deref slash: emit it and
                    // re-process the current character as code.
                    out.push('/');
                    state = State::Code;
                }
            }
            State::LineComment => {
                if c == '\n' {
                    // The comment body goes, the line break stays.
                    out.push('\n');
                    state = State::Code;
                }
                i += 1;
            }
            State::BlockComment => {
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    state = State::Code;
                } else {
                    i += 1;
                }
            }
            State::InString => {
                if c == '\\' {
                    // Escaped character, including \" which must not close
                    // the literal.
                    i += 2;
                } else if c == '"' {
                    out.push('"');
                    state = State::Code;
                    i += 1;
                } else {
                    i += 1;
                }
            }
            State::InMacro => {
                if c == '\\' && chars.get(i + 1) == Some(&'\n') {
                    // Line continuation: the macro body spans into the next
                    // physical line.
                    i += 2;
                } else if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                    i += 1;
                } else {
                    i += 1;
                }
            }
        }
    }

    // A trailing slash that never resolved into a comment is ordinary code.
    if state == State::PossibleSlash {
        out.push('/');
    }

    out
}

/// True when `chars[at..]` starts with `word`.
fn lookahead_is(chars: &[char], at: usize, word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(k, w)| chars.get(at + k) == Some(&w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_code_passes_through() {
        let src = "int add(int a, int b);\n";
        assert_eq!(scrub(src), src);
    }

    #[test]
    fn line_comment_removed_newline_kept() {
        let out = scrub("int a; // trailing note\nint b;\n");
        assert_eq!(out, "int a; \nint b;\n");
        assert!(!out.contains("trailing"));
    }

    #[test]
    fn block_comment_removed() {
        assert_eq!(scrub("int /* hidden */ a;"), "int  a;");
    }

    #[test]
    fn multiline_block_comment_removed() {
        let out = scrub("before /* one\ntwo\nthree */ after");
        assert_eq!(out, "before  after");
    }

    #[test]
    fn unterminated_block_comment_extends_to_eof() {
        assert_eq!(scrub("int a; /* runs off"), "int a; ");
    }

    #[test]
    fn unterminated_string_extends_to_eof() {
        assert_eq!(scrub("char *s = \"no close"), "char *s = \"");
    }

    #[test]
    fn string_body_dropped_delimiters_kept() {
        assert_eq!(scrub("f(\"body\");"), "f(\"\");");
    }

    #[test]
    fn string_with_comment_markers_is_neutral() {
        let out = scrub("char *s = \"/* not a comment // */\";\nint real(void);\n");
        assert_eq!(out, "char *s = \"\";\nint real(void);\n");
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        assert_eq!(scrub("s = \"a\\\"b\"; t;"), "s = \"\"; t;");
    }

    #[test]
    fn define_body_dropped_up_to_newline() {
        assert_eq!(scrub("#define MAX 10\nint f(void);\n"), "\nint f(void);\n");
    }

    #[test]
    fn define_continuation_spans_lines() {
        let out = scrub("#define SUM(a, b) \\\n    ((a) + (b))\nint f(void);\n");
        assert_eq!(out, "\nint f(void);\n");
    }

    #[test]
    fn other_directives_pass_through() {
        let src = "#include <stdio.h>\n#ifdef FOO\n#endif\n";
        assert_eq!(scrub(src), src);
    }

    #[test]
    fn division_slash_survives() {
        assert_eq!(scrub("x = a / b;"), "x = a / b;");
    }

    #[test]
    fn trailing_slash_survives() {
        assert_eq!(scrub("a /"), "a /");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "int f(void); // c\n/* b */ char *g(int x);\n#define A 1\n\"s\"",
            "",
            "no noise at all\n",
            "/* unterminated",
        ];
        for src in inputs {
            let once = scrub(src);
            assert_eq!(scrub(&once), once, "scrub not idempotent for {:?}", src);
        }
    }

    #[test]
    fn output_never_longer_than_input() {
        let inputs = [
            "int f(void); // comment\n",
            "/**/",
            "\"\"",
            "#define X\n",
            "plain",
        ];
        for src in inputs {
            assert!(scrub(src).chars().count() <= src.chars().count());
        }
    }
}
