//! XML document writer
//!
//! Renders the accumulated records as one `<functions>` document. The
//! declaration line is written literally, never through the element
//! writer; when the record list is empty the declaration is all there is -
//! no empty root element.

use std::io::{self, Write};

use crate::schema::FunctionRecord;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serialize `records` to `out`.
///
/// `scan_root` becomes the root element's `dir` attribute (empty for a
/// single-file scan). With `indent` set, every element sits on its own
/// line, indented by that many spaces per nesting level; without it the
/// whole body follows the declaration line as one line.
pub fn write_document<W: Write>(
    out: &mut W,
    records: &[FunctionRecord],
    scan_root: &str,
    indent: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "{XML_DECLARATION}")?;
    if records.is_empty() {
        return Ok(());
    }

    let mut writer = ElementWriter { out, indent, depth: 0 };
    writer.open("functions", &[("dir", scan_root)])?;

    for record in records {
        let varargs = if record.is_variadic { "yes" } else { "no" };
        let attrs = [
            ("file", record.source_path.as_str()),
            ("name", record.name.as_str()),
            ("varargs", varargs),
            ("rettype", record.return_type.as_str()),
        ];

        if record.parameters.is_empty() {
            writer.empty("function", &attrs)?;
            continue;
        }

        writer.open("function", &attrs)?;
        for (idx, param) in record.parameters.iter().enumerate() {
            let number = (idx + 1).to_string();
            writer.empty(
                "param",
                &[("number", number.as_str()), ("type", param.type_text.as_str())],
            )?;
        }
        writer.close("function")?;
    }

    writer.close("functions")?;
    if indent.is_none() {
        writeln!(out)?;
    }
    Ok(())
}

/// Depth-tracking element writer shared by open/empty/close tags.
struct ElementWriter<'a, W: Write> {
    out: &'a mut W,
    indent: Option<usize>,
    depth: usize,
}

impl<W: Write> ElementWriter<'_, W> {
    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        self.tag(&format!("<{}{}>", name, render_attrs(attrs)))?;
        self.depth += 1;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        self.tag(&format!("<{}{}/>", name, render_attrs(attrs)))
    }

    fn close(&mut self, name: &str) -> io::Result<()> {
        self.depth -= 1;
        self.tag(&format!("</{name}>"))
    }

    fn tag(&mut self, text: &str) -> io::Result<()> {
        match self.indent {
            Some(width) => {
                writeln!(self.out, "{}{}", " ".repeat(width * self.depth), text)
            }
            None => write!(self.out, "{text}"),
        }
    }
}

fn render_attrs(attrs: &[(&str, &str)]) -> String {
    let mut rendered = String::new();
    for (key, value) in attrs {
        rendered.push(' ');
        rendered.push_str(key);
        rendered.push_str("=\"");
        rendered.push_str(&escape_attr(value));
        rendered.push('"');
    }
    rendered
}

/// Escape the characters that are unsafe inside a double-quoted attribute.
/// Newlines and tabs become character references so a multi-line return
/// type can never break an attribute across physical lines.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
