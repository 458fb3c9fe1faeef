//! N-Triples graph loader and writer.
//!
//! Terms map onto statement strings as follows:
//!
//! | N-Triples          | Statement term     |
//! |--------------------|--------------------|
//! | `<http://x/a>`     | `http://x/a`       |
//! | `_:b0`             | `_:b0`             |
//! | `"v"@en`, `"1"^^<dt>` | verbatim          |
//!
//! Lines are written in canonical statement order.

use crate::cas::atomic_write;
use crate::errors::{io_error, parse_error, Result};
use ontologyops_core::graph::GraphLoader;
use ontologyops_core::model::{Statement, StatementSet};
use ontologyops_core::vocabulary::BLANK_NODE_PREFIX;
use std::fs;
use std::path::Path;

/// [`GraphLoader`] for line-based N-Triples files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NTriplesLoader;

impl NTriplesLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse N-Triples text. `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns `Parse` naming the first malformed line.
    pub fn parse_str(&self, text: &str, origin: &str) -> Result<StatementSet> {
        let mut statements = StatementSet::new();
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if let Some(statement) =
                parse_line(line).map_err(|reason| parse_error(origin, line_no, &reason))?
            {
                statements.insert(statement);
            }
        }
        Ok(statements)
    }

    /// Render a statement set as N-Triples text.
    pub fn render(&self, statements: &StatementSet) -> String {
        let mut out = String::new();
        for s in statements {
            out.push_str(&format!(
                "{} {} {} .\n",
                render_resource(&s.subject),
                render_resource(&s.predicate),
                render_object(&s.object)
            ));
        }
        out
    }
}

impl GraphLoader for NTriplesLoader {
    fn load(&self, path: &Path) -> Result<StatementSet> {
        let text = fs::read_to_string(path).map_err(|e| io_error("graph_load", e))?;
        let statements = self.parse_str(&text, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            statement_count = statements.len(),
            "Loaded graph"
        );
        Ok(statements)
    }

    fn write(&self, statements: &StatementSet, path: &Path) -> Result<()> {
        atomic_write(path, self.render(statements).as_bytes())?;
        tracing::debug!(
            path = %path.display(),
            statement_count = statements.len(),
            "Wrote graph"
        );
        Ok(())
    }
}

fn render_resource(term: &str) -> String {
    if term.starts_with(BLANK_NODE_PREFIX) {
        term.to_string()
    } else {
        format!("<{}>", term)
    }
}

fn render_object(term: &str) -> String {
    if term.starts_with('"') {
        term.to_string()
    } else {
        render_resource(term)
    }
}

type ParseResult<T> = std::result::Result<T, String>;

/// Parse one line; `None` for blank and comment lines.
fn parse_line(line: &str) -> ParseResult<Option<Statement>> {
    let rest = line.trim();
    if rest.is_empty() || rest.starts_with('#') {
        return Ok(None);
    }

    let (subject, rest) = parse_resource(rest)?;
    let (predicate, rest) = parse_iri(rest.trim_start())?;
    let (object, rest) = parse_object(rest.trim_start())?;

    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('.')
        .ok_or_else(|| "expected '.' after object".to_string())?;
    let rest = rest.trim_start();
    if !rest.is_empty() && !rest.starts_with('#') {
        return Err(format!("unexpected trailing content '{}'", rest));
    }

    Ok(Some(Statement::new(subject, predicate, object)))
}

fn parse_resource(input: &str) -> ParseResult<(String, &str)> {
    if input.starts_with(BLANK_NODE_PREFIX) {
        parse_blank(input)
    } else {
        parse_iri(input)
    }
}

fn parse_object(input: &str) -> ParseResult<(String, &str)> {
    if input.starts_with('"') {
        parse_literal(input)
    } else {
        parse_resource(input)
    }
}

fn parse_iri(input: &str) -> ParseResult<(String, &str)> {
    let body = input
        .strip_prefix('<')
        .ok_or_else(|| format!("expected '<' at '{}'", input))?;
    let end = body
        .find('>')
        .ok_or_else(|| "unterminated IRI".to_string())?;
    Ok((body[..end].to_string(), &body[end + 1..]))
}

fn parse_blank(input: &str) -> ParseResult<(String, &str)> {
    let mut end = input
        .find(|c: char| c.is_whitespace())
        .unwrap_or(input.len());
    // A label never ends in '.', so trailing dots are the terminator
    while input[..end].ends_with('.') {
        end -= 1;
    }
    let label = &input[..end];
    if label.len() <= BLANK_NODE_PREFIX.len() {
        return Err("empty blank node label".to_string());
    }
    Ok((label.to_string(), &input[end..]))
}

/// Literal kept verbatim, including language tag or datatype.
fn parse_literal(input: &str) -> ParseResult<(String, &str)> {
    let mut escaped = false;
    let mut close = None;
    for (i, c) in input.char_indices().skip(1) {
        match (escaped, c) {
            (true, _) => escaped = false,
            (false, '\\') => escaped = true,
            (false, '"') => {
                close = Some(i);
                break;
            }
            _ => {}
        }
    }
    let close = close.ok_or_else(|| "unterminated literal".to_string())?;
    let mut end = close + 1;
    let tail = &input[end..];

    if let Some(lang) = tail.strip_prefix('@') {
        let len = lang
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(lang.len());
        if len == 0 {
            return Err("empty language tag".to_string());
        }
        end += 1 + len;
    } else if let Some(typed) = tail.strip_prefix("^^") {
        let (_, after) = parse_iri(typed)?;
        end = input.len() - after.len();
    }

    Ok((input[..end].to_string(), &input[end..]))
}
