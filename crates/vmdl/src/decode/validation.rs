//! Strict-mode validation

use crate::decode::scanner::{LineKind, ParsedLine};

#[derive(Debug)]
pub struct ValidationError {
    pub line: usize,
    pub message: String,
}

impl From<ValidationError> for crate::Error {
    fn from(e: ValidationError) -> Self {
        crate::Error::Syntax {
            line: e.line,
            message: e.message,
        }
    }
}

struct Open {
    level: usize,
    child_indent: Option<usize>,
}

/// Reject unrecognized lines, and children of one section (or the top level)
/// that do not share the indentation of their first sibling.
pub fn validate_lines(lines: &[ParsedLine<'_>]) -> Result<(), ValidationError> {
    let mut stack = vec![Open {
        level: 0,
        child_indent: None,
    }];

    for pl in lines {
        if let LineKind::Unrecognized(body) = pl.kind {
            return Err(ValidationError {
                line: pl.number,
                message: format!("expected `key:` or `key = value`, got {:?}", body),
            });
        }
        if !pl.kind.is_content() {
            continue;
        }

        while stack.len() > 1 && stack.last().is_some_and(|top| top.level >= pl.indent) {
            stack.pop();
        }
        if let Some(top) = stack.last_mut() {
            match top.child_indent {
                None => top.child_indent = Some(pl.indent),
                Some(expected) if expected != pl.indent => {
                    return Err(ValidationError {
                        line: pl.number,
                        message: format!(
                            "inconsistent indentation: expected {}, got {}",
                            expected, pl.indent
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        if matches!(pl.kind, LineKind::Section { .. }) {
            stack.push(Open {
                level: pl.indent,
                child_indent: None,
            });
        }
    }
    Ok(())
}
