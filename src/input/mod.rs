use std::io::Read;
use std::path::Path;

pub mod reader;

use reader::open_maybe_gz;

use crate::thresholds::{ThreshError, validate_scores};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: line {line}: {token:?} is not a number")]
    Parse { line: usize, token: String },
    #[error("invalid shape: {0}")]
    Shape(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scores: {0}")]
    Score(#[from] ThreshError),
}

/// Reads decision scores from a plain or gzip-compressed file.
pub fn load_scores(path: &Path) -> Result<Vec<f64>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let scores = parse_scores(&text)?;
    tracing::info!(path = %path.display(), n = scores.len(), "loaded decision scores");
    Ok(scores)
}

/// Parses a one-dimensional score vector.
///
/// Accepts a JSON array of numbers, or plain text with numbers separated by
/// whitespace, commas or newlines. `#` starts a comment in plain text.
pub fn parse_scores(text: &str) -> Result<Vec<f64>, InputError> {
    let trimmed = text.trim_start();
    let scores = if trimmed.starts_with('[') {
        parse_json_array(trimmed)?
    } else if trimmed.starts_with('{') {
        return Err(InputError::Shape(
            "expected an array of scores, found a JSON object".to_string(),
        ));
    } else {
        parse_plain(text)?
    };
    validate_scores(&scores)?;
    Ok(scores)
}

fn parse_json_array(text: &str) -> Result<Vec<f64>, InputError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let Some(items) = value.as_array() else {
        return Err(InputError::Shape("expected a JSON array".to_string()));
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(v) => out.push(v),
                None => {
                    return Err(InputError::Parse {
                        line: 1,
                        token: n.to_string(),
                    });
                }
            },
            serde_json::Value::Array(_) => {
                return Err(InputError::Shape(format!(
                    "nested array at index {i}, scores must be one-dimensional"
                )));
            }
            other => {
                return Err(InputError::Parse {
                    line: 1,
                    token: other.to_string(),
                });
            }
        }
    }
    Ok(out)
}

fn parse_plain(text: &str) -> Result<Vec<f64>, InputError> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| InputError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            out.push(value);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
