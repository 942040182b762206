//! Best-effort recovery of the single JSON object in a model answer.
//!
//! Long analyses sometimes stop mid-stream. The repair only knows the
//! shallow patterns seen in practice (an open string at the very end, open
//! arrays, open objects) and closes them by counting raw bracket characters.
//! Brackets inside string values are counted too, so a deeply nested cut can
//! still come out wrong. Callers log every repaired answer for that reason.

use serde::de::IgnoredAny;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepairError {
    #[error("response contains no JSON object")]
    NoJsonObject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedJson {
    pub json: String,
    /// Closing characters had to be appended.
    pub repaired: bool,
}

/// Slices the outermost object out of `raw`, without repairing it.
///
/// Runs from the first `{` to the last `}`. Only when that slice is not
/// valid JSON and is missing closing braces was the answer cut off after
/// the last `}`; the slice then runs to the end of the text instead.
pub fn slice_object(raw: &str) -> Result<&str, RepairError> {
    let start = raw.find('{').ok_or(RepairError::NoJsonObject)?;
    let rest = &raw[start..];

    let bounded = rest.rfind('}').map(|end| &rest[..=end]);
    match bounded {
        Some(slice) if is_valid_json(slice) => Ok(slice),
        Some(slice) if count(slice, '{') <= count(slice, '}') => Ok(slice),
        _ => Ok(rest.trim_end()),
    }
}

fn is_valid_json(slice: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(slice).is_ok()
}

/// Extracts the JSON object from `raw` and closes it if the stream was truncated.
pub fn extract_and_repair(raw: &str) -> Result<ExtractedJson, RepairError> {
    let slice = slice_object(raw)?;

    if slice.ends_with('}') {
        return Ok(ExtractedJson {
            json: slice.to_string(),
            repaired: false,
        });
    }

    Ok(ExtractedJson {
        json: close_truncated(slice),
        repaired: true,
    })
}

fn close_truncated(slice: &str) -> String {
    let mut out = slice.to_string();

    // an unterminated string literal: the last quote opened a value or key
    let last_quote = slice.rfind('"');
    if last_quote > slice.rfind(':') && last_quote > slice.rfind(',') {
        out.push('"');
    }

    let open_brackets = count(slice, '[').saturating_sub(count(slice, ']'));
    let open_braces = count(slice, '{').saturating_sub(count(slice, '}'));

    out.extend(std::iter::repeat(']').take(open_brackets));
    out.extend(std::iter::repeat('}').take(open_braces));
    out
}

fn count(s: &str, c: char) -> usize {
    s.chars().filter(|&x| x == c).count()
}
