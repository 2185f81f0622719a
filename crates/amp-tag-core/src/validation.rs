//! Spec name canonicalization.
//!
//! Names are canonicalized before they reach the hash chain so the same
//! logical name always maps to the same child:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. ASCII letters are folded to lower case.
//! 3. `.` separates path segments: `"a.b"` derives `a`, then `b`.
//! 4. Every segment is 1..=[`MAX_SEGMENT_LEN`] bytes of `a-z 0-9 - _ / : + *`.

use crate::error::TagError;

/// Maximum length of a single name segment, in bytes.
pub const MAX_SEGMENT_LEN: usize = 64;

/// Path separator inside a spec name.
pub const SEGMENT_SEPARATOR: char = '.';

/// Check whether a character is allowed inside a canonical segment.
pub fn is_segment_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '/' | ':' | '+' | '*')
}

/// Validate one already-folded segment.
pub fn validate_segment(segment: &str) -> Result<(), TagError> {
    if segment.is_empty() {
        return Err(TagError::invalid_name(segment, "empty segment"));
    }
    if segment.len() > MAX_SEGMENT_LEN {
        return Err(TagError::invalid_name(
            segment,
            format!("segment exceeds {} bytes", MAX_SEGMENT_LEN),
        ));
    }
    if let Some(c) = segment.chars().find(|c| !is_segment_char(*c)) {
        return Err(TagError::invalid_name(
            segment,
            format!("character {:?} is not allowed", c),
        ));
    }
    Ok(())
}

/// Canonicalize a name into its path segments.
pub fn canonical_segments(name: &str) -> Result<Vec<String>, TagError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TagError::invalid_name(name, "name is empty"));
    }

    let folded = trimmed.to_ascii_lowercase();
    let mut segments = Vec::new();
    for segment in folded.split(SEGMENT_SEPARATOR) {
        validate_segment(segment).map_err(|e| match e {
            TagError::InvalidName { reason, .. } => TagError::invalid_name(name, reason),
            other => other,
        })?;
        segments.push(segment.to_string());
    }
    Ok(segments)
}

/// Canonicalize a name and rejoin its segments.
pub fn canonical_name(name: &str) -> Result<String, TagError> {
    Ok(canonical_segments(name)?.join("."))
}
