//! Line-level helpers shared by both parsers.

use memchr::{memchr, memchr_iter};

use crate::error::AttributeError;

/// Split `key = value` on its single `=`.
///
/// The key is trimmed; the value is returned raw so the caller decides how
/// to interpret it.
pub(crate) fn split_attribute(line: &str) -> Result<(&str, &str), AttributeError> {
    let bytes = line.as_bytes();
    let eq = match memchr(b'=', bytes) {
        Some(pos) => pos,
        None => return Err(AttributeError::SeparatorCount(0)),
    };
    let extra = memchr_iter(b'=', &bytes[eq + 1..]).count();
    if extra > 0 {
        return Err(AttributeError::SeparatorCount(extra + 1));
    }

    let key = line[..eq].trim();
    if key.is_empty() {
        return Err(AttributeError::EmptyKey);
    }
    Ok((key, &line[eq + 1..]))
}
