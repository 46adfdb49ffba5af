//! Classification of string leaves as binary-like payloads.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

/// Minimum compacted length before a string is considered as base64.
const BASE64_MIN_LEN: usize = 64;

/// Above this compacted length a base64-looking string is treated as binary
/// without decoding it.
const BASE64_DECODE_LIMIT: usize = 8192;

/// Returns `true` if the string should never be persisted as plain text.
///
/// Rules are checked in order: data URI prefix, PEM header, raw control
/// bytes, then base64 that decodes to binary.
pub fn is_binary_like(value: &str) -> bool {
    has_data_uri_prefix(value)
        || has_pem_header(value)
        || has_control_bytes(value.as_bytes())
        || is_base64_binary(value)
}

/// Returns `true` if raw bytes are not UTF-8 text or contain control bytes.
pub fn is_binary_bytes(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_err() || has_control_bytes(bytes)
}

/// Control bytes outside tab, newline, and carriage return.
fn has_control_bytes(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F))
}

/// `data:<mime>;base64,` at the start of the string.
fn has_data_uri_prefix(value: &str) -> bool {
    let value = value.trim_start();
    let Some(scheme) = value.get(..5) else {
        return false;
    };
    if !scheme.eq_ignore_ascii_case("data:") {
        return false;
    }
    let rest = &value[5..];
    let Some(comma) = rest.find(',') else {
        return false;
    };
    let header = &rest[..comma];
    let Some(semi) = header.find(';') else {
        return false;
    };
    let mime = &header[..semi];
    if mime.is_empty() || mime.chars().any(char::is_whitespace) {
        return false;
    }
    header.to_ascii_lowercase().ends_with(";base64")
}

/// `-----BEGIN <LABEL>-----` anywhere in the string.
fn has_pem_header(value: &str) -> bool {
    const OPEN: &str = "-----BEGIN ";
    let mut haystack = value;
    while let Some(start) = haystack.find(OPEN) {
        let after = &haystack[start + OPEN.len()..];
        let label_len = after
            .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' '))
            .unwrap_or(after.len());
        if label_len > 0 && after[label_len..].starts_with("-----") {
            return true;
        }
        haystack = after;
    }
    false
}

fn is_base64_binary(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() < BASE64_MIN_LEN {
        return false;
    }
    if !compact
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
    {
        return false;
    }
    if compact.len() > BASE64_DECODE_LIMIT {
        return true;
    }
    let decoded = STANDARD
        .decode(&compact)
        .or_else(|_| STANDARD_NO_PAD.decode(compact.trim_end_matches('=')));
    match decoded {
        Ok(bytes) => is_binary_bytes(&bytes),
        Err(_) => false,
    }
}
