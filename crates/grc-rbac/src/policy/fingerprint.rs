//! Cache fingerprint over every input that shapes the effective policy map.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::mode::RbacMode;

/// Inputs hashed into the fingerprint.
#[derive(Serialize)]
struct FingerprintInputs<'a> {
    overrides: &'a BTreeMap<String, Value>,
    mode: &'a str,
    persistence: bool,
    catalog: &'a [String],
}

/// Hex SHA-256 of the raw overrides, mode, persistence flag, and catalog.
pub fn fingerprint(
    overrides: &BTreeMap<String, Value>,
    mode: RbacMode,
    persistence: bool,
    catalog: &[String],
) -> String {
    let inputs = FingerprintInputs {
        overrides,
        mode: mode.as_str(),
        persistence,
        catalog,
    };
    let bytes = serde_json::to_vec(&inputs).unwrap_or_default();
    hex::encode(Sha256::digest(&bytes))
}
