use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an outcome's content.
///
/// Identity fields:
/// - check name
/// - pass/fail
/// - message
/// - details (compact JSON)
///
/// The timestamp is deliberately excluded so two runs over the same context agree.
pub fn fingerprint_for_outcome(name: &str, passed: bool, message: &str, details: &Value) -> String {
    let details = details.to_string();
    let verdict = if passed { "pass" } else { "fail" };
    let canonical = [name, verdict, message, details.as_str()].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
