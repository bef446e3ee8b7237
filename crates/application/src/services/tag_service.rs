use super::random::alphanumeric;
use sha2::{Digest, Sha256};
use std::fmt;

const SECRET_LEN: usize = 50;

/// Binds an assignment to `(domain, reporter ip, issuance time)` with a
/// keyed hash. Not HMAC — the concatenation-with-secret suffix is
/// adequate for this trust model (anti-forgery of short-lived
/// assignments, not reporter identity). A future revision should move to
/// HMAC-SHA256 for discipline.
///
/// The secret is generated once per process and never exposed: there is
/// no accessor, and `Debug` redacts it.
pub struct KeyedTagger {
    secret: String,
}

impl KeyedTagger {
    pub fn new() -> Self {
        Self {
            secret: alphanumeric(SECRET_LEN),
        }
    }

    /// `SHA256(join("|", parts ++ [secret]))`, lowercase hex.
    pub fn tag(&self, parts: &[&str]) -> String {
        let mut joined = parts.join("|");
        joined.push('|');
        joined.push_str(&self.secret);
        hex::encode(Sha256::digest(joined.as_bytes()))
    }
}

impl Default for KeyedTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyedTagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedTagger").field("secret", &"<redacted>").finish()
    }
}
