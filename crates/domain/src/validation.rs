use crate::errors::DomainError;

/// Normalizes to lowercase and accepts iff the *entire* string matches
/// `[a-z0-9.-]+`. Anchored, unlike the source's unanchored regex (see
/// REDESIGN FLAGS) — `"good.com;rm -rf"` is rejected here, not truncated
/// to a silently-accepted prefix.
pub fn validate_domain(raw: &str) -> Result<String, DomainError> {
    let lowered = raw.to_lowercase();
    if !lowered.is_empty()
        && lowered
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        Ok(lowered)
    } else {
        Err(DomainError::InvalidDomainName(raw.to_string()))
    }
}
