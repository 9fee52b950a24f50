//! Field predicates used by the analyzer.
//!
//! Both functions are total: they accept absent values and never fail.

/// Returns `true` if `value` is absent or blank after trimming whitespace.
///
/// Absent and present-but-blank are deliberately indistinguishable to callers.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.trim().is_empty(),
    }
}

/// Simplified email shape check.
///
/// After trimming, the value must contain `@`, both sides of the first `@` must be non-empty,
/// and the domain side must contain a `.`. This is a heuristic, not an RFC 5322 validator.
pub fn is_valid_email(value: Option<&str>) -> bool {
    let Some(email) = value.map(str::trim) else {
        return false;
    };
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && domain.contains('.'),
        None => false,
    }
}
