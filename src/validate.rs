use crate::errors::LookupError;
use regex::Regex;

const MAX_DOMAIN_LEN: usize = 253;

/// Checks the domain is a plausible host name, returning it trimmed and in
/// lower case, ready to be used as the anchor.
///
/// ```
/// use nslookup::validate_domain;
///
/// assert_eq!(validate_domain(" Example.COM ").unwrap(), "example.com");
/// assert!(validate_domain("example.com; rm -rf /").is_err());
/// ```
pub fn validate_domain(domain: &str) -> Result<String, LookupError> {
    lazy_static! {
        // Dot separated labels of letters, digits and hyphens, ending in a
        // label that starts with a letter.
        static ref RE: Regex = Regex::new(
            r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z](?:[a-z0-9-]{0,61}[a-z0-9])?$"
        )
        .unwrap();
    }

    let normalised = domain.trim().to_ascii_lowercase();
    if normalised.len() > MAX_DOMAIN_LEN || !RE.is_match(&normalised) {
        return Err(LookupError::InvalidDomainFormat(domain.to_string()));
    }

    Ok(normalised)
}
