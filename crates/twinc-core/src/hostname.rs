//! RFC 1123 host-name sanitization for manifest metadata names.

use once_cell::sync::Lazy;
use regex::Regex;

static HOST_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("host name pattern compiles")
});

/// Characters replaced with `-` during sanitization. DTMI identifiers use
/// `:` and `;` as segment separators, neither of which is host-name safe.
const REPLACED: [char; 3] = [':', ';', '_'];

/// Lower-case the identifier and replace separator characters with `-`.
///
/// Total function: the result is returned even when it still fails the
/// RFC 1123 grammar; callers decide whether that is a warning or an error
/// via [`is_rfc1123_host_name`].
pub fn sanitize_host_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if REPLACED.contains(&c) { '-' } else { c })
        .collect()
}

/// Anchored check against the RFC 1123 host-name grammar.
pub fn is_rfc1123_host_name(name: &str) -> bool {
    HOST_NAME.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_separator_characters() {
        assert_eq!(sanitize_host_name("Room:12_A"), "room-12-a");
    }

    #[test]
    fn sanitizes_dtmi_identifiers() {
        assert_eq!(
            sanitize_host_name("dtmi:example:Thermostat;1"),
            "dtmi-example-thermostat-1"
        );
    }

    #[test]
    fn already_safe_names_pass_through() {
        assert_eq!(sanitize_host_name("temperature-sensor"), "temperature-sensor");
    }

    #[test]
    fn grammar_accepts_dotted_names() {
        assert!(is_rfc1123_host_name("room-12-a"));
        assert!(is_rfc1123_host_name("a.b-c.d0"));
        assert!(is_rfc1123_host_name("0"));
    }

    #[test]
    fn grammar_rejects_bad_names() {
        assert!(!is_rfc1123_host_name(""));
        assert!(!is_rfc1123_host_name("-leading"));
        assert!(!is_rfc1123_host_name("trailing-"));
        assert!(!is_rfc1123_host_name("Upper"));
        assert!(!is_rfc1123_host_name("has space"));
        assert!(!is_rfc1123_host_name("a..b"));
    }

    #[test]
    fn sanitized_output_can_still_be_invalid() {
        // Sanitization only handles case and separators; other characters
        // pass through and must be caught by the grammar check.
        let name = sanitize_host_name("room#1");
        assert_eq!(name, "room#1");
        assert!(!is_rfc1123_host_name(&name));
    }
}
