//! Parse HTTP response header lines.

/// Returns the `Location` header value from collected header lines.
///
/// The last occurrence wins; an empty value counts as absent.
pub(crate) fn location_from_headers(lines: &[String]) -> Option<String> {
    let mut location = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("location") {
                let value = value.trim();
                location = (!value.is_empty()).then(|| value.to_string());
            }
        }
    }
    location
}
