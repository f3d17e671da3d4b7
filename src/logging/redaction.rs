//! Masking of credentials before they reach log output

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// The replacement string used for redacted values
pub const REDACTED: &str = "[REDACTED]";

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(Bearer\s+)\S+",
        r#"("access_token"\s*:\s*")[^"]*"#,
        r"(://[^:/@\s]+:)[^@\s]+(@)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid redaction pattern"))
    .collect()
});

/// Replace bearer tokens, `access_token` JSON values and URL passwords with
/// [`REDACTED`].
pub fn redact(input: &str) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(input);

    for pattern in PATTERNS.iter() {
        if pattern.is_match(&result) {
            let replaced = pattern
                .replace_all(&result, |caps: &regex::Captures| {
                    let suffix = caps.get(2).map_or("", |m| m.as_str());
                    format!("{}{REDACTED}{suffix}", &caps[1])
                })
                .into_owned();
            result = Cow::Owned(replaced);
        }
    }

    result
}
