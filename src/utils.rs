use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use validator::ValidationError;

pub mod error;

/// Characters allowed in each part of an address: anything but `@` and the ECMAScript
/// whitespace set (which includes U+FEFF but not U+0085, unlike Unicode `White_Space`).
const EMAIL_PART: &str =
  r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(r"^{part}@{part}\.{part}$", part = EMAIL_PART)).expect("email pattern compiles")
});

/// Accepts anything shaped like `local@domain.tld`: one `@`, no whitespace, and a dot in the domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
  if email.is_empty() {
    return Err(ValidationError::new("email_required"));
  }

  if !EMAIL_REGEX.is_match(email) {
    return Err(ValidationError::new("email_invalid"));
  }

  Ok(())
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-01-31T09:15:02.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
