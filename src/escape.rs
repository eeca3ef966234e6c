//! CSV field quoting

use std::borrow::Cow;

/// Check whether a raw field requires quoting.
///
/// A field is quoted if it contains a comma or a double quote, contains the
/// two-character literal sequence `\n` (backslash then `n`, not an actual
/// newline byte — kept for output compatibility with the historical rule),
/// or starts or ends with a space.
fn needs_quoting(raw: &str) -> bool {
    raw.contains(',')
        || raw.contains('"')
        || raw.contains("\\n")
        || raw.starts_with(' ')
        || raw.ends_with(' ')
}

/// Produce the CSV-safe representation of a raw encoded field.
///
/// Fields that need quoting are wrapped in double quotes with internal
/// quotes doubled; all other fields are returned verbatim. This is a quoting
/// rule only, not a defense against spreadsheet formula injection.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if needs_quoting(raw) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}
