//! Identifier encoding for ReSharper settings keys.
//!
//! A directory's relative path is embedded in an XML attribute key, so the
//! separator and period characters are escaped with the same tokens ReSharper
//! uses in its own settings layer files.

use std::path::Path;

/// Escape token for the canonical `\` separator.
const SEPARATOR_TOKEN: &str = "_005C";

/// Escape token for a literal `.` in a path component.
const PERIOD_TOKEN: &str = "_002E";

/// Encode a relative directory path as a settings-key identifier.
///
/// Components are lower-cased and joined with `\` (normalizing `/` on Unix),
/// then `\` is replaced with `_005C` and `.` with `_002E`. Separator
/// replacement runs first; neither token contains a raw `\` or `.`, so the
/// second replacement cannot touch text produced by the first.
pub fn encode_relative_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().to_lowercase())
        .collect::<Vec<_>>()
        .join("\\");
    joined.replace('\\', SEPARATOR_TOKEN).replace('.', PERIOD_TOKEN)
}

/// Reverse [`encode_relative_path`], yielding the lower-cased relative path
/// with `\` separators.
pub fn decode_identifier(identifier: &str) -> String {
    identifier.replace(PERIOD_TOKEN, ".").replace(SEPARATOR_TOKEN, "\\")
}
