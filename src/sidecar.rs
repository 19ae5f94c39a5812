//! Rendering and freshness checking of `.DotSettings` sidecar documents.

use std::path::{Path, PathBuf};

/// Suffix appended to the full project file name.
pub const SIDECAR_SUFFIX: &str = ".DotSettings";

/// The `shemas` spelling below is what ReSharper itself writes.
const HEADER: &str = r#"<wpf:ResourceDictionary xml:space="preserve" xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml" xmlns:s="clr-namespace:System;assembly=mscorlib" xmlns:ss="urn:shemas-jetbrains-com:settings-storage-xaml" xmlns:wpf="http://schemas.microsoft.com/winfx/2006/xaml/presentation">"#;

const FOOTER: &str = "</wpf:ResourceDictionary>";

/// Path of the sidecar belonging to a project file: `<project>.DotSettings`.
pub fn sidecar_path(project_file: &Path) -> PathBuf {
    let mut name = project_file.as_os_str().to_os_string();
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

/// Render the complete sidecar document for the given encoded identifiers,
/// in input order. Every line is LF-terminated.
pub fn render(identifiers: &[String]) -> String {
    let mut document = String::from(HEADER);
    document.push('\n');
    for identifier in identifiers {
        document.push_str("    <s:Boolean x:Key=\"/Default/CodeInspection/NamespaceProvider/NamespaceFoldersToSkip/=");
        document.push_str(identifier);
        document.push_str("/@EntryIndexedValue\">False</s:Boolean>\n");
    }
    document.push_str(FOOTER);
    document.push('\n');
    document
}

/// Freshness check: every identifier must appear as a literal substring of
/// the existing content. Deliberately not an XML parse; a hand-edited file
/// that still contains all identifiers counts as synchronized.
pub fn contains_all(content: &str, identifiers: &[String]) -> bool {
    identifiers.iter().all(|identifier| content.contains(identifier.as_str()))
}
