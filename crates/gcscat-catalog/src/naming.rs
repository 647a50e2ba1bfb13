//! File name helpers shared by listing and download.

use std::ffi::OsStr;
use std::path::Path;

/// Last `/`-separated segment of an object key.
pub(crate) fn basename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Splits a file name into its stem and its extension without the dot.
///
/// A leading dot does not start an extension: `.env` has stem `.env` and no
/// extension, `archive.tar.gz` has stem `archive.tar` and extension `gz`.
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    let path = Path::new(name);
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or(name);
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    (stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_of_nested_key() {
        assert_eq!(basename("a/b/c.csv"), "c.csv");
        assert_eq!(basename("c.csv"), "c.csv");
        assert_eq!(basename("a/b/"), "");
    }

    #[test]
    fn splits_last_extension() {
        assert_eq!(split_extension("data.csv"), ("data", "csv"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn dotfiles_have_no_extension() {
        assert_eq!(split_extension(".env"), (".env", ""));
        assert_eq!(split_extension(".config.json"), (".config", "json"));
    }
}
