//! Separator handling and string decomposition of paths.
//!
//! These functions work on the textual form of a path and never touch the
//! filesystem. Only the native separator delimits segments; run
//! [`normalize_path`] first on input that may use the alternate one.

use crate::platform::Platform;

/// Separator the current OS uses between path segments.
pub const NATIVE_SEPARATOR: char = Platform::current().native_separator();

/// Separator accepted in input and rewritten to [`NATIVE_SEPARATOR`].
pub const ALT_SEPARATOR: char = Platform::current().alt_separator();

/// Returned by [`parent_directory`] when no parent can be determined.
pub const CURRENT_DIR: &str = ".";

/// Rewrite every alternate separator in `path` to the native one, in place.
///
/// # Examples
///
/// ```
/// use pathops::path::{normalize_path, ALT_SEPARATOR, NATIVE_SEPARATOR};
///
/// let mut path = format!("run{ALT_SEPARATOR}in.idf");
/// normalize_path(&mut path);
/// assert_eq!(path, format!("run{NATIVE_SEPARATOR}in.idf"));
/// ```
pub fn normalize_path(path: &mut String) {
    normalize_with(path, ALT_SEPARATOR, NATIVE_SEPARATOR);
}

/// Owned form of [`normalize_path`].
#[must_use]
pub fn native_path(path: &str) -> String {
    let mut owned = path.to_string();
    normalize_path(&mut owned);
    owned
}

/// Everything after the last native separator.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use pathops::path::file_name;
///
/// assert_eq!(file_name("/a/b/c.txt"), "c.txt");
/// assert_eq!(file_name("c.txt"), "c.txt");
/// assert_eq!(file_name("/a/b/"), "");
/// # }
/// ```
#[must_use]
pub fn file_name(path: &str) -> String {
    file_name_with(path, NATIVE_SEPARATOR)
}

/// Everything up to and including the last separator, ignoring one trailing
/// separator. Returns [`CURRENT_DIR`] when there is no separator left.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use pathops::path::parent_directory;
///
/// assert_eq!(parent_directory("/a/b/c.txt"), "/a/b/");
/// assert_eq!(parent_directory("/a/b/"), "/a/");
/// assert_eq!(parent_directory("c.txt"), ".");
/// # }
/// ```
#[must_use]
pub fn parent_directory(path: &str) -> String {
    parent_directory_with(path, NATIVE_SEPARATOR)
}

/// Everything after the last `.`, or an empty string if there is none.
///
/// ```
/// use pathops::path::file_extension;
///
/// assert_eq!(file_extension("report.v2.idf"), "idf");
/// assert_eq!(file_extension("Makefile"), "");
/// ```
#[must_use]
pub fn file_extension(path: &str) -> String {
    path.rfind('.')
        .map_or_else(String::new, |dot| path[dot + 1..].to_string())
}

/// Everything before the last `.`, or the whole input if there is none.
///
/// ```
/// use pathops::path::strip_extension;
///
/// assert_eq!(strip_extension("report.v2.idf"), "report.v2");
/// assert_eq!(strip_extension("Makefile"), "Makefile");
/// ```
#[must_use]
pub fn strip_extension(path: &str) -> String {
    path.rfind('.').map_or(path, |dot| &path[..dot]).to_string()
}

pub(crate) fn normalize_with(path: &mut String, alt: char, native: char) {
    if path.contains(alt) {
        *path = path.replace(alt, native.encode_utf8(&mut [0; 4]));
    }
}

pub(crate) fn file_name_with(path: &str, separator: char) -> String {
    match path.rfind(separator) {
        Some(index) => path[index + separator.len_utf8()..].to_string(),
        None => path.to_string(),
    }
}

pub(crate) fn parent_directory_with(path: &str, separator: char) -> String {
    let trimmed = path.strip_suffix(separator).unwrap_or(path);
    match trimmed.rfind(separator) {
        Some(index) => trimmed[..index + separator.len_utf8()].to_string(),
        None => CURRENT_DIR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_style() {
        let mut path = String::from(r"out\run\eplusout.csv");
        normalize_with(&mut path, '\\', '/');
        assert_eq!(path, "out/run/eplusout.csv");
    }

    #[test]
    fn test_normalize_windows_style() {
        let mut path = String::from("C:/sim/in.idf");
        normalize_with(&mut path, '/', '\\');
        assert_eq!(path, r"C:\sim\in.idf");
    }

    #[test]
    fn test_normalize_without_alt_separator_is_noop() {
        let path = format!("a{NATIVE_SEPARATOR}b");
        assert_eq!(native_path(&path), path);
    }

    #[test]
    fn test_file_name_examples() {
        assert_eq!(file_name_with("/a/b/c.txt", '/'), "c.txt");
        assert_eq!(file_name_with("c.txt", '/'), "c.txt");
        assert_eq!(file_name_with("/a/b/", '/'), "");
        assert_eq!(file_name_with(r"C:\sim\in.idf", '\\'), "in.idf");
    }

    #[test]
    fn test_parent_directory_examples() {
        assert_eq!(parent_directory_with("/a/b/c.txt", '/'), "/a/b/");
        assert_eq!(parent_directory_with("/a/b/", '/'), "/a/");
        assert_eq!(parent_directory_with("/a", '/'), "/");
        assert_eq!(parent_directory_with(r"C:\sim\in.idf", '\\'), r"C:\sim\");
    }

    #[test]
    fn test_parent_directory_without_separator_is_current_dir() {
        assert_eq!(parent_directory_with("c.txt", '/'), ".");
        assert_eq!(parent_directory_with("out/", '/'), ".");
        assert_eq!(parent_directory_with("/", '/'), ".");
        assert_eq!(parent_directory_with("", '/'), ".");
    }

    #[test]
    fn test_extension_examples() {
        assert_eq!(file_extension("report.v2.idf"), "idf");
        assert_eq!(strip_extension("report.v2.idf"), "report.v2");
        assert_eq!(file_extension("trailing."), "");
        assert_eq!(strip_extension(".hidden"), "");
    }

    #[test]
    fn test_extension_without_dot() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(strip_extension("README"), "README");
    }

    #[test]
    fn test_extension_scans_whole_path() {
        // The last dot wins even when it sits in a directory name.
        assert_eq!(file_extension("run.d/README"), "d/README");
        assert_eq!(strip_extension("run.d/README"), "run");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 1..=6)
        }

        proptest! {
            /// Alternate separators never survive normalization.
            #[test]
            fn normalize_removes_alt_separators(parts in segments_strategy()) {
                let mut path = parts.join(&ALT_SEPARATOR.to_string());
                normalize_path(&mut path);
                prop_assert!(!path.contains(ALT_SEPARATOR));
            }

            /// Parent plus file name reconstructs the input.
            #[test]
            fn parent_and_file_name_reconstruct(parts in segments_strategy(), rooted in any::<bool>()) {
                let sep = NATIVE_SEPARATOR.to_string();
                let mut path = parts.join(&sep);
                if rooted || parts.len() == 1 {
                    path.insert_str(0, &sep);
                }
                let rebuilt = parent_directory(&path) + &file_name(&path);
                prop_assert_eq!(rebuilt, path);
            }

            /// Stem and extension partition a dotted name.
            #[test]
            fn stem_and_extension_partition(stem in "[a-z0-9.]{0,12}", ext in "[a-z0-9]{0,5}") {
                let name = format!("{stem}.{ext}");
                prop_assert_eq!(
                    format!("{}.{}", strip_extension(&name), file_extension(&name)),
                    name.clone()
                );
                prop_assert_eq!(file_extension(&name), ext);
            }
        }
    }
}
