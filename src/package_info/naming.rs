//! Package name derivation from directory paths.

use std::path::{Component, Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Number of trailing path segments used when no source-root marker matches.
const FALLBACK_SEGMENTS: usize = 3;

/// Derive the dotted package name of `package_dir`.
///
/// When `src_root` (written with `/` separators) occurs in the path, the name
/// is everything after its first occurrence. Otherwise the last three path
/// segments are joined. The result is a best guess and is not checked against
/// the `package` statements inside the files.
pub fn package_name(package_dir: &Path, src_root: &str) -> String {
    let path = package_dir.to_string_lossy();
    let marker = format!(
        "{}{}",
        src_root.trim_end_matches('/').replace('/', MAIN_SEPARATOR_STR),
        MAIN_SEPARATOR
    );

    if let Some(pos) = path.find(&marker) {
        let relative = path[pos + marker.len()..].trim_end_matches(MAIN_SEPARATOR);
        if !relative.is_empty() {
            return relative.replace(MAIN_SEPARATOR, ".");
        }
    }

    fallback_name(package_dir)
}

fn fallback_name(package_dir: &Path) -> String {
    let segments: Vec<String> = package_dir
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let start = segments.len().saturating_sub(FALLBACK_SEGMENTS);
    segments[start..].join(".")
}

/// Final segment of a dotted package name.
pub fn last_segment(package_name: &str) -> &str {
    package_name.rsplit('.').next().unwrap_or(package_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn name_after_src_root_marker() {
        let dir = PathBuf::from("/work/app/src/main/java/com/example/service");
        assert_eq!(package_name(&dir, "src/main/java"), "com.example.service");
    }

    #[test]
    fn custom_marker_is_respected() {
        let dir = PathBuf::from("/work/app/src/test/java/com/example/mapper");
        assert_eq!(package_name(&dir, "src/test/java"), "com.example.mapper");
        assert_eq!(package_name(&dir, "src/test/java/"), "com.example.mapper");
    }

    #[test]
    fn fallback_joins_last_three_segments() {
        let dir = PathBuf::from("/work/app/lib/com/example/util");
        assert_eq!(package_name(&dir, "src/main/java"), "com.example.util");
    }

    #[test]
    fn fallback_uses_fewer_segments_for_short_paths() {
        assert_eq!(package_name(Path::new("/alpha/beta"), "src/main/java"), "alpha.beta");
        assert_eq!(package_name(Path::new("solo"), "src/main/java"), "solo");
    }

    #[test]
    fn marker_without_package_segments_falls_back() {
        let dir = PathBuf::from("/work/app/src/main/java");
        assert_eq!(package_name(&dir, "src/main/java"), "src.main.java");
    }

    #[test]
    fn marker_must_match_whole_segments_at_its_end() {
        let dir = PathBuf::from("/work/src/main/javascript/widgets/core/x");
        assert_eq!(package_name(&dir, "src/main/java"), "widgets.core.x");
    }

    #[test]
    fn last_segment_of_dotted_name() {
        assert_eq!(last_segment("com.example.service"), "service");
        assert_eq!(last_segment("single"), "single");
    }
}
