use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Which files a run considers.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pub extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
}

impl FileFilter {
    pub fn new(extensions: &[String], excluded_dirs: &[String]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            excluded_dirs: excluded_dirs.to_vec(),
        }
    }

    pub fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// True if any directory component of `relative` is an excluded name.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        relative.components().any(|c| match c {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|n| self.excluded_dirs.iter().any(|ex| ex == n)),
            _ => false,
        })
    }

    fn skip_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|n| self.excluded_dirs.iter().any(|ex| ex == n))
    }
}

/// Walk `root` and return candidate files, sorted by name within each directory.
pub fn discover_files(root: &Path, filter: &FileFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !filter.skip_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable path: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if filter.has_allowed_extension(path) && !filter.is_excluded(relative) {
            files.push(path.to_path_buf());
        }
    }

    files
}

/// Keep the explicitly named files that pass the extension allow-list.
///
/// Relative paths are resolved against `root`; duplicates are dropped.
pub fn filter_explicit(root: &Path, files: &[PathBuf], filter: &FileFilter) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    files
        .iter()
        .filter(|f| filter.has_allowed_extension(f))
        .map(|f| if f.is_absolute() { f.clone() } else { root.join(f) })
        .filter(|f| seen.insert(f.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> FileFilter {
        let config = crate::config::DoxgenConfig::default();
        FileFilter::new(&config.extensions, &config.excluded_dirs)
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "// header\n").unwrap();
    }

    #[test]
    fn test_discovers_headers_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "include/widget.hpp");
        touch(dir.path(), "include/legacy.h");
        touch(dir.path(), "include/inline.hxx");
        touch(dir.path(), "src/widget.cpp");
        touch(dir.path(), "README.md");

        let files = discover_files(dir.path(), &default_filter());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["include/inline.hxx", "include/legacy.h", "include/widget.hpp"]
        );
    }

    #[test]
    fn test_excluded_directories_never_discovered() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "build/generated.hpp");
        touch(dir.path(), "lib/vendor/json.hpp");
        touch(dir.path(), "third_party/fmt/core.h");
        touch(dir.path(), "node_modules/pkg/x.h");
        touch(dir.path(), "rebuild/kept.hpp");
        touch(dir.path(), "core/api.hpp");

        let files = discover_files(dir.path(), &default_filter());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["core/api.hpp", "rebuild/kept.hpp"]);
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_walked() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "build/a.hpp");

        let files = discover_files(&dir.path().join("build"), &default_filter());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_is_excluded_matches_components() {
        let filter = default_filter();
        assert!(filter.is_excluded(Path::new("project/build/x.hpp")));
        assert!(filter.is_excluded(Path::new(".git/hooks/x.h")));
        assert!(!filter.is_excluded(Path::new("project/builder/x.hpp")));
    }

    #[test]
    fn test_explicit_files_filtered_by_extension() {
        let root = Path::new("/repo");
        let files = vec![
            PathBuf::from("a.hpp"),
            PathBuf::from("b.cpp"),
            PathBuf::from("/abs/c.h"),
            PathBuf::from("a.hpp"),
            PathBuf::from("build/d.hxx"),
        ];
        let kept = filter_explicit(root, &files, &default_filter());
        assert_eq!(
            kept,
            vec![
                PathBuf::from("/repo/a.hpp"),
                PathBuf::from("/abs/c.h"),
                PathBuf::from("/repo/build/d.hxx"),
            ]
        );
    }
}
