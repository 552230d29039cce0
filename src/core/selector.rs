use crate::domain::errors::BundleError;
use crate::domain::models::CandidateFile;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Directory names pruned from traversal wherever they appear as a full path
/// segment.
pub const EXCLUDED_DIR_NAMES: &[&str] = &["bin", "obj", ".git", "node_modules"];

/// Language tags with a well-known extension. Anything not listed here maps
/// by convention to "." + tag.
pub const LANGUAGE_TAG_MAP: &[(&str, &str)] = &[
    ("csharp", ".cs"),
    ("python", ".py"),
    ("javascript", ".js"),
    ("java", ".java"),
    ("cpp", ".cpp"),
    ("html", ".html"),
    ("txt", ".txt"),
    ("word", ".docs"),
];

const WILDCARD_TAG: &str = "all";

/// Walks a directory tree and picks the files to bundle. The exclusion set
/// and tag map are injected at construction so tests can supply their own
/// rules.
pub struct FileSelector {
    excluded_dirs: HashSet<String>,
    tag_map: HashMap<String, String>,
}

impl Default for FileSelector {
    fn default() -> Self {
        Self::with_rules(
            EXCLUDED_DIR_NAMES.iter().map(|s| s.to_string()),
            LANGUAGE_TAG_MAP
                .iter()
                .map(|(tag, ext)| (tag.to_string(), ext.to_string())),
        )
    }
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(
        excluded_dirs: impl IntoIterator<Item = String>,
        tag_map: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            excluded_dirs: excluded_dirs.into_iter().collect(),
            tag_map: tag_map.into_iter().collect(),
        }
    }

    /// Resolves a language tag to the extension it filters on.
    pub fn extension_for_tag(&self, tag: &str) -> String {
        let tag = tag.to_lowercase();
        match self.tag_map.get(&tag) {
            Some(ext) => ext.clone(),
            None => format!(".{}", tag),
        }
    }

    /// Returns every non-excluded file under `root` matching the requested
    /// tags, in traversal order. Ordering for the bundle is applied by the
    /// caller.
    pub fn select(
        &self,
        root: &Path,
        language_tags: &[String],
    ) -> Result<Vec<CandidateFile>, BundleError> {
        if !root.is_dir() {
            return Err(BundleError::Traversal(root.to_path_buf()));
        }

        info!("Scanning for files in {}", root.display());
        debug!("Language tags: {:?}", language_tags);

        let keep_all = language_tags
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(WILDCARD_TAG));

        let wanted_extensions: HashSet<String> = if keep_all {
            HashSet::new()
        } else {
            language_tags
                .iter()
                .map(|tag| self.extension_for_tag(tag))
                .collect()
        };

        let mut result = Vec::new();

        for entry in walkdir::WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                // Prune excluded directories by exact segment name, never by
                // substring of a filename.
                !(e.file_type().is_dir()
                    && e.file_name()
                        .to_str()
                        .is_some_and(|name| self.excluded_dirs.contains(name)))
            })
            .filter_map(Result::ok)
        {
            if entry.file_type().is_dir() || entry.file_type().is_symlink() {
                continue;
            }

            let candidate = CandidateFile::new(entry.path().to_path_buf());
            if keep_all || wanted_extensions.contains(&candidate.extension) {
                debug!("Found matching file: {}", candidate.path.display());
                result.push(candidate);
            }
        }

        info!("Found {} matching files", result.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "content").unwrap();
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn selected_names(files: &[CandidateFile], root: &Path) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|f| {
                f.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_extension_filter() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.cs");
        touch(temp.path(), "src/b.CS");
        touch(temp.path(), "notes.txt");
        touch(temp.path(), "script.py");

        let selector = FileSelector::new();
        let files = selector
            .select(temp.path(), &tags(&["csharp", "txt"]))
            .unwrap();

        assert_eq!(
            selected_names(&files, temp.path()),
            vec!["notes.txt", "src/a.cs", "src/b.CS"]
        );
    }

    #[test]
    fn test_wildcard_keeps_everything() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.cs");
        touch(temp.path(), "README");
        touch(temp.path(), "deep/nested/b.xyz");

        let selector = FileSelector::new();
        let files = selector.select(temp.path(), &tags(&["ALL"])).unwrap();

        assert_eq!(
            selected_names(&files, temp.path()),
            vec!["README", "a.cs", "deep/nested/b.xyz"]
        );
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/keep.cs");
        touch(temp.path(), "bin/drop.cs");
        touch(temp.path(), "obj/drop.cs");
        touch(temp.path(), "nested/node_modules/pkg/drop.js");
        touch(temp.path(), ".git/config");

        let selector = FileSelector::new();
        let files = selector.select(temp.path(), &tags(&["all"])).unwrap();

        assert_eq!(selected_names(&files, temp.path()), vec!["src/keep.cs"]);
    }

    #[test]
    fn test_exclusion_is_segment_exact() {
        let temp = TempDir::new().unwrap();
        // "binary" and "objects" share a prefix with excluded names but are
        // distinct segments, and a file named "bin.cs" is not a directory.
        touch(temp.path(), "binary/a.cs");
        touch(temp.path(), "objects/b.cs");
        touch(temp.path(), "bin.cs");

        let selector = FileSelector::new();
        let files = selector.select(temp.path(), &tags(&["csharp"])).unwrap();

        assert_eq!(
            selected_names(&files, temp.path()),
            vec!["bin.cs", "binary/a.cs", "objects/b.cs"]
        );
    }

    #[test]
    fn test_tag_collision_resolves_to_mapped_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.py");
        touch(temp.path(), "b.python");

        let selector = FileSelector::new();
        let files = selector.select(temp.path(), &tags(&["python"])).unwrap();

        assert_eq!(selected_names(&files, temp.path()), vec!["a.py"]);
    }

    #[test]
    fn test_unrecognized_tag_maps_by_convention() {
        let selector = FileSelector::new();
        assert_eq!(selector.extension_for_tag("rust"), ".rust");
        assert_eq!(selector.extension_for_tag("CSharp"), ".cs");
        assert_eq!(selector.extension_for_tag("word"), ".docs");
    }

    #[test]
    fn test_empty_tags_yield_empty_result() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.cs");

        let selector = FileSelector::new();
        let files = selector.select(temp.path(), &[]).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root_is_a_traversal_error() {
        let selector = FileSelector::new();
        let result = selector.select(Path::new("/no/such/directory"), &tags(&["all"]));

        assert!(matches!(result, Err(BundleError::Traversal(_))));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x.cs");
        touch(temp.path(), "y/z.cs");
        touch(temp.path(), "y/w.txt");

        let selector = FileSelector::new();
        let first = selector
            .select(temp.path(), &tags(&["csharp", "txt"]))
            .unwrap();
        let second = selector
            .select(temp.path(), &tags(&["csharp", "txt"]))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_rules_are_honored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "skipme/a.foo");
        touch(temp.path(), "keep/b.foo");

        let selector = FileSelector::with_rules(
            vec!["skipme".to_string()],
            vec![("foolang".to_string(), ".foo".to_string())],
        );
        let files = selector.select(temp.path(), &tags(&["foolang"])).unwrap();

        assert_eq!(selected_names(&files, temp.path()), vec!["keep/b.foo"]);
    }
}
