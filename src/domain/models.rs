use crate::domain::errors::BundleError;
use std::path::{Path, PathBuf};

/// How the selected files are ordered in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    ByName,
    ByExtension,
}

impl SortMode {
    /// "type" selects extension ordering; every other value falls back to
    /// name ordering rather than erroring.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "type" => SortMode::ByExtension,
            _ => SortMode::ByName,
        }
    }
}

/// A file picked up during traversal. The extension is stored lowercase with
/// its leading dot, or empty when the file has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub extension: String,
}

impl CandidateFile {
    pub fn new(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        Self { path, extension }
    }
}

/// Fully-resolved options for one bundle run. Constructed once from CLI flags
/// or prompt answers and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub output_path: PathBuf,
    pub language_tags: Vec<String>,
    pub include_source_note: bool,
    pub sort_mode: SortMode,
    pub remove_empty_lines: bool,
    pub author: String,
}

impl BundleConfig {
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(BundleError::Config("output path must not be empty".to_string()));
        }
        if self.language_tags.iter().all(|t| t.trim().is_empty()) {
            return Err(BundleError::Config(
                "at least one language tag is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Splits a comma-separated language string into trimmed, non-empty tags.
pub fn parse_language_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Relative path of `path` under `root`, or the raw path when it lives
/// outside the traversal root.
pub fn path_relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("type"), SortMode::ByExtension);
        assert_eq!(SortMode::parse("TYPE"), SortMode::ByExtension);
        assert_eq!(SortMode::parse("name"), SortMode::ByName);
        assert_eq!(SortMode::parse("anything-else"), SortMode::ByName);
        assert_eq!(SortMode::parse(""), SortMode::ByName);
    }

    #[test]
    fn test_candidate_file_extension() {
        let file = CandidateFile::new(PathBuf::from("src/Main.CS"));
        assert_eq!(file.extension, ".cs");

        let file = CandidateFile::new(PathBuf::from("Makefile"));
        assert_eq!(file.extension, "");
    }

    #[test]
    fn test_parse_language_tags() {
        assert_eq!(
            parse_language_tags("csharp, txt ,python"),
            vec!["csharp", "txt", "python"]
        );
        assert!(parse_language_tags("  , ,").is_empty());
    }

    #[test]
    fn test_config_validation() {
        let config = BundleConfig {
            output_path: PathBuf::new(),
            language_tags: vec!["all".to_string()],
            include_source_note: false,
            sort_mode: SortMode::ByName,
            remove_empty_lines: false,
            author: String::new(),
        };
        assert!(matches!(config.validate(), Err(BundleError::Config(_))));

        let config = BundleConfig {
            output_path: PathBuf::from("out.txt"),
            language_tags: Vec::new(),
            ..config
        };
        assert!(matches!(config.validate(), Err(BundleError::Config(_))));

        let config = BundleConfig {
            language_tags: vec!["csharp".to_string()],
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_path_relative_to() {
        let root = Path::new("/work/project");
        assert_eq!(
            path_relative_to(Path::new("/work/project/src/a.rs"), root),
            Path::new("src/a.rs")
        );
        assert_eq!(
            path_relative_to(Path::new("/elsewhere/b.rs"), root),
            Path::new("/elsewhere/b.rs")
        );
    }
}
