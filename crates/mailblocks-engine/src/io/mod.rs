use crate::blocks::BlockId;
use crate::models::{Template, TemplateFile};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid template file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid template file {path}: block id {id} is used by more than one block")]
    DuplicateBlockId { path: PathBuf, id: BlockId },
    #[error("Failed to serialize template: {0}")]
    Serialize(serde_json::Error),
    #[error("Invalid templates directory: {0}")]
    InvalidTemplatesDir(String),
}

/// Read and parse a template file, rejecting files whose block ids repeat
pub fn read_template(
    relative_path: &RelativePath,
    templates_root: &Path,
) -> Result<Template, IoError> {
    let absolute_path = relative_path.to_path(templates_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    let template: Template =
        serde_json::from_str(&content).map_err(|source| IoError::Parse {
            path: absolute_path.clone(),
            source,
        })?;
    if let Some(id) = template.duplicate_block_id() {
        return Err(IoError::DuplicateBlockId {
            path: absolute_path,
            id,
        });
    }
    Ok(template)
}

/// Write a template as pretty-printed JSON, creating parent directories
pub fn write_template(
    relative_path: &RelativePath,
    templates_root: &Path,
    template: &Template,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(templates_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = template.to_json_pretty().map_err(IoError::Serialize)?;
    fs::write(&absolute_path, content)?;
    log::debug!("wrote template {:?} to {}", template.name, absolute_path.display());
    Ok(())
}

/// Scan for template files in the templates directory
pub fn scan_templates(templates_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !templates_root.exists() {
        return Err(IoError::InvalidTemplatesDir(
            "templates directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(templates_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// List template files relative to the templates root
pub fn list_template_files(templates_root: &Path) -> Result<Vec<TemplateFile>, IoError> {
    let files = scan_templates(templates_root)?;
    Ok(files
        .iter()
        .filter_map(|path| {
            let relative = path.strip_prefix(templates_root).ok()?;
            match relative_path::RelativePathBuf::from_path(relative) {
                Ok(relative) => Some(TemplateFile::new(relative)),
                Err(e) => {
                    log::warn!("skipping template {}: {e}", path.display());
                    None
                }
            }
        })
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir)?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_templates_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidTemplatesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_templates_dir};
    use pretty_assertions::assert_eq;
    use relative_path::RelativePathBuf;

    #[test]
    fn test_scan_finds_nested_json_files_sorted() {
        // Given a templates directory with json files and other files
        let templates_dir = create_test_templates_dir();
        create_test_file(&templates_dir, "welcome.json", "{}");
        create_test_file(&templates_dir, "notes.md", "not a template");
        fs::create_dir_all(templates_dir.path().join("campaigns")).unwrap();
        create_test_file(&templates_dir, "campaigns/autumn.json", "{}");

        // When scanning
        let files = list_template_files(templates_dir.path()).unwrap();

        // Then only templates are found, in path order
        let names: Vec<_> = files.iter().map(|f| f.relative_path().as_str()).collect();
        assert_eq!(names, vec!["campaigns/autumn.json", "welcome.json"]);
    }

    #[test]
    fn test_handle_invalid_templates_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        assert!(matches!(
            scan_templates(&nonexistent_path),
            Err(IoError::InvalidTemplatesDir(_))
        ));
        assert!(validate_templates_dir(&nonexistent_path).is_err());
    }

    #[test]
    fn test_write_then_read_template() {
        let templates_dir = create_test_templates_dir();
        let path = RelativePathBuf::from("drafts/monthly.json");
        let template = Template::starter("Monthly");

        write_template(&path, templates_dir.path(), &template).unwrap();
        let loaded = read_template(&path, templates_dir.path()).unwrap();

        assert_eq!(loaded, template);
    }

    #[test]
    fn test_read_missing_template() {
        let templates_dir = create_test_templates_dir();

        let result = read_template(RelativePath::new("missing.json"), templates_dir.path());

        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_malformed_template_reports_path() {
        let templates_dir = create_test_templates_dir();
        create_test_file(&templates_dir, "broken.json", "{ not json");

        let err =
            read_template(RelativePath::new("broken.json"), templates_dir.path()).unwrap_err();

        assert!(matches!(err, IoError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_read_template_with_repeated_block_id_is_rejected() {
        // Given a file where a divider and a spacer share one id
        let templates_dir = create_test_templates_dir();
        create_test_file(
            &templates_dir,
            "twins.json",
            r#"{
                "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                "name": "Twins",
                "blocks": [
                    { "id": "5b0b5f0e-3c7a-4d8e-9a51-0f2d6c1e8b44", "content": { "type": "divider" } },
                    { "id": "5b0b5f0e-3c7a-4d8e-9a51-0f2d6c1e8b44", "content": { "type": "spacer" } }
                ]
            }"#,
        );

        // When reading it
        let err = read_template(RelativePath::new("twins.json"), templates_dir.path()).unwrap_err();

        // Then it is refused instead of loading two blocks the editor cannot tell apart
        assert!(matches!(
            err,
            IoError::DuplicateBlockId { ref id, .. }
                if id.to_string() == "5b0b5f0e-3c7a-4d8e-9a51-0f2d6c1e8b44"
        ));
        assert!(err.to_string().contains("twins.json"));
    }
}
