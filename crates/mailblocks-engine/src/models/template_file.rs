use relative_path::{RelativePath, RelativePathBuf};

/// A template file on disk, relative to the templates root
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl TemplateFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_name()
            .map(|name| name.strip_suffix(".json").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string();

        Self {
            relative_path,
            display_name,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.json` extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<RelativePathBuf> for TemplateFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for TemplateFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
