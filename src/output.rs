//! Declaration file writer
//!
//! Owns artifact persistence: directory creation and writing one
//! `<Name>.types.<ext>` file per declaration. The deterministic file name
//! comes from the declaration itself.

use crate::error::{Error, Result};
use crate::schema::Declaration;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes declaration text files into an output directory
#[derive(Debug, Clone)]
pub struct TypeWriter {
    output_dir: PathBuf,
    extension: String,
}

impl TypeWriter {
    /// Create a writer targeting the given directory
    pub fn new(output_dir: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            extension: extension.into(),
        }
    }

    /// The directory artifacts are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Persist a declaration, returning the path it was written to.
    ///
    /// The output directory is created on demand; both directory creation
    /// and the write itself map to [`Error::Write`].
    pub fn write(&self, declaration: &Declaration) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::write(format!(
                "Failed to create directory {}: {e}",
                self.output_dir.display()
            ))
        })?;

        let path = self.output_dir.join(declaration.file_name(&self.extension));
        fs::write(&path, &declaration.text)
            .map_err(|e| Error::write(format!("Failed to write {}: {e}", path.display())))?;

        Ok(path)
    }
}
