use sculpture_core::{AssetError, ImageResolver};
use std::fs;
use std::path::PathBuf;

/// Resolves ornament locators against a directory on disk.
pub struct DirectoryImages {
    pub root: PathBuf,
}

impl ImageResolver for DirectoryImages {
    fn resolve(&self, locator: &str) -> Result<(), AssetError> {
        let path = self.root.join(locator);
        let meta = fs::metadata(&path).map_err(|_| AssetError::Missing(locator.to_string()))?;
        if !meta.is_file() || meta.len() == 0 {
            return Err(AssetError::Unreadable {
                path: path.display().to_string(),
                reason: "not a non-empty file".into(),
            });
        }
        Ok(())
    }
}
