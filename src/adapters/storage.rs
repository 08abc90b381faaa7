use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Writes chart files into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn ensure_ready(&self) -> Result<()> {
        // create_dir_all 對已存在的目錄不會報錯
        fs::create_dir_all(&self.base_path)?;
        tracing::debug!("Output directory ready: {}", self.base_path.display());
        Ok(())
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    fn write_file(&self, file_name: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.path_for(file_name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path)
    }
}
