use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use patients_core::types::PatientMap;
use tokio::io::AsyncWriteExt;

use super::{PatientStore, StoreError};

/// Stores the mapping as a single JSON object in one file.
///
/// Writes go to a sibling `<file>.tmp` which is then renamed over the
/// target, so readers never observe a truncated file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl PatientStore for JsonFileStore {
    async fn load(&self) -> Result<PatientMap, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Store file missing, treating as empty");
                return Ok(PatientMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(PatientMap::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, patients: &PatientMap) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(patients)?;
        let tmp = self.temp_path();

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            count = patients.len(),
            "Patient store written"
        );
        Ok(())
    }
}
