use crate::core::academy::Academy;
use crate::core::snapshot::AcademySnapshot;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Loads and saves an [`Academy`] as a JSON snapshot through a [`Storage`].
pub struct SnapshotRepository<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> SnapshotRepository<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    /// `Ok(None)` when no snapshot has been written yet.
    pub async fn load(&self) -> Result<Option<Academy>> {
        if !self.storage.exists(&self.file_name).await? {
            tracing::debug!("No snapshot at {}", self.file_name);
            return Ok(None);
        }

        let bytes = self.storage.read_file(&self.file_name).await?;
        let snapshot: AcademySnapshot = serde_json::from_slice(&bytes)?;
        let academy = Academy::from_snapshot(snapshot)?;

        tracing::info!(
            "Loaded {} students and {} courses from {}",
            academy.students().len(),
            academy.courses().len(),
            self.file_name
        );
        Ok(Some(academy))
    }

    pub async fn save(&self, academy: &Academy) -> Result<()> {
        let json = serde_json::to_vec_pretty(&academy.to_snapshot())?;
        self.storage.write_file(&self.file_name, &json).await?;
        tracing::info!("Snapshot saved to {}", self.file_name);
        Ok(())
    }
}
