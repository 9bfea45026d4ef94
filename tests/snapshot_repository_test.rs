use anyhow::Result;
use sgaea::core::seed::demo_academy;
use sgaea::domain::ports::Storage;
use sgaea::{Academy, LocalStorage, SgaeaError, SnapshotRepository, StudentId};
use tempfile::TempDir;

fn repository(temp_dir: &TempDir) -> SnapshotRepository<LocalStorage> {
    let base = temp_dir.path().to_str().unwrap().to_string();
    SnapshotRepository::new(LocalStorage::new(base), "academy.json")
}

#[tokio::test]
async fn test_load_without_snapshot_returns_none() -> Result<()> {
    let temp_dir = TempDir::new()?;
    assert!(repository(&temp_dir).load().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_save_then_load_preserves_academy() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = repository(&temp_dir);

    let mut academy = demo_academy()?;
    academy.remove_student(StudentId(2))?;
    repo.save(&academy).await?;

    let loaded = repo.load().await?.expect("snapshot was written");
    assert_eq!(loaded.to_snapshot(), academy.to_snapshot());
    assert_eq!(loaded.students().next_id(), StudentId(4));
    assert_eq!(loaded.student_average(StudentId(1))?, 7.5);
    Ok(())
}

#[tokio::test]
async fn test_snapshot_is_plain_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = repository(&temp_dir);
    repo.save(&demo_academy()?).await?;

    let raw = std::fs::read_to_string(temp_dir.path().join("academy.json"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    assert_eq!(value["next_id"], 4);
    assert_eq!(value["courses"][0], "Matemáticas");
    let daniel = &value["students"][0];
    assert_eq!(daniel["name"], "Daniel");
    assert_eq!(daniel["address"]["postal_code"], "28010");
    assert_eq!(daniel["courses"], serde_json::json!(["Matemáticas", "Física"]));
    assert_eq!(daniel["grades"]["Física"], serde_json::json!([7.0]));
    Ok(())
}

#[tokio::test]
async fn test_corrupt_snapshot_is_serialization_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    storage.write_file("academy.json", b"{ not json").await?;

    let repo = SnapshotRepository::new(storage, "academy.json");
    assert!(matches!(
        repo.load().await,
        Err(SgaeaError::SerializationError(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_invalid_snapshot_content_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let mut snapshot = Academy::new().to_snapshot();
    snapshot.courses = vec!["Math".to_string(), "Math".to_string()];
    storage
        .write_file("academy.json", &serde_json::to_vec(&snapshot)?)
        .await?;

    let repo = SnapshotRepository::new(storage, "academy.json");
    assert!(matches!(
        repo.load().await,
        Err(SgaeaError::ValidationError { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_location_is_not_treated_as_missing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("data");
    std::fs::write(&blocker, b"not a directory")?;

    let storage = LocalStorage::new(blocker.to_str().unwrap().to_string());
    let repo = SnapshotRepository::new(storage, "academy.json");
    assert!(matches!(repo.load().await, Err(SgaeaError::IoError(_))));
    Ok(())
}
