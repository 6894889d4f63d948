use crate::errors::AppError;
use crate::store::LogStore;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error};

/// Reads the persisted log. A missing, unreadable or malformed file yields an
/// empty store; the caller never sees an error.
pub async fn load_data(path: &Path) -> LogStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                LogStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LogStore::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            LogStore::default()
        }
    }
}

/// Rewrites the whole store. The payload goes to a sibling temp file first and
/// is renamed over the target, so readers only ever see a complete file.
pub async fn persist_data(path: &Path, store: &LogStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload).await?;
    fs::rename(&tmp_path, path).await?;
    debug!(entries = store.len(), "persisted logs to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogEntry;
    use std::path::PathBuf;

    fn unique_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "fitness_calendar_{name}_{}_{}.json",
            std::process::id(),
            nanos
        ));
        path
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let path = unique_path("round_trip");
        let mut store = LogStore::new();
        store.upsert("2024-02-10", LogEntry::fixed_class());
        store.upsert("2024-02-11", LogEntry::credit_class(12));
        store.upsert("2023-12-31", LogEntry::credit_class(0));

        persist_data(&path, &store).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded, store);
        assert!(!path.with_extension("json.tmp").exists());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let path = unique_path("missing");
        assert!(load_data(&path).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_loads_empty() {
        let path = unique_path("malformed");
        std::fs::write(&path, b"{ not json").unwrap();
        assert!(load_data(&path).await.is_empty());

        std::fs::write(&path, br#"{"2024-02-10":{"type":"yoga","cost":1}}"#).unwrap();
        assert!(load_data(&path).await.is_empty());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn loads_browser_storage_format() {
        let path = unique_path("browser");
        std::fs::write(
            &path,
            br#"{"2024-02-10":{"type":"pilates","cost":1},"2024-02-11":{"type":"classpass","cost":12}}"#,
        )
        .unwrap();

        let store = load_data(&path).await;
        assert_eq!(store.get("2024-02-10"), Some(&LogEntry::fixed_class()));
        assert_eq!(store.get("2024-02-11"), Some(&LogEntry::credit_class(12)));

        let _ = std::fs::remove_file(&path);
    }
}
