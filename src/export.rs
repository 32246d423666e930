//! CSV export workflow: list every secret, fetch each current value, and
//! write the flat `key,value,desc` table to a uniquely named file.

use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;
use crate::secrets::SecretStore;

/// Header row of every export file.
pub const CSV_HEADER: [&str; 3] = ["key", "value", "desc"];

/// Result of a completed export run.
#[derive(Debug)]
pub struct ExportOutcome {
    /// Name of the created file, relative to the output directory.
    pub file_name: String,
    /// Full path of the created file.
    pub path: PathBuf,
    /// Number of secret rows written (excluding the header).
    pub rows: usize,
}

/// Generate a fresh output file name: local timestamp plus a short random
/// suffix, so two runs never collide without any persisted counter.
pub fn output_file_name() -> String {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let suffix = Uuid::new_v4().to_string();
    format!("{}_{}.csv", stamp, &suffix[..8])
}

/// Run the full export against `store`, creating the output file in `dir`.
///
/// The file is created and the header written before any value is fetched.
/// A failing fetch aborts the run; rows handed to the writer before the
/// failure survive in the file because the writer flushes on drop.
pub async fn export_to_csv<S>(store: &S, dir: &Path) -> Result<ExportOutcome>
where
    S: SecretStore + ?Sized,
{
    let secrets = store.list_secrets().await?;
    info!(count = secrets.len(), "listed secrets");

    let file_name = output_file_name();
    let path = dir.join(&file_name);
    let mut writer = Writer::from_path(&path)?;
    writer.write_record(CSV_HEADER)?;

    for descriptor in &secrets {
        let value = store.get_current_value(&descriptor.name).await?;
        debug!(secret = %descriptor.name, "fetched current value");
        writer.write_record([
            descriptor.name.as_str(),
            value.as_str(),
            descriptor.description.as_deref().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;

    Ok(ExportOutcome {
        file_name,
        path,
        rows: secrets.len(),
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::fs;

    use super::*;
    use crate::error::SmexError;
    use crate::secrets::SecretDescriptor;

    /// In-memory store: a fixed listing, values keyed by name. Names listed
    /// without a value make the fetch fail, like a deletion race would.
    struct FakeStore {
        secrets: Vec<(&'static str, Option<&'static str>, Option<&'static str>)>,
    }

    #[async_trait]
    impl SecretStore for FakeStore {
        async fn list_secrets(&self) -> Result<Vec<SecretDescriptor>> {
            Ok(self
                .secrets
                .iter()
                .map(|(name, description, _)| SecretDescriptor {
                    name: name.to_string(),
                    description: description.map(str::to_string),
                    arn: None,
                })
                .collect())
        }

        async fn get_current_value(&self, name: &str) -> Result<String> {
            self.secrets
                .iter()
                .find(|(n, _, _)| *n == name)
                .and_then(|(_, _, value)| *value)
                .map(str::to_string)
                .ok_or_else(|| SmexError::provider("fake", format!("no value for {}", name)))
        }
    }

    #[test]
    fn test_output_file_name_shape() {
        let name = output_file_name();

        // <14-digit timestamp>_<8 hex chars>.csv
        let (stem, ext) = name.split_once('.').unwrap();
        assert_eq!(ext, "csv");
        let (stamp, suffix) = stem.split_once('_').unwrap();
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_output_file_names_are_distinct() {
        assert_ne!(output_file_name(), output_file_name());
    }

    #[tokio::test]
    async fn test_export_writes_header_and_rows_in_listing_order() {
        let store = FakeStore {
            secrets: vec![
                ("db/pass", None, Some("p@ss")),
                ("api/key", Some("external"), Some("xk-1")),
            ],
        };
        let dir = tempfile::tempdir().unwrap();

        let outcome = export_to_csv(&store, dir.path()).await.unwrap();

        assert_eq!(outcome.rows, 2);
        let content = fs::read_to_string(&outcome.path).unwrap();
        assert_eq!(content, "key,value,desc\ndb/pass,p@ss,\napi/key,xk-1,external\n");
    }

    #[tokio::test]
    async fn test_export_empty_listing_writes_header_only() {
        let store = FakeStore { secrets: vec![] };
        let dir = tempfile::tempdir().unwrap();

        let outcome = export_to_csv(&store, dir.path()).await.unwrap();

        assert_eq!(outcome.rows, 0);
        let content = fs::read_to_string(&outcome.path).unwrap();
        assert_eq!(content, "key,value,desc\n");
    }

    #[tokio::test]
    async fn test_export_aborts_on_fetch_failure_keeping_earlier_rows() {
        let store = FakeStore {
            secrets: vec![
                ("alpha", None, Some("a-value")),
                ("beta", None, None),
                ("gamma", None, Some("c-value")),
            ],
        };
        let dir = tempfile::tempdir().unwrap();

        let err = export_to_csv(&store, dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("no value for beta"));

        // The file was created before fetching started; the writer flushed
        // the first row when it was dropped during error propagation.
        let mut files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(files.pop().unwrap()).unwrap();
        assert_eq!(content, "key,value,desc\nalpha,a-value,\n");
    }

    #[tokio::test]
    async fn test_export_twice_yields_distinct_files_with_identical_rows() {
        let store = FakeStore {
            secrets: vec![("only", Some("desc"), Some("v"))],
        };
        let dir = tempfile::tempdir().unwrap();

        let first = export_to_csv(&store, dir.path()).await.unwrap();
        let second = export_to_csv(&store, dir.path()).await.unwrap();

        assert_ne!(first.file_name, second.file_name);
        assert_eq!(
            fs::read_to_string(&first.path).unwrap(),
            fs::read_to_string(&second.path).unwrap()
        );
    }
}
