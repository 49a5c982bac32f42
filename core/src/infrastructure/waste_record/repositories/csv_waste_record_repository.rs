use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::Mutex;
use tracing::{error, instrument};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        waste_record::{
            entities::{RECORD_FIELDS, WasteRecord},
            ports::WasteRecordRepository,
            value_objects::RecordsSnapshot,
        },
    },
    infrastructure::waste_record::mappers::{CsvWasteRecordRow, to_csv_fields},
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Waste records in a flat CSV file, one row per submission.
///
/// Appends from this process are serialized; nothing guards against other
/// processes writing the same file.
#[derive(Debug, Clone)]
pub struct CsvWasteRecordRepository {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl CsvWasteRecordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates the parent directory and writes the header row when the file
    /// is missing or empty. Safe to call any number of times.
    pub fn init(&self) -> Result<(), CoreError> {
        ensure_initialized(&self.path)
    }
}

fn storage_error(context: &str, e: impl std::fmt::Display) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::StorageError(format!("{}: {}", context, e))
}

fn needs_header(path: &Path) -> Result<bool, CoreError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file() && metadata.len() == 0),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(storage_error("Failed to inspect record table", e)),
    }
}

fn ensure_initialized(path: &Path) -> Result<(), CoreError> {
    if !needs_header(path)? {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| storage_error("Failed to create data directory", e))?;
    }

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| storage_error("Failed to create record table", e))?;
    writer
        .write_record(RECORD_FIELDS)
        .map_err(|e| storage_error("Failed to write record table header", e))?;
    writer
        .flush()
        .map_err(|e| storage_error("Failed to write record table header", e))?;

    Ok(())
}

fn append_row(path: &Path, record: &WasteRecord) -> Result<(), CoreError> {
    ensure_initialized(path)?;

    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| storage_error("Failed to open record table", e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(to_csv_fields(record))
        .map_err(|e| storage_error("Failed to append waste record", e))?;
    writer
        .flush()
        .map_err(|e| storage_error("Failed to append waste record", e))?;

    Ok(())
}

fn read_rows(path: &Path) -> Result<Vec<WasteRecord>, CoreError> {
    ensure_initialized(path)?;

    let content =
        fs::read_to_string(path).map_err(|e| storage_error("Failed to read record table", e))?;
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&content);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    reader
        .deserialize::<CsvWasteRecordRow>()
        .map(|row| {
            row.map(WasteRecord::from)
                .map_err(|e| storage_error("Malformed record row", e))
        })
        .collect()
}

impl WasteRecordRepository for CsvWasteRecordRepository {
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    async fn append(&self, record: WasteRecord) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || append_row(&path, &record))
            .await
            .map_err(|e| storage_error("Record append task failed", e))?
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn read_all(&self) -> RecordsSnapshot {
        let path = self.path.clone();

        let rows = tokio::task::spawn_blocking(move || read_rows(&path))
            .await
            .map_err(|e| storage_error("Record read task failed", e))
            .and_then(|rows| rows);

        match rows {
            Ok(records) => RecordsSnapshot::loaded(records),
            Err(e) => RecordsSnapshot::failed(e.to_string()),
        }
    }
}
