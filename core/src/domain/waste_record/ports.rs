use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    waste_record::{
        entities::WasteRecord,
        value_objects::{RecordsSnapshot, SubmitWasteRecordInput},
    },
};

/// Append-only store of waste records.
#[cfg_attr(test, mockall::automock)]
pub trait WasteRecordRepository: Send + Sync {
    /// Writes one row. Only I/O failures are reported.
    fn append(&self, record: WasteRecord) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Reads every record in submission order. Read failures are reported
    /// through the snapshot status, never as an error.
    fn read_all(&self) -> impl Future<Output = RecordsSnapshot> + Send;
}

/// Service trait for waste record submission and history
#[cfg_attr(test, mockall::automock)]
pub trait WasteRecordService: Send + Sync {
    fn submit_waste_record(
        &self,
        input: SubmitWasteRecordInput,
    ) -> impl Future<Output = Result<WasteRecord, CoreError>> + Send;

    fn get_waste_records(&self) -> impl Future<Output = RecordsSnapshot> + Send;
}
