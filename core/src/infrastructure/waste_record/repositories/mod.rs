pub mod csv_waste_record_repository;

pub use csv_waste_record_repository::CsvWasteRecordRepository;
