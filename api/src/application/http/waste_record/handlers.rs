pub mod get_waste_records;
pub mod submit_waste_record;
