pub mod data_file;
pub mod plot;
pub mod report;
