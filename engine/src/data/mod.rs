// Spreadsheet ingestion: decoding, normalization, filtering and the fallback dataset
pub mod decoder;
pub mod normalizer;
pub mod period;
pub mod preview;
pub mod sample;
