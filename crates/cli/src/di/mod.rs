mod ingest;
mod use_cases;

pub use ingest::IngestServices;
pub use use_cases::UseCases;
