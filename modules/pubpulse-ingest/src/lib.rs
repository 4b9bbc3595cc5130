pub mod derive;
pub mod error;
pub mod ingest;
pub mod store;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use derive::derive_record;
pub use error::{IngestError, Result};
pub use ingest::Ingestor;
pub use store::PostStore;
pub use traits::{PostSource, RecordSink};
