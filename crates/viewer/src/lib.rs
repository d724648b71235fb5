mod assembler;
mod cache;
mod client;
mod error;
mod view;

#[cfg(test)]
mod test_utils;

pub use assembler::OrderViewAssembler;
pub use cache::{CachedRecord, MemoryCache, RecordCache, RecordKey};
pub use client::{decode_record, HttpRecordSource, RecordSource, DEFAULT_BASE_URL};
pub use error::{RecordKind, ViewerError};
pub use view::{Field, OrderViewModel};
