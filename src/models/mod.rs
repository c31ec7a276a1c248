pub mod record;
pub mod request;

pub use record::{FileRecord, RawEntry, UNKNOWN_NAME};
pub use request::{ScanRequest, SortField, SortOrder, TimeRange};
