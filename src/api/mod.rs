//! Wire shapes for the dashboard contract.
//!
//! The scan request body, the response rows and the error envelope match
//! the JSON the dashboard pages exchange with `POST /files/scan`. The
//! finance and calendar shapes are collaborator interfaces consumed by the
//! other pages and must stay stable for them to render correctly.

pub mod finance;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FscanError, Result};
use crate::events::Event;
use crate::models::{FileRecord, ScanRequest, SortField, SortOrder, TimeRange};

/// Timestamp format the dashboard table renders.
const WIRE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Body of `POST /files/scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequestBody {
    pub directory: String,
    #[serde(default = "default_true")]
    pub exclude_hidden: bool,
    #[serde(default = "default_true")]
    pub exclude_pyc: bool,
    #[serde(default = "default_true")]
    pub exclude_init: bool,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub min_size: Option<u64>,
    #[serde(default)]
    pub max_size: Option<u64>,
    #[serde(default = "default_sort_by")]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub date_created_range: Option<[String; 2]>,
    #[serde(default)]
    pub date_modified_range: Option<[String; 2]>,
    #[serde(default)]
    pub date_accessed_range: Option<[String; 2]>,
}

fn default_true() -> bool {
    true
}

fn default_sort_by() -> SortField {
    SortField::Name
}

impl ScanRequestBody {
    /// Convert the wire body into a typed request. Unparsable range
    /// timestamps are `InvalidQuery`.
    pub fn into_request(self) -> Result<ScanRequest> {
        Ok(ScanRequest {
            directory: self.directory,
            exclude_hidden: self.exclude_hidden,
            exclude_pyc: self.exclude_pyc,
            exclude_init: self.exclude_init,
            extensions: self.extensions,
            min_size: self.min_size,
            max_size: self.max_size,
            created_range: parse_range(self.date_created_range.as_ref())?,
            modified_range: parse_range(self.date_modified_range.as_ref())?,
            accessed_range: parse_range(self.date_accessed_range.as_ref())?,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        })
    }
}

fn parse_range(range: Option<&[String; 2]>) -> Result<Option<TimeRange>> {
    match range {
        None => Ok(None),
        Some([start, end]) => Ok(Some(TimeRange::new(
            parse_timestamp(start)?,
            parse_timestamp(end)?,
        ))),
    }
}

/// Parse a wire timestamp: RFC 3339, `YYYY-MM-DDTHH:MM:SS`, or a bare
/// `YYYY-MM-DD` date taken at midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(FscanError::invalid_query(format!("bad timestamp: {s}")))
}

/// One row of the scan response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRow {
    pub file_name: String,
    pub file_size: u64,
    pub file_path: String,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    pub date_accessed: Option<String>,
}

impl FileRow {
    #[must_use]
    pub fn from_record(record: &FileRecord) -> Self {
        Self {
            file_name: record.name.clone(),
            file_size: record.size_bytes,
            file_path: record.path.clone(),
            date_created: record.created.map(format_timestamp),
            date_modified: record.modified.map(format_timestamp),
            date_accessed: record.accessed.map(format_timestamp),
        }
    }
}

fn format_timestamp(stamp: DateTime<Utc>) -> String {
    stamp.format(WIRE_TIME_FORMAT).to_string()
}

/// Response rows for a sorted result set.
#[must_use]
pub fn rows(records: &[FileRecord]) -> Vec<FileRow> {
    records.iter().map(FileRow::from_record).collect()
}

/// Error envelope returned with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    #[must_use]
    pub fn from_error(err: &FscanError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }
}

/// Calendar row consumed by the calendar view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time: String,
}

impl EventRow {
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            time: event.time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn body_parses_with_defaults() {
        let body: ScanRequestBody =
            serde_json::from_str(r#"{"directory": "/data"}"#).unwrap();
        assert!(body.exclude_hidden);
        assert!(body.exclude_pyc);
        assert!(body.exclude_init);
        assert_eq!(body.sort_by, SortField::Name);
        assert_eq!(body.sort_order, SortOrder::Asc);
        assert!(body.extensions.is_none());
    }

    #[test]
    fn body_parses_full_contract() {
        let json = r#"{
            "directory": "/data",
            "exclude_hidden": true,
            "exclude_pyc": false,
            "exclude_init": true,
            "extensions": [".csv"],
            "sort_by": "file_size",
            "sort_order": "desc",
            "date_created_range": null,
            "date_modified_range": ["2024-01-01", "2024-12-31"],
            "date_accessed_range": null
        }"#;
        let request = serde_json::from_str::<ScanRequestBody>(json)
            .unwrap()
            .into_request()
            .unwrap();

        assert_eq!(request.sort_by, SortField::Size);
        assert_eq!(request.sort_order, SortOrder::Desc);
        assert!(!request.exclude_pyc);
        let range = request.modified_range.unwrap();
        assert_eq!(range.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        request.validate().unwrap();
    }

    #[test]
    fn bad_range_timestamp_is_invalid_query() {
        let body: ScanRequestBody = serde_json::from_str(
            r#"{"directory": "/data", "date_created_range": ["not-a-date", "2024-01-01"]}"#,
        )
        .unwrap();
        let err = body.into_request().unwrap_err();
        assert_eq!(err.code(), "invalid_query");
    }

    #[test]
    fn parse_timestamp_accepts_all_wire_forms() {
        assert_eq!(
            parse_timestamp("2024-06-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("2024-06-01T12:30:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("2024-06-01T12:30:00Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
        );
        assert!(parse_timestamp("June 1st").is_err());
    }

    #[test]
    fn row_formats_dashboard_timestamps() {
        let record = FileRecord {
            path: "/data/a.csv".into(),
            name: "a.csv".into(),
            size_bytes: 100,
            created: Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap()),
            modified: None,
            accessed: None,
        };
        let row = FileRow::from_record(&record);
        assert_eq!(row.file_name, "a.csv");
        assert_eq!(row.file_size, 100);
        assert_eq!(row.date_created.as_deref(), Some("06/01/2024 09:05:03"));
        assert!(row.date_modified.is_none());
    }

    #[test]
    fn error_body_carries_code_and_message() {
        let body = ErrorBody::from_error(&FscanError::invalid_query("bad range"));
        assert_eq!(body.code, "invalid_query");
        assert!(body.error.contains("bad range"));
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"error\""));
    }
}
