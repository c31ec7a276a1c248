use serde::Serialize;

use crate::api::ErrorBody;
use crate::error::FscanError;

/// Format a result as JSON, minified unless pretty output is configured.
pub fn format_json<T: Serialize>(result: &T, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    rendered.unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format an error as the wire envelope.
pub fn format_error(err: &FscanError) -> String {
    serde_json::to_string(&ErrorBody::from_error(err))
        .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}
