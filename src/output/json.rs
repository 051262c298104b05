//! JSON output of a [`NetworkInfo`].

use crate::models::NetworkInfo;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    info: &'a NetworkInfo,
    classful: bool,
}

/// Pretty printed JSON with the derived fields plus a `classful` flag.
pub fn to_json(info: &NetworkInfo) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        info,
        classful: info.classification.is_classful(),
    })
}
