use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client_info::ClientInfo;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

/// Read-only snapshot of one mapping's counters.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub destination_url: String,
    pub view_count: u64,
    pub unique_view_count: usize,
}

/// One creation event as returned by the history endpoint. View counters are
/// joined from the mapping store at read time and are absent when the mapping
/// has since been deleted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub short_code: String,
    pub short_url: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
    pub client: ClientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_view_count: Option<usize>,
}
