#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Summary of one captured session, as served by `GET /api/sessions`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub src_ip: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub command_count: usize,
}

/// One chunk of replayed terminal output with its offset from session
/// start, in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionEvent {
    pub time_offset: f64,
    pub data: String,
}

/// Full capture document for one session, as served by
/// `GET /api/sessions/{id}`.
///
/// The capture pipeline flattens the recorder's metadata into the document
/// root next to the reconstructed `events` and the extracted `commands`.
/// Metadata keys vary between honeypot deployments, so absent keys default
/// to empty values instead of failing the fetch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionDetail {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub src_ip: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
    #[serde(default)]
    pub commands: Vec<String>,
}
