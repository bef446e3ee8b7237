use serde::Deserialize;
use std::collections::HashSet;

/// Body of `POST /addv/{key}/queue-batch`.
#[derive(Debug, Deserialize)]
pub struct QueueBatchRequest {
    pub domains: HashSet<String>,
}

/// Query parameters of `GET /addv/{key}/queue`.
#[derive(Debug, Deserialize, Default)]
pub struct QueueParams {
    #[serde(default)]
    pub domain: String,
}
