use serde::Deserialize;

/// Query parameters of `GET /addv/{key}/val/answer`.
///
/// Every field is collected as a raw string (rather than `i64`/typed) so a
/// malformed value falls through to the handler's own `ERROR\n` response
/// instead of axum's default query-rejection body.
#[derive(Debug, Deserialize)]
pub struct AnswerParams {
    pub domain: Option<String>,
    pub authtime: Option<String>,
    pub sig: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    pub time: Option<String>,
}

impl AnswerParams {
    pub fn answer_or_default(&self) -> &str {
        self.answer.as_deref().unwrap_or("error")
    }
}
