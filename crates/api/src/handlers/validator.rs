use crate::dto::AnswerParams;
use crate::net::client_ip;
use crate::state::AppState;
use addv_application::use_cases::SubmitOutcome;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use chrono::Utc;
use tracing::instrument;

/// Renders the validator join page: a batch of assigned (domain,
/// challenge, tag, reporting subdomain) tuples the browser will probe
/// and report back through [`submit`]. Styling is deliberately minimal;
/// the contract this page must honor is the query string it issues to
/// `/addv/{key}/val/answer`, not its appearance.
#[instrument(skip_all, name = "addv_val_join", fields(key = %key))]
pub async fn join(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: axum::http::HeaderMap,
) -> Html<String> {
    let ip = client_ip(&headers).unwrap_or("0.0.0.0").to_string();
    let auth_time = Utc::now().timestamp();
    let challenges = state.select_batch.execute(&ip, auth_time);

    let assigned: Vec<String> = challenges.iter().map(|c| c.domain.clone()).collect();
    state.events.joined(&ip, &key, &assigned).await;

    Html(render_join_page(&key, auth_time, &challenges))
}

fn render_join_page(
    key: &str,
    auth_time: i64,
    challenges: &[addv_application::use_cases::AssignedChallenge],
) -> String {
    let mut probes = String::new();
    for c in challenges {
        probes.push_str(&format!(
            "      probe({domain:?}, {challenge:?}, {tag:?}, {sub:?});\n",
            domain = c.domain,
            challenge = c.challenge,
            tag = c.tag,
            sub = c.reporting_subdomain,
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head><title>ADDV Validator</title></head>\n\
<body>\n\
  <p>key={key} auth_time={auth_time}</p>\n\
  <script>\n\
    const authtime = {auth_time};\n\
    function probe(domain, challenge, sig, sub) {{\n\
      const img = new Image();\n\
      const start = Date.now();\n\
      const report = (answer) => fetch(`/addv/{key}/val/answer?domain=${{domain}}&authtime=${{authtime}}&sig=${{sig}}&answer=${{answer}}&time=${{Date.now()}}`);\n\
      img.onload = () => report('success');\n\
      img.onerror = () => report('error');\n\
      img.src = `https://${{sub}}/${{challenge}}`;\n\
      void start;\n\
    }}\n\
{probes}\
  </script>\n\
</body>\n\
</html>\n"
    )
}

/// Verifies and records one reporter's answer for a single domain.
#[instrument(skip_all, name = "addv_val_answer", fields(key = %key))]
pub async fn submit(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<AnswerParams>,
    headers: axum::http::HeaderMap,
) -> &'static str {
    let (Some(domain), Some(authtime), Some(sig), Some(time)) =
        (&params.domain, &params.authtime, &params.sig, &params.time)
    else {
        return "ERROR\n";
    };
    let Some(ip) = client_ip(&headers) else {
        return "ERROR\n";
    };
    let Ok(issued_at) = authtime.parse::<i64>() else {
        return "ERROR\n";
    };
    let Ok(reported_at_millis) = time.parse::<i64>() else {
        return "ERROR\n";
    };

    let outcome = state
        .submit_answer
        .execute(
            domain,
            ip,
            issued_at,
            sig,
            params.answer_or_default(),
            reported_at_millis,
            &key,
        )
        .await;

    match outcome {
        SubmitOutcome::Accepted => "OK\n",
        SubmitOutcome::Rejected => "ERROR\n",
    }
}
