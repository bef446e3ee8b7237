use addv_application::ports::EventSink;
use addv_domain::ValidationEvent;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Appends one JSON object per line to `{dir}/app-{pid}.jsonl`, mirroring
/// every record to the tracing subscriber at debug level. Write failures
/// are logged and swallowed: a reporter's request must never fail because
/// the audit trail couldn't be written.
pub struct EventLogSink {
    file: Mutex<File>,
}

impl EventLogSink {
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("app-{}.jsonl", std::process::id()));
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    fn write(&self, mut record: Value) {
        if let Value::Object(map) = &mut record {
            map.insert("time".to_string(), json!(Utc::now().to_rfc3339()));
        }
        debug!(event = %record, "validation event");
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to serialize event");
                return;
            }
        };
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(file, "{line}") {
            warn!(error = %e, "failed to write event log");
        }
    }
}

#[async_trait]
impl EventSink for EventLogSink {
    async fn queued(&self, domain: &str, challenge: &str, ips: &[String]) {
        self.write(json!({"event": "QUEUED", "domain": domain, "challenge": challenge, "ips": ips}));
    }

    async fn optout(&self, ip: &str) {
        self.write(json!({"event": "OPTOUT", "ip": ip}));
    }

    async fn joined(&self, ip: &str, key: &str, assigned: &[String]) {
        self.write(json!({"event": "JOINED", "ip": ip, "key": key, "assigned": assigned}));
    }

    async fn answered(&self, ip: &str, key: &str, domain: &str, answer: &str) {
        self.write(json!({
            "event": "ANSWERED",
            "ip": ip,
            "key": key,
            "domain": domain,
            "answer": answer,
        }));
    }

    async fn verdict(&self, event: &ValidationEvent) {
        let answers: Value = match event {
            ValidationEvent::Validated { answers, .. } | ValidationEvent::Invalidated { answers, .. } => {
                serde_json::to_value(
                    answers
                        .iter()
                        .map(|(k, v)| (k.as_str().to_string(), v.clone()))
                        .collect::<std::collections::HashMap<_, _>>(),
                )
                .unwrap_or(Value::Null)
            }
        };
        let (ips, challenge) = match event {
            ValidationEvent::Validated { ips, challenge, .. }
            | ValidationEvent::Invalidated { ips, challenge, .. } => (ips, challenge),
        };
        self.write(json!({
            "event": event.event_name(),
            "domain": event.domain(),
            "ips": ips,
            "challenge": challenge,
            "answers": answers,
        }));
    }
}
