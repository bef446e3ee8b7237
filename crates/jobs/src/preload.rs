use addv_application::use_cases::QueueDomainUseCase;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Queues every domain listed in a preload file, one per line, before the
/// HTTP listener starts accepting reporters. A missing file is not an
/// error: a freshly deployed coordinator simply starts with an empty
/// queue.
pub struct PreloadJob {
    queue_domain: Arc<QueueDomainUseCase>,
    concurrency: usize,
}

impl PreloadJob {
    pub fn new(queue_domain: Arc<QueueDomainUseCase>, concurrency: usize) -> Self {
        Self {
            queue_domain,
            concurrency: concurrency.max(1),
        }
    }

    /// Returns the number of domains this call newly queued.
    pub async fn run(&self, path: &Path) -> usize {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no preload file found, starting empty");
                return 0;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read preload file");
                return 0;
            }
        };

        let domains: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        info!(count = domains.len(), "preloading queue");

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        for domain in domains {
            let queue_domain = self.queue_domain.clone();
            let permits = permits.clone();
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await.expect("semaphore closed");
                queue_domain.execute(&domain).await
            });
        }

        let mut queued = 0;
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(addv_application::use_cases::QueueOutcome::Queued) => queued += 1,
                Ok(_) => {}
                Err(e) => warn!(error = %e, "preload task panicked"),
            }
        }

        info!(queued, "preload complete");
        queued
    }
}
