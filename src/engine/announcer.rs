use super::EngineClient;
use crate::service::{ServiceDescription, ServiceStatus};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AnnounceSettings {
    pub engine_urls: Vec<String>,
    pub retries: u32,
    pub retry_delay: Duration,
}

/// Announces the service to every engine, giving each one its own retry
/// budget. Returns how many engines accepted the announcement.
pub async fn announce_to_engines(
    client: &dyn EngineClient,
    description: &ServiceDescription,
    settings: &AnnounceSettings,
) -> usize {
    let attempts = settings.retries.max(1);
    let mut announced = 0;

    for engine_url in &settings.engine_urls {
        for attempt in 1..=attempts {
            match client.announce(engine_url, description).await {
                Ok(()) => {
                    info!("Service announced to engine {}", engine_url);
                    announced += 1;
                    break;
                }
                Err(e) => {
                    warn!(
                        "Announcement to {} failed (attempt {}/{}): {}",
                        engine_url, attempt, attempts, e
                    );
                    if attempt == attempts {
                        warn!(
                            "Aborting service announcement to {} after {} retries",
                            engine_url, attempts
                        );
                    } else {
                        tokio::time::sleep(settings.retry_delay).await;
                    }
                }
            }
        }
    }

    announced
}

/// Tells every engine the service is going away. Best effort, single attempt.
pub async fn withdraw_from_engines(
    client: &dyn EngineClient,
    description: &ServiceDescription,
    engine_urls: &[String],
) {
    let unavailable = description.with_status(ServiceStatus::Unavailable);
    for engine_url in engine_urls {
        match client.announce(engine_url, &unavailable).await {
            Ok(()) => info!("Service withdrawn from engine {}", engine_url),
            Err(e) => warn!("Failed to withdraw service from {}: {}", engine_url, e),
        }
    }
}
