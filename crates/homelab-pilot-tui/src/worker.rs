//! Background tasks
//!
//! Network work runs on tokio tasks and reports back to the event loop as
//! controller events over an unbounded channel.

use homelab_pilot_core::{DetailSnapshot, Event, HealthScheduler, ServiceRegistry, format_client_error};
use homelab_rs::{HomelabClient, ServiceDescriptor};
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Run sweeps forever on the scheduler's timing
///
/// The task stops on its own once the receiving side is dropped.
pub fn spawn_health_checks(
    client: HomelabClient,
    registry: ServiceRegistry,
    mut scheduler: HealthScheduler,
    tx: UnboundedSender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut next = scheduler.start(Instant::now());
        loop {
            tokio::time::sleep_until(tokio::time::Instant::from_std(next)).await;
            if !scheduler.begin_sweep(Instant::now()) {
                tracing::debug!("Woke before the sweep was due, waiting again");
                continue;
            }

            let results = client.sweep(registry.services()).await;
            let healthy = results.values().filter(|o| o.is_reachable()).count();
            tracing::debug!("Sweep finished: {}/{} healthy", healthy, results.len());

            if tx.send(Event::Sweep(results)).is_err() {
                tracing::debug!("Event loop gone, stopping health checks");
                break;
            }
            next = scheduler.complete_sweep(Instant::now());
        }
    })
}

/// Fetch one service's detail and report the outcome
pub fn spawn_detail_fetch(
    client: HomelabClient,
    service: ServiceDescriptor,
    tx: UnboundedSender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let service_name = service.name.clone();
        let event = match client.fetch_detail(&service).await {
            Ok(payload) => {
                Event::DetailFetched(service.name, DetailSnapshot::new(payload, Instant::now()))
            }
            Err(e) => {
                tracing::warn!("Failed to fetch detail for {}: {}", service.name, e);
                Event::DetailFailed(service.name, format_client_error(&e))
            }
        };
        if tx.send(event).is_err() {
            tracing::debug!("Event loop gone, dropping detail for {}", service_name);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelab_rs::{DetailPayload, ServiceKind};
    use httpmock::{Method::GET, MockServer};
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn client() -> HomelabClient {
        HomelabClient::new(Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn health_checks_emit_sweeps() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200);
        });

        let registry =
            ServiceRegistry::new(vec![ServiceDescriptor::new("Jellyfin", server.base_url())])
                .unwrap();
        let scheduler = HealthScheduler::new(Duration::from_secs(60));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let handle = spawn_health_checks(client(), registry, scheduler, tx);
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        handle.abort();

        match event {
            Event::Sweep(results) => assert!(results["Jellyfin"].is_reachable()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn detail_fetch_reports_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v3/series");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"title": "Severance"}]"#);
        });

        let service = ServiceDescriptor::new("Sonarr", server.base_url())
            .with_kind(ServiceKind::Sonarr)
            .with_header_auth("X-Api-Key", "abc");
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_detail_fetch(client(), service, tx).await.unwrap();

        match rx.recv().await {
            Some(Event::DetailFetched(name, snapshot)) => {
                assert_eq!(name, "Sonarr");
                assert!(matches!(snapshot.payload, DetailPayload::SonarrSeries(ref s) if s.len() == 1));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn detail_fetch_reports_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v3/series");
            then.status(401);
        });

        let service =
            ServiceDescriptor::new("Sonarr", server.base_url()).with_kind(ServiceKind::Sonarr);
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_detail_fetch(client(), service, tx).await.unwrap();

        match rx.recv().await {
            Some(Event::DetailFailed(name, message)) => {
                assert_eq!(name, "Sonarr");
                assert!(message.contains("Authentication failed"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejected_pihole_token_reports_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/admin/api.php");
            then.status(200).body("[]");
        });

        let service =
            ServiceDescriptor::new("Pi-hole", server.base_url()).with_kind(ServiceKind::PiHole);
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_detail_fetch(client(), service, tx).await.unwrap();

        match rx.recv().await {
            Some(Event::DetailFailed(name, message)) => {
                assert_eq!(name, "Pi-hole");
                assert!(message.contains("API token"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn detail_fetch_survives_closed_channel() {
        let service = ServiceDescriptor::new("NAS", "http://127.0.0.1:9/");
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        spawn_detail_fetch(client(), service, tx).await.unwrap();
    }
}
