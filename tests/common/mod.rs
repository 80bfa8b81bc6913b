#![allow(dead_code)]

use async_trait::async_trait;
use recipe_calories::analysis::RawResponse;
use recipe_calories::{AnalysisClient, ControllerConfig, Transport};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

struct Pending {
    endpoint_url: String,
    recipe_url: String,
    reply: oneshot::Sender<Result<RawResponse, String>>,
}

/// Transport whose requests stay in flight until the test answers them,
/// so completion order is fully under test control.
#[derive(Default)]
pub struct GatedTransport {
    pending: Mutex<Vec<Pending>>,
    calls: AtomicUsize,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Yield until at least `n` requests are waiting for an answer.
    pub async fn wait_for_requests(&self, n: usize) {
        while self.pending() < n {
            tokio::task::yield_now().await;
        }
    }

    /// Answer the oldest in-flight request whose endpoint ends with `path`
    /// and that was sent for `recipe_url`.
    pub fn respond(&self, path: &str, recipe_url: &str, reply: Result<RawResponse, String>) {
        let mut pending = self.pending.lock().unwrap();
        let index = pending
            .iter()
            .position(|p| p.endpoint_url.ends_with(path) && p.recipe_url == recipe_url)
            .unwrap_or_else(|| panic!("no pending request for {} {}", path, recipe_url));
        let request = pending.remove(index);
        let _ = request.reply.send(reply);
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn post_json(
        &self,
        endpoint_url: &str,
        recipe_url: &str,
    ) -> Result<RawResponse, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(Pending {
            endpoint_url: endpoint_url.to_string(),
            recipe_url: recipe_url.to_string(),
            reply: tx,
        });
        rx.await
            .unwrap_or_else(|_| Err("request abandoned".to_string()))
    }
}

pub fn gated_client(transport: Arc<GatedTransport>) -> AnalysisClient {
    AnalysisClient::with_transport(
        transport,
        ControllerConfig::with_base_url("http://backend.test"),
    )
}

pub const TACOS: &str =
    r#"{"title": "Tacos", "ingredients": ["beef"], "instructions": ["Cook beef"]}"#;

pub const EGGS: &str = r#"{
    "total_kcal": 1000,
    "servings": 4,
    "per_serving": 250,
    "ingredients": [
        {"raw": "2 eggs", "grams": 100, "kcal_per_100g": 155, "total_kcal": 155, "status": "ok"}
    ]
}"#;
