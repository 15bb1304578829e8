//! Debounced product search.
//!
//! The search box runs as a background task driving the state machine
//! `Idle -> Typing -> Searching -> Results`. Keystrokes arrive on a
//! channel; the current phase is published on a watch channel for the view
//! to render. Responses are applied in query-dispatch order, never arrival
//! order: every keystroke bumps a generation counter and a response tagged
//! with a stale generation is discarded.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};

use crate::error::CatalogError;
use crate::models::Product;
use crate::provider::CatalogProvider;

/// Queries below this many characters are never dispatched.
pub const MIN_QUERY_CHARS: usize = 2;

/// How long the input must stay unchanged before a query goes out.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Trim the raw input and enforce the length threshold. Counts characters,
/// not bytes: two-character Turkish queries like "gü" must pass.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Search box state as the view sees it.
///
/// `Searching`, `Idle` (no results yet) and `Results(vec![])` (a search
/// that came back empty) are three distinguishable states. A failed search
/// also surfaces as `Results(vec![])`, indistinguishable from a genuine
/// zero-result search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Typing,
    Searching,
    Results(Vec<Product>),
}

/// Handle to a spawned search box task.
pub struct SearchBox {
    input_tx: mpsc::UnboundedSender<String>,
    phase_rx: watch::Receiver<SearchPhase>,
}

impl SearchBox {
    pub fn spawn<P>(provider: Arc<P>) -> Self
    where
        P: CatalogProvider + 'static,
    {
        Self::with_quiescence(provider, DEFAULT_QUIESCENCE)
    }

    pub fn with_quiescence<P>(provider: Arc<P>, quiescence: Duration) -> Self
    where
        P: CatalogProvider + 'static,
    {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (phase_tx, phase_rx) = watch::channel(SearchPhase::Idle);
        tokio::spawn(run(provider, quiescence, input_rx, phase_tx));
        Self { input_tx, phase_rx }
    }

    /// Feed the full current input value, once per keystroke.
    pub fn type_input(&self, text: impl Into<String>) {
        // Send only fails once the task is gone, at which point there is
        // nobody left to render for.
        let _ = self.input_tx.send(text.into());
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase_rx.borrow().clone()
    }

    /// Wait for the next phase change. `None` once the task has stopped.
    pub async fn changed(&mut self) -> Option<SearchPhase> {
        self.phase_rx.changed().await.ok()?;
        Some(self.phase_rx.borrow_and_update().clone())
    }
}

async fn run<P>(
    provider: Arc<P>,
    quiescence: Duration,
    mut input_rx: mpsc::UnboundedReceiver<String>,
    phase_tx: watch::Sender<SearchPhase>,
) where
    P: CatalogProvider + 'static,
{
    type Outcome = (u64, Result<Vec<Product>, CatalogError>);
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<Outcome>();

    // Bumped on every keystroke; a response only applies if its dispatch
    // generation is still current.
    let mut generation: u64 = 0;
    let mut pending: Option<(String, Instant)> = None;

    loop {
        let deadline = pending.as_ref().map(|(_, at)| *at);
        let quiesced = async move {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            input = input_rx.recv() => {
                let Some(text) = input else { break };
                generation = generation.wrapping_add(1);
                match normalize_query(&text) {
                    Some(query) => {
                        pending = Some((query, Instant::now() + quiescence));
                        let _ = phase_tx.send(SearchPhase::Typing);
                    }
                    None => {
                        // Below the threshold: drop any pending dispatch and
                        // clear the result list right away.
                        pending = None;
                        let phase = if text.trim().is_empty() {
                            SearchPhase::Idle
                        } else {
                            SearchPhase::Typing
                        };
                        let _ = phase_tx.send(phase);
                    }
                }
            }
            () = quiesced => {
                if let Some((query, _)) = pending.take() {
                    debug!("dispatching search for {query:?} (generation {generation})");
                    let _ = phase_tx.send(SearchPhase::Searching);
                    let provider = Arc::clone(&provider);
                    let result_tx = result_tx.clone();
                    let dispatched = generation;
                    tokio::spawn(async move {
                        let outcome = provider.search_products(&query).await;
                        let _ = result_tx.send((dispatched, outcome));
                    });
                }
            }
            Some((dispatched, outcome)) = result_rx.recv() => {
                if dispatched != generation {
                    debug!("discarding stale search response (generation {dispatched})");
                    continue;
                }
                let results = outcome.unwrap_or_else(|err| {
                    // Failures clear the list; the user re-types to retry.
                    warn!("search failed: {err}");
                    Vec::new()
                });
                let _ = phase_tx.send(SearchPhase::Results(results));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use tokio::time::sleep;

    use super::*;
    use crate::models::{
        Banner, Category, LocationSuggestion, PageResult, ProductListQuery, SeedSummary,
    };

    const QUIESCENCE: Duration = Duration::from_millis(100);

    fn hit(title: &str) -> Product {
        Product {
            id: title.to_string(),
            title: title.to_string(),
            price: 100,
            category: "gul".into(),
            image: String::new(),
            badge: None,
            description: None,
            is_bestseller: false,
            // Fixed so scripted hits compare equal across calls.
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Provider that records queries and answers each one after a scripted
    /// delay with a single product named after the query.
    struct ScriptedProvider {
        calls: Mutex<Vec<String>>,
        delays: HashMap<String, Duration>,
        fail: bool,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self { calls: Mutex::new(Vec::new()), delays: HashMap::new(), fail: false }
        }

        fn delay(mut self, query: &str, delay: Duration) -> Self {
            self.delays.insert(query.to_string(), delay);
            self
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CatalogProvider for ScriptedProvider {
        async fn list_products(&self, _: &ProductListQuery) -> Result<PageResult, CatalogError> {
            Err(CatalogError::Provider("not scripted".into()))
        }

        async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
            Err(CatalogError::ProductNotFound(id.to_string()))
        }

        async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
            Ok(Vec::new())
        }

        async fn list_banners(&self) -> Result<Vec<Banner>, CatalogError> {
            Ok(Vec::new())
        }

        async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
            self.calls.lock().unwrap().push(query.to_string());
            if let Some(delay) = self.delays.get(query) {
                sleep(*delay).await;
            }
            if self.fail {
                return Err(CatalogError::Provider("search backend down".into()));
            }
            Ok(vec![hit(query)])
        }

        async fn search_locations(
            &self,
            _: &str,
        ) -> Result<Vec<LocationSuggestion>, CatalogError> {
            Ok(Vec::new())
        }

        async fn seed(&self) -> Result<SeedSummary, CatalogError> {
            Err(CatalogError::Provider("not scripted".into()))
        }
    }

    #[test]
    fn normalizer_trims_and_enforces_min_length() {
        assert_eq!(normalize_query("  gül  "), Some("gül".to_string()));
        assert_eq!(normalize_query("gü"), Some("gü".to_string()));
        assert_eq!(normalize_query("a"), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("ü"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn single_character_input_never_dispatches() {
        let provider = Arc::new(ScriptedProvider::new());
        let search = SearchBox::with_quiescence(provider.clone(), QUIESCENCE);

        search.type_input("a");
        sleep(QUIESCENCE * 4).await;

        assert_eq!(provider.call_count(), 0);
        assert_eq!(search.phase(), SearchPhase::Typing);
    }

    #[tokio::test(start_paused = true)]
    async fn stable_input_dispatches_exactly_once_after_quiescence() {
        let provider = Arc::new(ScriptedProvider::new());
        let search = SearchBox::with_quiescence(provider.clone(), QUIESCENCE);

        search.type_input("gül");
        sleep(QUIESCENCE / 2).await;
        assert_eq!(provider.call_count(), 0, "dispatched before quiescence");
        assert_eq!(search.phase(), SearchPhase::Typing);

        sleep(QUIESCENCE * 4).await;
        assert_eq!(provider.call_count(), 1);
        assert_eq!(search.phase(), SearchPhase::Results(vec![hit("gül")]));
    }

    #[tokio::test(start_paused = true)]
    async fn each_keystroke_restarts_the_quiescence_clock() {
        let provider = Arc::new(ScriptedProvider::new());
        let search = SearchBox::with_quiescence(provider.clone(), QUIESCENCE);

        for text in ["gü", "gül", "gül ", "gül b"] {
            search.type_input(text);
            sleep(QUIESCENCE / 2).await;
        }
        assert_eq!(provider.call_count(), 0);

        sleep(QUIESCENCE * 2).await;
        assert_eq!(provider.call_count(), 1);
        assert_eq!(*provider.calls.lock().unwrap(), vec!["gül b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_for_superseded_query_is_discarded() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .delay("ro", Duration::from_millis(500))
                .delay("rose", Duration::from_millis(50)),
        );
        let search = SearchBox::with_quiescence(provider.clone(), QUIESCENCE);

        search.type_input("ro");
        sleep(QUIESCENCE + Duration::from_millis(10)).await;
        assert_eq!(search.phase(), SearchPhase::Searching);

        // Supersede the in-flight "ro" request.
        search.type_input("rose");
        sleep(QUIESCENCE * 3).await;
        assert_eq!(search.phase(), SearchPhase::Results(vec![hit("rose")]));

        // Let the slow "ro" response arrive; it must not overwrite "rose".
        sleep(Duration::from_millis(600)).await;
        assert_eq!(search.phase(), SearchPhase::Results(vec![hit("rose")]));
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_input_drops_results_immediately() {
        let provider = Arc::new(ScriptedProvider::new());
        let search = SearchBox::with_quiescence(provider.clone(), QUIESCENCE);

        search.type_input("rose");
        sleep(QUIESCENCE * 2).await;
        assert!(matches!(search.phase(), SearchPhase::Results(_)));

        search.type_input("");
        sleep(Duration::from_millis(1)).await;
        assert_eq!(search.phase(), SearchPhase::Idle);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_shows_the_empty_state() {
        let mut scripted = ScriptedProvider::new();
        scripted.fail = true;
        let provider = Arc::new(scripted);
        let search = SearchBox::with_quiescence(provider.clone(), QUIESCENCE);

        search.type_input("gül");
        sleep(QUIESCENCE * 2).await;
        assert_eq!(search.phase(), SearchPhase::Results(Vec::new()));
    }
}
