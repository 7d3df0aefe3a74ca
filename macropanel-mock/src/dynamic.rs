use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use macropanel_core::connector::{PanelConnector, QuoteProvider, SeriesProvider};
use macropanel_core::{Observation, PanelError};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(PanelError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    series_rules: HashMap<String, MockBehavior<Vec<Observation>>>,
    bulk_rule: Option<MockBehavior<BTreeMap<String, Vec<Observation>>>>,
    series_requests: Vec<String>,
    bulk_requests: Vec<Vec<String>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch_series` calls for a specific id.
    pub async fn set_series_behavior(
        &self,
        id: impl Into<String>,
        behavior: MockBehavior<Vec<Observation>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.series_rules.insert(id.into(), behavior);
    }

    /// Set the behavior for every `fetch_bulk_quotes` call.
    pub async fn set_bulk_behavior(
        &self,
        behavior: MockBehavior<BTreeMap<String, Vec<Observation>>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.bulk_rule = Some(behavior);
    }

    /// Ids requested through `fetch_series`, in call order.
    pub async fn series_requests(&self) -> Vec<String> {
        self.state.lock().await.series_requests.clone()
    }

    /// Ticker lists requested through `fetch_bulk_quotes`, in call order.
    pub async fn bulk_requests(&self) -> Vec<Vec<String>> {
        self.state.lock().await.bulk_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.series_rules.clear();
        guard.bulk_rule = None;
        guard.series_requests.clear();
        guard.bulk_requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Unconfigured series ids answer `NotFound`; bulk quotes answer
/// `Unsupported` until a behavior is set.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn PanelConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn PanelConnector>, controller)
    }
}

async fn resolve<T>(behavior: Option<MockBehavior<T>>, unset: PanelError) -> Result<T, PanelError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(unset),
    }
}

#[async_trait]
impl PanelConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl SeriesProvider for DynamicMockConnector {
    async fn fetch_series(
        &self,
        id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<Observation>, PanelError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.series_requests.push(id.to_string());
            guard.series_rules.get(id).cloned()
        };
        resolve(behavior, PanelError::not_found(format!("series {id}"))).await
    }
}

#[async_trait]
impl QuoteProvider for DynamicMockConnector {
    async fn fetch_bulk_quotes(
        &self,
        ids: &[&str],
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<BTreeMap<String, Vec<Observation>>, PanelError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .bulk_requests
                .push(ids.iter().map(|s| (*s).to_string()).collect());
            guard.bulk_rule.clone()
        };
        resolve(behavior, PanelError::unsupported("bulk-quotes")).await
    }
}
