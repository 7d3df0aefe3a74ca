use macropanel_core::{Capability, PanelError};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// On timeout it returns `PanelError::RequestTimeout` labelled with `capability`.
///
/// # Errors
/// Returns `RequestTimeout` when the deadline elapses before every task completes.
pub async fn join_with_deadline<I, F, T>(
    capability: Capability,
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, PanelError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks))
        .await
        .map_err(|_| PanelError::request_timeout(capability.as_str()))
}

/// Provider failures gathered while one request walks the connector list.
///
/// Errors a provider did not attribute are tagged with its name, and nested
/// aggregates from composite providers are flattened, so the final
/// `AllProvidersFailed` lists one entry per underlying failure.
#[derive(Debug)]
pub struct Attempts {
    capability: Capability,
    tried: usize,
    errors: Vec<PanelError>,
}

impl Attempts {
    /// Start an empty record for `capability`.
    #[must_use]
    pub const fn new(capability: Capability) -> Self {
        Self {
            capability,
            tried: 0,
            errors: Vec::new(),
        }
    }

    /// Record the failure of one provider call.
    pub fn record(&mut self, connector: &str, err: PanelError) {
        self.tried += 1;
        self.errors
            .extend(crate::core::tag_err(connector, err).flatten());
    }

    /// True when providers were asked and every one of them lacked the id.
    #[must_use]
    pub fn all_not_found(&self) -> bool {
        self.tried > 0
            && self
                .errors
                .iter()
                .all(|e| matches!(e, PanelError::NotFound { .. }))
    }

    /// The routing error once every provider has been tried.
    ///
    /// No provider serving the capability gives `Unsupported`, all of them
    /// timing out gives `AllProvidersTimedOut`, anything else
    /// `AllProvidersFailed`.
    #[must_use]
    pub fn into_error(self) -> PanelError {
        if self.tried == 0 {
            return PanelError::unsupported(self.capability.as_str());
        }
        if !self.errors.is_empty()
            && self
                .errors
                .iter()
                .all(|e| matches!(e, PanelError::ProviderTimeout { .. }))
        {
            return PanelError::AllProvidersTimedOut {
                capability: self.capability.to_string(),
            };
        }
        PanelError::AllProvidersFailed(self.errors)
    }
}
