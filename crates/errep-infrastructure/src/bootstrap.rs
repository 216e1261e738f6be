//! Composition root
//!
//! Turns an [`AppConfig`] into a ready [`AppContext`]: the adapter registry
//! is discovered, each port's adapter is resolved from its configuration key
//! and the submission use case is wired over them.
//!
//! ```text
//! AppConfig → AdapterRegistry (linkme) → Arc<dyn Port> → SubmitErrorReportUseCase
//! ```
//!
//! Resolution is fail-fast: an unknown key or a rejected adapter
//! configuration stops start-up with a configuration error, before any
//! submission is accepted.

use crate::config::AppConfig;
use errep_application::ports::registry::{AdapterRegistry, PortKind};
use errep_application::{
    CategorizationService, PublishPolicy, SubmitErrorReportUseCase, ValidationLimits,
    ValidationService,
};
use errep_domain::error::{Error, Result};
use errep_domain::ports::{ErrorEventPublisher, ErrorReportRepository};
use errep_domain::{ErrorReport, ReportId, SubmissionRequest, SubmissionResponse};
use std::sync::Arc;
use tracing::info;

/// Application context holding the selected adapters and the use case
pub struct AppContext {
    config: Arc<AppConfig>,
    registry: AdapterRegistry,
    repository: Arc<dyn ErrorReportRepository>,
    publisher: Arc<dyn ErrorEventPublisher>,
    use_case: SubmitErrorReportUseCase,
}

impl AppContext {
    /// Build the context from every adapter linked into the binary
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a selected adapter is unknown or
    /// rejects its configuration.
    pub fn init(config: AppConfig) -> Result<Self> {
        Self::with_registry(config, AdapterRegistry::discover()?)
    }

    /// Build the context from an explicit registry
    ///
    /// # Errors
    ///
    /// Same as [`AppContext::init`].
    pub fn with_registry(config: AppConfig, registry: AdapterRegistry) -> Result<Self> {
        info!("Initializing application context");

        let repository_config = config.adapters.repository.to_adapter_config();
        let publisher_config = config.adapters.event_publisher.to_adapter_config();

        // Check both keys up front so a typo in either is reported before any adapter is built
        registry.ensure_registered(PortKind::Repository, &repository_config.provider)?;
        registry.ensure_registered(PortKind::EventPublisher, &publisher_config.provider)?;

        let repository = registry.resolve_repository(&repository_config)?;
        let publisher = registry.resolve_event_publisher(&publisher_config)?;
        info!(
            "Resolved adapters: repository={}, event_publisher={}",
            repository.provider_name(),
            publisher.provider_name()
        );

        let validation =
            ValidationService::with_default_rules(ValidationLimits::from(config.validation));
        let publish_policy = PublishPolicy::from(config.submission);
        let use_case = SubmitErrorReportUseCase::new(
            validation,
            CategorizationService::new(),
            Arc::clone(&repository),
            Arc::clone(&publisher),
        )
        .with_publish_policy(publish_policy);

        Ok(Self {
            config: Arc::new(config),
            registry,
            repository,
            publisher,
            use_case,
        })
    }

    /// Active configuration
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Registry the adapters were resolved from
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Selected repository adapter
    pub fn repository(&self) -> Arc<dyn ErrorReportRepository> {
        Arc::clone(&self.repository)
    }

    /// Selected event publisher adapter
    pub fn publisher(&self) -> Arc<dyn ErrorEventPublisher> {
        Arc::clone(&self.publisher)
    }

    /// Submission use case wired over the selected adapters
    pub fn use_case(&self) -> &SubmitErrorReportUseCase {
        &self.use_case
    }

    /// Submit a report and map the outcome to the caller-facing response
    pub async fn submit(&self, request: SubmissionRequest) -> SubmissionResponse {
        SubmissionResponse::from_result(self.use_case.execute(request).await)
    }

    /// Look up a stored report
    ///
    /// # Errors
    ///
    /// Returns the repository error if the lookup itself fails.
    pub async fn find_report(&self, id: &str) -> Result<Option<ErrorReport>> {
        if id.trim().is_empty() {
            return Err(Error::validation(vec!["report id is required".to_string()]));
        }
        self.repository.get_by_id(&ReportId::new(id)).await
    }

    /// Stored reports for a job, oldest first
    ///
    /// # Errors
    ///
    /// Returns the repository error if the listing fails.
    pub async fn reports_for_job(&self, job_id: &str) -> Result<Vec<ErrorReport>> {
        self.repository.list_by_job(job_id).await
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("repository", &self.repository.provider_name())
            .field("event_publisher", &self.publisher.provider_name())
            .field("publish_policy", self.use_case.publish_policy())
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from configuration
///
/// # Errors
///
/// See [`AppContext::init`].
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    AppContext::init(config)
}
