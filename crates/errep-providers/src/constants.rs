//! Adapter Constants
//!
//! Defaults specific to adapter implementations. Infrastructure-level
//! defaults live in errep-infrastructure.

// ============================================================================
// REPOSITORY CONSTANTS
// ============================================================================

/// Extension of stored report documents
pub const REPORT_FILE_EXTENSION: &str = "json";

/// Extension of in-flight report documents awaiting rename
pub const REPORT_TEMP_FILE_EXTENSION: &str = "tmp";

// ============================================================================
// EVENT PUBLISHER CONSTANTS
// ============================================================================

/// Default broadcast channel capacity
pub const EVENT_CHANNEL_DEFAULT_CAPACITY: usize = 1024;

/// Default NATS server URL
pub const NATS_DEFAULT_URL: &str = "nats://127.0.0.1:4222";

/// Default NATS subject for `ErrorCreated` events
pub const NATS_DEFAULT_SUBJECT: &str = "errep.error_created";

/// Header carrying the correlation identifier on NATS messages
pub const NATS_CORRELATION_HEADER: &str = "Errep-Correlation-Id";
