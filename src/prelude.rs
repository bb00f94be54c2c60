//! # Qualtrics Client Prelude
//!
//! This module provides a convenient way to import the most commonly
//! used types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use qualtrics_client::prelude::*;
//!
//! let config = Config::with_credentials("user#brand", "token");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Qualtrics API client
pub use crate::config::{Config, Credentials, ExportApiConfig, LegacyApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// THE CLIENT
// ============================================================================

/// The Qualtrics API client
pub use crate::client::Qualtrics;

// ============================================================================
// LEGACY API MODELS
// ============================================================================

/// Request builder and parameter types for the legacy API
pub use crate::model::request::{EmbeddedData, FileAttachment, FormatParam, LegacyRequest};

/// Classified legacy responses and envelope types
pub use crate::model::response::{LegacyMeta, LegacyResponse};

/// Per-operation dispatch policies
pub use crate::model::operation::{
    DEFAULT_POLICY, OperationPolicy, Product, ResponseKind, operation_policy,
};

// ============================================================================
// EXPORT API MODELS
// ============================================================================

/// Export job types
pub use crate::model::export::{ExportFormat, ExportProgress, ResponseExportRequest};

// ============================================================================
// OPERATION OPTIONS
// ============================================================================

/// Panel and recipient types
pub use crate::application::panels::{ImportPanelOptions, PanelExportOptions, Recipient};

/// Contact list types
pub use crate::application::contacts::{ListContactsOptions, TruncateReport};

/// Response retrieval and import options
pub use crate::application::responses::{ImportResponsesOptions, ResponseDataOptions};

/// Survey import options
pub use crate::application::surveys::ImportSurveyOptions;

/// Distribution and survey link types
pub use crate::application::distributions::{
    IndividualDistribution, PanelDistribution, ReminderDistribution, SurveyLinkRequest,
};

/// Event subscription types
pub use crate::application::subscriptions::Subscription;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// CSV encoding utilities
pub use crate::utils::csv::{column_index, header_columns, rows_to_csv, rows_to_csv_with_header};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value};
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, Utc};
