//! Per-operation dispatch policies for the legacy API
//!
//! The legacy API classifies uniformly across ~25 named operations, but
//! a handful deviate from the standard contract: three may legitimately
//! omit the `Meta` envelope, one returns raw XML, and the contact
//! operations live on a different endpoint. Those deviations are policy
//! records in a table rather than name comparisons scattered through
//! the dispatcher.

use crate::error::AppError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Target API product of a legacy operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    /// The Research Suite control panel API (`RS`)
    ResearchSuite,
    /// The Contacts panel-management API (`TA`)
    Contacts,
}

impl Product {
    /// Returns the platform's short selector for this product
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::ResearchSuite => "RS",
            Product::Contacts => "TA",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Product {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RS" => Ok(Product::ResearchSuite),
            "TA" => Ok(Product::Contacts),
            other => Err(AppError::UnsupportedProduct(other.to_string())),
        }
    }
}

/// Body format an operation is expected to answer with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Standard JSON body
    Json,
    /// JSON body whose object key order carries meaning downstream.
    /// Decodes identically to [`ResponseKind::Json`] because the crate
    /// enables order-preserving JSON maps globally; the variant records
    /// which operations depend on that guarantee.
    OrderedJson,
    /// Non-JSON document; the `Format` parameter is omitted and a body
    /// that fails JSON decoding is surfaced as raw text
    Xml,
}

/// Dispatch policy for one named legacy operation
#[derive(Debug, Clone, Copy)]
pub struct OperationPolicy {
    /// Which endpoint the operation is served from
    pub product: Product,
    /// Whether a missing `Meta` envelope is a contract violation.
    /// A present envelope is always validated, even for exempt
    /// operations.
    pub expects_envelope: bool,
    /// Expected body format
    pub response_kind: ResponseKind,
}

/// Policy applied to operations without a table entry
pub const DEFAULT_POLICY: OperationPolicy = OperationPolicy {
    product: Product::ResearchSuite,
    expects_envelope: true,
    response_kind: ResponseKind::Json,
};

static OPERATION_POLICIES: Lazy<HashMap<&'static str, OperationPolicy>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        "getLegacyResponseData",
        OperationPolicy {
            product: Product::ResearchSuite,
            expects_envelope: false,
            response_kind: ResponseKind::OrderedJson,
        },
    );
    table.insert(
        "getPanel",
        OperationPolicy {
            expects_envelope: false,
            ..DEFAULT_POLICY
        },
    );
    table.insert(
        "getSurvey",
        OperationPolicy {
            response_kind: ResponseKind::Xml,
            ..DEFAULT_POLICY
        },
    );
    table.insert(
        "getListContacts",
        OperationPolicy {
            product: Product::Contacts,
            expects_envelope: false,
            response_kind: ResponseKind::Json,
        },
    );
    table.insert(
        "importContacts",
        OperationPolicy {
            product: Product::Contacts,
            ..DEFAULT_POLICY
        },
    );
    table.insert(
        "removeContact",
        OperationPolicy {
            product: Product::Contacts,
            ..DEFAULT_POLICY
        },
    );
    table
});

/// Looks up the dispatch policy for an operation name
///
/// Operations not present in the table get [`DEFAULT_POLICY`]: Research
/// Suite endpoint, envelope required, standard JSON body.
pub fn operation_policy(operation: &str) -> OperationPolicy {
    OPERATION_POLICIES
        .get(operation)
        .copied()
        .unwrap_or(DEFAULT_POLICY)
}
