//! Event subscription operations

use crate::client::Qualtrics;
use crate::error::AppError;
use crate::model::request::{LegacyRequest, flag};
use serde_json::Value;

/// A third-party subscription to platform events
///
/// Topics may name a single event (`threesixty.created`) or use the
/// star notation for a whole family (`threesixty.*`).
#[derive(Debug, Clone, Default)]
pub struct Subscription {
    /// Name of the subscription
    pub name: String,
    /// URL the platform publishes events to
    pub publication_url: String,
    /// Topic pattern to subscribe to
    pub topics: String,
    /// Encrypt published events
    pub encrypt: Option<bool>,
    /// Shared key for encrypted publication
    pub shared_key: Option<String>,
    /// Brand to subscribe under
    pub brand_id: Option<String>,
}

impl Qualtrics {
    /// Returns the status of all subscriptions
    pub fn get_all_subscriptions(&self) -> Result<Value, AppError> {
        self.legacy_request(LegacyRequest::new("getAllSubscriptions"))?
            .into_json()
    }

    /// Subscribes to platform events
    pub fn subscribe(&self, subscription: &Subscription) -> Result<Value, AppError> {
        let request = LegacyRequest::new("subscribe")
            .param("Name", &subscription.name)
            .param("PublicationURL", &subscription.publication_url)
            .param("Topics", &subscription.topics)
            .opt_param("Encrypt", subscription.encrypt.map(flag))
            .opt_param("SharedKey", subscription.shared_key.as_deref())
            .opt_param("BrandID", subscription.brand_id.as_deref());
        self.legacy_request(request)?.into_json()
    }
}
