//! Serde helpers for the request models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serializes an optional timestamp as RFC 3339 with whole seconds, the
/// representation the export API accepts for date filters
pub fn rfc3339_option<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => {
            serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        None => serializer.serialize_none(),
    }
}
