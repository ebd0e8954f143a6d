//! Service entity representing a purchasable offering.

use serde::{Deserialize, Serialize};

/// A question/answer pair displayed on a service page.
///
/// Modeled as an explicit record type rather than a free-form map so field
/// access is checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A purchasable service offering.
///
/// Created only by the seeder and immutable thereafter; there is no update
/// or delete endpoint. `slug` is the public lookup key, distinct from `id`.
///
/// Field names are renamed to match the persisted document and wire format
/// (`shortDescription`, `basePriceInINR`, ...). The struct carries no `_id`
/// field, so MongoDB's internal identifier is stripped on deserialization
/// and never reaches API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub features: Vec<String>,
    /// Whole-rupee price, non-negative.
    #[serde(rename = "basePriceInINR")]
    pub base_price_in_inr: i64,
    /// Free-text turnaround estimate, e.g. "7-10 business days".
    pub duration: String,
    pub category: String,
    /// Symbolic name resolved to an icon client-side.
    pub icon: String,
    pub faqs: Vec<Faq>,
}
