use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw listing card as rendered by the browser, before extraction.
///
/// Holds the card's HTML fragment; the extractor looks up sub-elements
/// by OLX's stable data attributes.
#[derive(Debug, Clone)]
pub struct RawCard {
    pub html: String,
}

impl RawCard {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// One extracted land-plot listing.
///
/// `link` is the identity key: a listing with a given link is reported
/// at most once per process lifetime. Numeric fields use `None` as the
/// "no data" sentinel when the source text is absent or unparsable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price_text: String,
    pub price_value: Option<i64>,
    pub location_text: String,
    pub area_value: Option<i64>,
    /// Price per square meter, rounded to 2 decimals. `None` when the
    /// price or area is missing or the area is zero.
    pub price_per_sqm: Option<f64>,
    pub link: String,
    pub scraped_at: DateTime<Utc>,
}
