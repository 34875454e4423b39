use crate::models::{Listing, RawCard};
use crate::normalize::{parse_area, parse_price, price_per_sqm};
use chrono::Utc;
use scraper::{Html, Selector};
use thiserror::Error;

/// A listing card that cannot be turned into a usable `Listing`.
///
/// Only structurally required pieces fail a card; numeric fields that
/// fail to parse degrade to `None` on the listing instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("listing card has no {0}")]
    MissingField(&'static str),
}

/// Extract one `Listing` from a rendered OLX card.
///
/// Required: a titled link, a price text, and a location text. The area
/// is optional; when it is absent or unparsable, both `area_value` and
/// `price_per_sqm` stay at "no data".
pub fn extract_listing(card: &RawCard) -> Result<Listing, ExtractError> {
    let fragment = Html::parse_fragment(&card.html);

    let link_sel = Selector::parse("a[href]").unwrap();
    let price_sel = Selector::parse("p[data-testid='ad-price']").unwrap();
    let location_sel = Selector::parse("p[data-testid='location-date']").unwrap();
    let area_sel = Selector::parse("span[data-testid='area']").unwrap();

    let anchor = fragment
        .select(&link_sel)
        .next()
        .ok_or(ExtractError::MissingField("link"))?;
    let link = anchor
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or(ExtractError::MissingField("link"))?
        .to_string();

    let title = anchor.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        return Err(ExtractError::MissingField("title"));
    }

    let price_text = text_of(&fragment, &price_sel).ok_or(ExtractError::MissingField("price"))?;
    let location_text =
        text_of(&fragment, &location_sel).ok_or(ExtractError::MissingField("location"))?;

    let price_value = parse_price(&price_text);
    let area_value = text_of(&fragment, &area_sel).and_then(|area| parse_area(&area));

    Ok(Listing {
        title,
        price_per_sqm: price_per_sqm(price_value, area_value),
        price_text,
        price_value,
        location_text,
        area_value,
        link,
        scraped_at: Utc::now(),
    })
}

fn text_of(fragment: &Html, selector: &Selector) -> Option<String> {
    fragment
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}
