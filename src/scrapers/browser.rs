use crate::models::RawCard;
use crate::scrapers::traits::FragmentProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

const OLX_BASE_URL: &str = "https://www.olx.pl/nieruchomosci/dzialki/sprzedaz";
const OLX_FILTERS: &str = "?search%5Bfilter_enum_type%5D%5B0%5D=dzialki-budowlane\
&search%5Bfilter_float_m%3Afrom%5D=360\
&search%5Bfilter_float_price%3Afrom%5D=150000\
&search%5Bfilter_float_price%3Ato%5D=600000";

/// Marker element that tells us the listing grid has rendered.
const CARD_SELECTOR: &str = "div[data-cy='l-card']";

/// Build the OLX search URL for building plots in one city: fixed
/// category and price/area filters, city embedded in the path.
pub fn build_search_url(city: &str) -> String {
    format!("{}/{}/{}", OLX_BASE_URL, city.to_lowercase(), OLX_FILTERS)
}

/// Rendered-page provider for OLX using headless Chrome.
///
/// OLX builds its listing grid client-side, so a plain HTTP fetch gets
/// an empty shell; we need the browser to run the page first.
pub struct OlxBrowserProvider {
    browser: Browser,
    wait: Duration,
}

impl OlxBrowserProvider {
    /// Launch headless Chrome. `wait` bounds how long one fetch waits
    /// for the listing grid before giving up on the cycle.
    pub fn new(wait: Duration) -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self { browser, wait })
    }

    fn fetch_cards(&self, url: &str) -> Result<Vec<RawCard>> {
        let tab = self.browser.new_tab()?;

        debug!("Navigating to {}", url);
        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;

        // Bounded wait for the listing grid; a timeout is a normal
        // empty cycle, not an error.
        if tab
            .wait_for_element_with_custom_timeout(CARD_SELECTOR, self.wait)
            .is_err()
        {
            warn!("No listing cards appeared within {:?}, treating cycle as empty", self.wait);
            return Ok(Vec::new());
        }

        let html_result = tab.evaluate("document.documentElement.outerHTML", false)?;
        let html = match html_result.value.as_ref().and_then(|v| v.as_str()) {
            Some(html) => html.to_string(),
            None => {
                warn!("Could not read rendered HTML from page");
                return Ok(Vec::new());
            }
        };

        let document = Html::parse_document(&html);
        let card_selector = Selector::parse(CARD_SELECTOR).unwrap();

        let cards: Vec<RawCard> = document
            .select(&card_selector)
            .map(|element| RawCard::new(element.html()))
            .collect();

        info!("Found {} listing cards on the page", cards.len());
        Ok(cards)
    }
}

#[async_trait]
impl FragmentProvider for OlxBrowserProvider {
    async fn fetch(&self, url: &str) -> Result<Vec<RawCard>> {
        self.fetch_cards(url)
    }

    fn source_name(&self) -> &'static str {
        "OLX"
    }
}
