use crate::dedup::SeenListings;
use crate::digest::{format_digest, rank_by_price};
use crate::extract::{extract_listing, ExtractError};
use crate::filter::location_matches_city;
use crate::models::Listing;
use crate::notify::Notifier;
use crate::scrapers::{build_search_url, FragmentProvider};
use anyhow::Result;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// What one poll cycle produced: the newly admitted listings in ranked
/// order, plus the reasons cards were skipped. Discarded after the
/// digest goes out; only the seen-set carries over.
#[derive(Debug, Default)]
pub struct CycleReport {
    pub listings: Vec<Listing>,
    pub skipped: Vec<ExtractError>,
}

/// The long-lived poll loop: fetch, extract, filter, dedupe, rank,
/// notify, sleep, repeat until shut down.
pub struct Watcher {
    city: String,
    interval: Duration,
    provider: Box<dyn FragmentProvider>,
    notifier: Box<dyn Notifier>,
    seen: SeenListings,
}

impl Watcher {
    pub fn new(
        city: impl Into<String>,
        interval: Duration,
        provider: Box<dyn FragmentProvider>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            city: city.into(),
            interval,
            provider,
            notifier,
            seen: SeenListings::new(),
        }
    }

    /// Run cycles until the shutdown channel fires. Every failure mode
    /// inside a cycle is degraded locally, so a bad cycle logs and the
    /// loop keeps going.
    pub async fn run(mut self, mut shutdown: watch::Receiver<()>) -> Result<()> {
        loop {
            match self.run_cycle().await {
                Ok(report) => info!(
                    "Cycle done: {} new listings, {} cards skipped, {} links seen so far",
                    report.listings.len(),
                    report.skipped.len(),
                    self.seen.len()
                ),
                Err(err) => warn!("Cycle failed: {:#}", err),
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.changed() => {
                    info!("Shutdown requested, stopping watcher");
                    return Ok(());
                }
            }
        }
    }

    /// One fetch → extract → filter → dedupe → rank → notify pass.
    pub async fn run_cycle(&mut self) -> Result<CycleReport> {
        info!("Checking for new plot listings in {}...", self.city);

        let url = build_search_url(&self.city);
        let cards = self.provider.fetch(&url).await?;

        let mut report = CycleReport::default();
        for card in &cards {
            let listing = match extract_listing(card) {
                Ok(listing) => listing,
                Err(err) => {
                    warn!("Skipping card: {}", err);
                    report.skipped.push(err);
                    continue;
                }
            };

            if !location_matches_city(&listing.location_text, &self.city) {
                debug!("Skipping listing outside {} ({})", self.city, listing.location_text);
                continue;
            }

            // Within-cycle duplicates take the same path as cross-cycle
            // ones: first admission wins.
            if !self.seen.admit(&listing.link) {
                debug!("Already reported: {}", listing.link);
                continue;
            }

            report.listings.push(listing);
        }

        rank_by_price(&mut report.listings);
        info!("Found {} new listings", report.listings.len());

        let digest = format_digest(&self.city, &report.listings);
        if let Err(err) = self.notifier.send(&digest).await {
            warn!("Failed to deliver digest: {:#}", err);
        }

        Ok(report)
    }
}
