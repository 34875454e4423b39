use std::collections::HashSet;

/// Links that have already been reported during this process run.
///
/// Insert-only and in-memory: the set is created empty at startup,
/// grows for the process lifetime, and is gone on exit. One instance is
/// owned by the watcher and shared across all cycles.
#[derive(Debug, Default)]
pub struct SeenListings {
    links: HashSet<String>,
}

impl SeenListings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a link into the current cycle. Returns `true` and records
    /// the link the first time it is seen; `false` on every later call
    /// with the same link, whether in this cycle or a previous one.
    pub fn admit(&mut self, link: &str) -> bool {
        self.links.insert(link.to_string())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_admission_succeeds_repeats_fail() {
        let mut seen = SeenListings::new();
        assert!(seen.admit("https://olx.pl/oferta/1"));
        assert!(!seen.admit("https://olx.pl/oferta/1"));
        assert!(!seen.admit("https://olx.pl/oferta/1"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn distinct_links_are_independent() {
        let mut seen = SeenListings::new();
        assert!(seen.admit("https://olx.pl/oferta/1"));
        assert!(seen.admit("https://olx.pl/oferta/2"));
        assert!(!seen.admit("https://olx.pl/oferta/1"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn starts_empty() {
        assert!(SeenListings::new().is_empty());
    }
}
