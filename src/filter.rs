use crate::normalize::fold_locale;

/// Check whether a listing's location text belongs to the target city.
///
/// OLX location texts look like "Warszawa, Białołęka - Dzisiaj o 14:02":
/// the segment before the first `-` is the place, the rest is posting
/// date noise. Both sides are locale-folded before the containment test
/// so "Kraków" matches a `krakow` argument.
pub fn location_matches_city(location_text: &str, city: &str) -> bool {
    let place = location_text.split('-').next().unwrap_or("").trim();
    fold_locale(place).contains(&fold_locale(city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_same_city_case_insensitively() {
        assert!(location_matches_city("Warszawa - Dzisiaj", "warszawa"));
        assert!(location_matches_city("warszawa - Odświeżono dnia 12 maja", "Warszawa"));
    }

    #[test]
    fn matches_with_diacritics_folded() {
        assert!(location_matches_city("Kraków - Wczoraj", "krakow"));
        assert!(location_matches_city("Łódź, Bałuty - Dzisiaj", "łódź"));
    }

    #[test]
    fn rejects_other_cities() {
        assert!(!location_matches_city("Kraków - Wczoraj", "warszawa"));
        assert!(!location_matches_city("Radom - Dzisiaj", "warszawa"));
    }

    #[test]
    fn district_suffix_still_matches() {
        assert!(location_matches_city("Warszawa, Mokotów - Dzisiaj o 09:15", "warszawa"));
    }
}
