use crate::models::Listing;
use crate::normalize::price_sort_key;

/// Sort a cycle's listings by ascending price, cheapest first.
///
/// The sort is stable: listings with equal prices (and all the
/// unparsable-price listings at the end) keep their extraction order,
/// so the digest is deterministic for a given page.
pub fn rank_by_price(listings: &mut [Listing]) {
    listings.sort_by(|a, b| price_sort_key(&a.price_text).total_cmp(&price_sort_key(&b.price_text)));
}

/// Render one cycle's ranked listings as a Telegram Markdown digest.
///
/// Pure text assembly, no I/O. An empty cycle produces a one-line
/// notice instead of an empty message.
pub fn format_digest(city: &str, listings: &[Listing]) -> String {
    let city = title_case(city);

    if listings.is_empty() {
        return format!("ℹ️ No new plot listings in {city}.");
    }

    let mut message = format!("📢 *New plot listings in {city}:*\n\n");
    for (idx, listing) in listings.iter().enumerate() {
        let per_sqm = match listing.price_per_sqm {
            Some(value) => format!("{value} zł/m²"),
            None => "no data".to_string(),
        };
        message.push_str(&format!(
            "*{}.* 🏡 {}\n📍 {}\n💰 {} ({})\n🔗 [View listing]({})\n\n",
            idx + 1,
            listing.title,
            listing.location_text,
            listing.price_text,
            per_sqm,
            listing.link,
        ));
    }
    message
}

fn title_case(city: &str) -> String {
    city.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn listing(link: &str, price_text: &str, per_sqm: Option<f64>) -> Listing {
        Listing {
            title: format!("Działka {link}"),
            price_text: price_text.to_string(),
            price_value: None,
            location_text: "Warszawa - Dzisiaj".to_string(),
            area_value: None,
            price_per_sqm: per_sqm,
            link: link.to_string(),
            scraped_at: Utc::now(),
        }
    }

    #[test]
    fn ranks_ascending_with_unparsable_last() {
        let mut listings = vec![
            listing("a", "300 000 zł", None),
            listing("b", "150 000 zł", None),
            listing("c", "abc", None),
            listing("d", "150 000 zł", None),
        ];
        rank_by_price(&mut listings);

        let order: Vec<&str> = listings.iter().map(|l| l.link.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn equal_prices_keep_extraction_order() {
        let mut listings = vec![
            listing("first", "150 000 zł", None),
            listing("second", "150 000 zł", None),
        ];
        rank_by_price(&mut listings);
        assert_eq!(listings[0].link, "first");
        assert_eq!(listings[1].link, "second");
    }

    #[test]
    fn empty_cycle_names_the_city() {
        let digest = format_digest("warszawa", &[]);
        assert_eq!(digest, "ℹ️ No new plot listings in Warszawa.");
    }

    #[test]
    fn digest_lists_entries_in_order_with_fields() {
        let listings = vec![
            listing("https://olx.pl/oferta/b", "150 000 zł", None),
            listing("https://olx.pl/oferta/a", "300 000 zł", Some(600.0)),
        ];
        let digest = format_digest("warszawa", &listings);

        assert!(digest.starts_with("📢 *New plot listings in Warszawa:*"));
        let first = digest.find("https://olx.pl/oferta/b").unwrap();
        let second = digest.find("https://olx.pl/oferta/a").unwrap();
        assert!(first < second);
        assert!(digest.contains("(no data)"));
        assert!(digest.contains("(600 zł/m²)"));
        assert!(digest.contains("*1.*"));
        assert!(digest.contains("*2.*"));
    }
}
