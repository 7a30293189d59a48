//! Region resolution for free-text locations.
//!
//! Origins and destinations are whatever the user typed ("Port of Shanghai",
//! "Rotterdam, NL"). They are placed in a region by case-insensitive
//! whole-word matching against the configured keyword table. A keyword only
//! matches where it is not part of a longer word, so "usa" does not match
//! "Lusaka".

use crate::config::Region;

/// How a shipment moves relative to region boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Origin and destination are in the same region.
    Regional,
    /// Origin and destination are in different regions.
    Intercontinental,
    /// At least one end could not be placed in a region.
    Unknown,
}

/// Resolves a location to a region.
///
/// The longest matching keyword wins; on a tie the region listed first
/// wins. Returns `None` when no keyword occurs in the location as a whole
/// word.
///
/// # Examples
///
/// ```
/// use freight_quote_engine::calculation::resolve_region;
/// use freight_quote_engine::config::Region;
///
/// let regions = vec![
///     Region { code: "asia".into(), keywords: vec!["busan".into()] },
///     Region { code: "north_america".into(), keywords: vec!["usa".into()] },
/// ];
///
/// assert_eq!(resolve_region("Port of Busan", &regions).unwrap().code, "asia");
/// assert!(resolve_region("Atlantis", &regions).is_none());
/// assert!(resolve_region("Lusaka", &regions).is_none());
/// ```
pub fn resolve_region<'a>(location: &str, regions: &'a [Region]) -> Option<&'a Region> {
    let location = location.to_lowercase();
    let mut best: Option<(usize, &Region)> = None;

    for region in regions {
        for keyword in &region.keywords {
            if !contains_word(&location, keyword) {
                continue;
            }
            if best.is_none_or(|(len, _)| keyword.len() > len) {
                best = Some((keyword.len(), region));
            }
        }
    }

    best.map(|(_, region)| region)
}

/// True when `word` occurs in `text` with no letter or digit directly before
/// or after it.
fn contains_word(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Classifies a shipment as regional, intercontinental or unknown.
pub fn classify_movement(origin: &str, destination: &str, regions: &[Region]) -> Movement {
    match (
        resolve_region(origin, regions),
        resolve_region(destination, regions),
    ) {
        (Some(from), Some(to)) if from.code == to.code => Movement::Regional,
        (Some(_), Some(_)) => Movement::Intercontinental,
        _ => Movement::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::create_test_config;

    #[test]
    fn test_resolves_city_case_insensitively() {
        let config = create_test_config();
        let region = resolve_region("SHANGHAI", config.regions()).unwrap();
        assert_eq!(region.code, "asia");
    }

    #[test]
    fn test_resolves_location_with_surrounding_text() {
        let config = create_test_config();
        let region = resolve_region("Port of Rotterdam, NL", config.regions()).unwrap();
        assert_eq!(region.code, "europe");
    }

    #[test]
    fn test_longest_keyword_wins() {
        let config = create_test_config();
        let regions = vec![
            Region {
                code: "europe".into(),
                keywords: vec!["york".into()],
            },
            Region {
                code: "north_america".into(),
                keywords: vec!["new york".into()],
            },
        ];

        let region = resolve_region("New York, NY", &regions).unwrap();
        assert_eq!(region.code, "north_america");
    }

    #[test]
    fn test_equal_length_tie_goes_to_first_region() {
        let regions = vec![
            Region {
                code: "first".into(),
                keywords: vec!["porto".into()],
            },
            Region {
                code: "second".into(),
                keywords: vec!["lagos".into()],
            },
        ];

        let region = resolve_region("Lagos to Porto", &regions).unwrap();
        assert_eq!(region.code, "first");
    }

    #[test]
    fn test_keyword_inside_longer_word_does_not_match() {
        let config = create_test_config();
        // "busan" contains "usa" but only "busan" is a whole word.
        let region = resolve_region("Busan", config.regions()).unwrap();
        assert_eq!(region.code, "asia");
        assert!(resolve_region("Lusaka", config.regions()).is_none());
        assert!(resolve_region("Causality", config.regions()).is_none());
    }

    #[test]
    fn test_shipped_keywords_ignore_embedded_place_names() {
        let loader = crate::config::ConfigLoader::load("./config/default").unwrap();
        let regions = loader.config().regions();

        for location in ["Lusaka, Zambia", "Limassol", "Perugia", "Indianapolis"] {
            let region = resolve_region(location, regions);
            assert!(region.is_none(), "{} resolved to {:?}", location, region);
        }
        assert_eq!(resolve_region("Lima, Peru", regions).unwrap().code, "south_america");
        assert_eq!(resolve_region("Indiana", regions).unwrap().code, "north_america");
    }

    #[test]
    fn test_multi_word_keyword_matches_between_punctuation() {
        let config = create_test_config();
        let region = resolve_region("Port of Los Angeles/Long Beach", config.regions()).unwrap();
        assert_eq!(region.code, "north_america");
        let region = resolve_region("Shanghai-Pudong", config.regions()).unwrap();
        assert_eq!(region.code, "asia");
    }

    #[test]
    fn test_unknown_location_resolves_to_none() {
        let config = create_test_config();
        assert!(resolve_region("Atlantis", config.regions()).is_none());
        assert!(resolve_region("", config.regions()).is_none());
    }

    #[test]
    fn test_classify_regional() {
        let config = create_test_config();
        assert_eq!(
            classify_movement("Shanghai", "Singapore", config.regions()),
            Movement::Regional
        );
    }

    #[test]
    fn test_classify_intercontinental() {
        let config = create_test_config();
        assert_eq!(
            classify_movement("Shanghai", "Hamburg", config.regions()),
            Movement::Intercontinental
        );
    }

    #[test]
    fn test_classify_unknown_when_either_end_unmatched() {
        let config = create_test_config();
        assert_eq!(
            classify_movement("Shanghai", "Atlantis", config.regions()),
            Movement::Unknown
        );
        assert_eq!(
            classify_movement("Atlantis", "Hamburg", config.regions()),
            Movement::Unknown
        );
    }
}
