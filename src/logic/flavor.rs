use crate::sources::SpeciesRecord;
use crate::util::collapse_whitespace;

/// Default flavour-text language.
pub const DEFAULT_LANGUAGE: &str = "es";

/// What: Pick the description for one language from a species record.
///
/// Inputs:
/// - `species`: Decoded `/pokemon-species/{id}` body
/// - `language`: Language code such as `"es"` or `"en"` (compared case-insensitively)
///
/// Output:
/// - `Some(text)` from the first matching entry, whitespace-normalised; `None` when no entry matches.
///
/// Details:
/// - There is no fallback language.
#[must_use]
pub fn pick_flavor_text(species: &SpeciesRecord, language: &str) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|e| e.language.name.eq_ignore_ascii_case(language))
        .map(|e| collapse_whitespace(&e.flavor_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{FlavorTextEntry, NamedResource};

    fn entry(text: &str, lang: &str) -> FlavorTextEntry {
        FlavorTextEntry {
            flavor_text: text.into(),
            language: NamedResource {
                name: lang.into(),
                url: String::new(),
            },
        }
    }

    #[test]
    /// What: The first entry in the requested language wins; others are ignored.
    fn first_matching_language_wins() {
        let species = SpeciesRecord {
            flavor_text_entries: vec![
                entry("When several of\nthese POKéMON gather", "en"),
                entry("Cuando se enfada,\u{000c}descarga energía", "es"),
                entry("Segunda entrada", "es"),
            ],
        };
        assert_eq!(
            pick_flavor_text(&species, "es").as_deref(),
            Some("Cuando se enfada, descarga energía")
        );
        assert_eq!(
            pick_flavor_text(&species, "EN").as_deref(),
            Some("When several of these POKéMON gather")
        );
    }

    #[test]
    /// What: No entry in the language yields `None` rather than another language.
    fn no_fallback_language() {
        let species = SpeciesRecord {
            flavor_text_entries: vec![entry("only english", "en")],
        };
        assert_eq!(pick_flavor_text(&species, "es"), None);
        assert_eq!(pick_flavor_text(&SpeciesRecord::default(), "es"), None);
    }
}
