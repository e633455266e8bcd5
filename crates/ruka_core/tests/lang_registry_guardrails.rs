use std::collections::HashMap;

use proptest::prelude::*;
use ruka_core::lang::keywords::{self, Keyword};
use ruka_core::lang::modes::{self, Mode};
use ruka_core::lang::registry::Stability;
use strum::{EnumCount, IntoEnumIterator};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, Keyword> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn modes_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, Mode> = HashMap::new();

    for info in modes::MODES {
        assert_eq!(
            modes::from_str(info.canonical),
            Some(info.id),
            "mode canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(modes::as_str(info.id), info.canonical, "mode as_str mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate mode spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn every_keyword_variant_has_exactly_one_entry() {
    assert_eq!(keywords::KEYWORDS.len(), Keyword::COUNT);
    for id in Keyword::iter() {
        let entries = keywords::KEYWORDS.iter().filter(|k| k.id == id).count();
        assert_eq!(entries, 1, "{id:?} has {entries} KEYWORDS entries");
    }
}

#[test]
fn every_mode_variant_has_exactly_one_entry() {
    assert_eq!(modes::MODES.len(), Mode::COUNT);
    for id in Mode::iter() {
        let entries = modes::MODES.iter().filter(|m| m.id == id).count();
        assert_eq!(entries, 1, "{id:?} has {entries} MODES entries");
    }
}

#[test]
fn keyword_and_mode_spellings_do_not_overlap() {
    // The scanner tries keywords before modes; an overlap would make a mode unreachable.
    for info in modes::MODES {
        assert_eq!(
            keywords::from_str(info.canonical),
            None,
            "mode spelling {:?} is also a keyword",
            info.canonical
        );
    }
}

#[test]
fn spellings_look_like_identifiers() {
    let spellings = keywords::KEYWORDS
        .iter()
        .map(|k| k.canonical)
        .chain(modes::MODES.iter().map(|m| m.canonical));
    for s in spellings {
        let mut chars = s.chars();
        let first = chars.next().expect("empty spelling");
        assert!(first.is_ascii_lowercase(), "spelling {s:?} must start with a lowercase letter");
        assert!(
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "spelling {s:?} must be a plain identifier"
        );
    }
}

#[test]
fn reserved_keywords_are_grouped_as_reserved() {
    for info in keywords::KEYWORDS {
        let reserved_category = info.category == keywords::KeywordCategory::Reserved;
        let reserved_stability = info.stability == Stability::Reserved;
        assert_eq!(
            reserved_category, reserved_stability,
            "category/stability disagree for {:?}",
            info.id
        );
    }
}

proptest! {
    #[test]
    fn resolved_keywords_render_back_to_input(s in "[a-z_]{0,10}") {
        if let Some(id) = keywords::from_str(&s) {
            prop_assert_eq!(keywords::as_str(id), s.as_str());
        }
    }

    #[test]
    fn resolved_modes_render_back_to_input(s in "[a-z]{0,9}") {
        if let Some(id) = modes::from_str(&s) {
            prop_assert_eq!(modes::as_str(id), s.as_str());
        }
    }
}
