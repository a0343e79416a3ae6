// Catalog dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use vocab_drop::catalog::{CATEGORIES, CategoryDesc, ItemDef, Visual, find};

fn all_items(cat: &CategoryDesc) -> Vec<&ItemDef> {
    cat.starter
        .iter()
        .chain(cat.mover.iter())
        .chain(cat.flyer.iter())
        .collect()
}

#[test]
fn category_ids_are_unique() {
    let mut seen = HashSet::new();
    for cat in CATEGORIES {
        assert!(seen.insert(cat.id), "duplicate category id '{}'", cat.id);
        assert!(!cat.name.is_empty());
    }
}

#[test]
fn item_ids_are_unique_within_each_category() {
    for cat in CATEGORIES {
        let mut seen = HashSet::new();
        for item in all_items(cat) {
            assert!(
                seen.insert(item.id),
                "duplicate item id '{}' in category '{}'",
                item.id,
                cat.id
            );
        }
    }
}

#[test]
fn items_have_labels_and_ids() {
    for cat in CATEGORIES {
        for item in all_items(cat) {
            assert!(!item.id.is_empty(), "empty id in '{}'", cat.id);
            assert!(!item.label.is_empty(), "empty label for '{}'", item.id);
            // Ids are URL/DOM safe: lowercase ascii, digits, hyphens.
            for c in item.id.chars() {
                assert!(
                    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-',
                    "invalid char '{}' in id '{}'",
                    c,
                    item.id
                );
            }
        }
    }
}

#[test]
fn every_category_fills_at_least_one_set_per_tier_start() {
    // The starter tier alone must fill at least one full set of 3.
    for cat in CATEGORIES {
        assert!(
            cat.starter.len() >= 3,
            "category '{}' starter tier too small",
            cat.id
        );
    }
}

#[test]
fn swatches_are_hex_colors() {
    for cat in CATEGORIES {
        for item in all_items(cat) {
            if let Visual::Swatch(hex) = item.visual {
                assert!(
                    hex.len() == 7 && hex.starts_with('#'),
                    "bad swatch '{}' for '{}'",
                    hex,
                    item.id
                );
                assert!(
                    hex[1..].chars().all(|c| c.is_ascii_hexdigit()),
                    "bad swatch '{}' for '{}'",
                    hex,
                    item.id
                );
            }
        }
    }
}

#[test]
fn image_visuals_point_at_svg_assets() {
    for cat in CATEGORIES {
        for item in all_items(cat) {
            if let Visual::Image(path) = item.visual {
                assert!(
                    path.starts_with("icons/") && path.ends_with(".svg"),
                    "unexpected asset path '{}' for '{}'",
                    path,
                    item.id
                );
            }
        }
    }
}

#[test]
fn find_matches_the_table() {
    for cat in CATEGORIES {
        let found = find(cat.id).expect("registered category must be findable");
        assert_eq!(found.id, cat.id);
    }
}
