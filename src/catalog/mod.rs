//! Built-in vocabulary catalog.
//!
//! Each category ships as a static data module (one file per category, like a
//! level pack) with three cumulative difficulty tiers. `starter` is the
//! smallest vocabulary; `mover` and `flyer` add progressively harder words on
//! top. Tier slices are disjoint; the pool builder concatenates them up to
//! the selected tier.

use serde::Serialize;

mod animals;
mod clothing;
mod colors;
mod food;
mod letters;
mod numbers;

/// How an item is shown to the player. Resolved once at catalog-definition
/// time; the engine never re-derives visuals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Visual {
    /// Icon asset path, relative to the frontend asset root.
    Image(&'static str),
    /// Solid color swatch, `#rrggbb`.
    Swatch(&'static str),
    /// Large rendered text (letters, digits).
    Glyph(&'static str),
}

/// One matchable vocabulary entry. `id` is the matching key: the drop zone
/// derived from this item carries the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ItemDef {
    pub id: &'static str,
    pub label: &'static str,
    pub visual: Visual,
}

/// A category with its three difficulty tiers.
pub struct CategoryDesc {
    pub id: &'static str,
    pub name: &'static str,
    pub starter: &'static [ItemDef],
    pub mover: &'static [ItemDef],
    pub flyer: &'static [ItemDef],
}

pub static CATEGORIES: &[&CategoryDesc] = &[
    &animals::ANIMALS,
    &colors::COLORS,
    &letters::LETTERS,
    &numbers::NUMBERS,
    &clothing::CLOTHING,
    &food::FOOD,
];

/// Look up a category by id. Unknown ids return `None`; callers degrade to an
/// empty pool rather than failing.
pub fn find(id: &str) -> Option<&'static CategoryDesc> {
    CATEGORIES.iter().copied().find(|c| c.id == id)
}
