// Letters category data. Glyph visuals show the uppercase letter; the zone
// label is the letter name as spoken.
use super::{CategoryDesc, ItemDef, Visual::Glyph};

pub static LETTERS: CategoryDesc = CategoryDesc {
    id: "letters",
    name: "Letters",
    starter: STARTER,
    mover: MOVER,
    flyer: FLYER,
};

static STARTER: &[ItemDef] = &[
    ItemDef { id: "a", label: "A", visual: Glyph("A") },
    ItemDef { id: "b", label: "B", visual: Glyph("B") },
    ItemDef { id: "c", label: "C", visual: Glyph("C") },
    ItemDef { id: "d", label: "D", visual: Glyph("D") },
    ItemDef { id: "e", label: "E", visual: Glyph("E") },
    ItemDef { id: "f", label: "F", visual: Glyph("F") },
    ItemDef { id: "g", label: "G", visual: Glyph("G") },
    ItemDef { id: "h", label: "H", visual: Glyph("H") },
    ItemDef { id: "i", label: "I", visual: Glyph("I") },
];

static MOVER: &[ItemDef] = &[
    ItemDef { id: "j", label: "J", visual: Glyph("J") },
    ItemDef { id: "k", label: "K", visual: Glyph("K") },
    ItemDef { id: "l", label: "L", visual: Glyph("L") },
    ItemDef { id: "m", label: "M", visual: Glyph("M") },
    ItemDef { id: "n", label: "N", visual: Glyph("N") },
    ItemDef { id: "o", label: "O", visual: Glyph("O") },
    ItemDef { id: "p", label: "P", visual: Glyph("P") },
    ItemDef { id: "q", label: "Q", visual: Glyph("Q") },
    ItemDef { id: "r", label: "R", visual: Glyph("R") },
];

static FLYER: &[ItemDef] = &[
    ItemDef { id: "s", label: "S", visual: Glyph("S") },
    ItemDef { id: "t", label: "T", visual: Glyph("T") },
    ItemDef { id: "u", label: "U", visual: Glyph("U") },
    ItemDef { id: "v", label: "V", visual: Glyph("V") },
    ItemDef { id: "w", label: "W", visual: Glyph("W") },
    ItemDef { id: "x", label: "X", visual: Glyph("X") },
    ItemDef { id: "y", label: "Y", visual: Glyph("Y") },
    ItemDef { id: "z", label: "Z", visual: Glyph("Z") },
];
