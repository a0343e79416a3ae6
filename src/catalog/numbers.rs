// Numbers category data. Glyph shows the digits, the zone label is the
// number word.
use super::{CategoryDesc, ItemDef, Visual::Glyph};

pub static NUMBERS: CategoryDesc = CategoryDesc {
    id: "numbers",
    name: "Numbers",
    starter: STARTER,
    mover: MOVER,
    flyer: FLYER,
};

static STARTER: &[ItemDef] = &[
    ItemDef { id: "1", label: "One", visual: Glyph("1") },
    ItemDef { id: "2", label: "Two", visual: Glyph("2") },
    ItemDef { id: "3", label: "Three", visual: Glyph("3") },
    ItemDef { id: "4", label: "Four", visual: Glyph("4") },
    ItemDef { id: "5", label: "Five", visual: Glyph("5") },
    ItemDef { id: "6", label: "Six", visual: Glyph("6") },
    ItemDef { id: "7", label: "Seven", visual: Glyph("7") },
    ItemDef { id: "8", label: "Eight", visual: Glyph("8") },
    ItemDef { id: "9", label: "Nine", visual: Glyph("9") },
    ItemDef { id: "10", label: "Ten", visual: Glyph("10") },
];

static MOVER: &[ItemDef] = &[
    ItemDef { id: "11", label: "Eleven", visual: Glyph("11") },
    ItemDef { id: "12", label: "Twelve", visual: Glyph("12") },
    ItemDef { id: "13", label: "Thirteen", visual: Glyph("13") },
    ItemDef { id: "14", label: "Fourteen", visual: Glyph("14") },
    ItemDef { id: "15", label: "Fifteen", visual: Glyph("15") },
];

static FLYER: &[ItemDef] = &[
    ItemDef { id: "16", label: "Sixteen", visual: Glyph("16") },
    ItemDef { id: "17", label: "Seventeen", visual: Glyph("17") },
    ItemDef { id: "18", label: "Eighteen", visual: Glyph("18") },
    ItemDef { id: "19", label: "Nineteen", visual: Glyph("19") },
    ItemDef { id: "20", label: "Twenty", visual: Glyph("20") },
];
