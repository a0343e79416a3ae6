// Colors category data. Visuals are plain swatches; the label is the word the
// player learns.
use super::{CategoryDesc, ItemDef, Visual::Swatch};

pub static COLORS: CategoryDesc = CategoryDesc {
    id: "colors",
    name: "Colors",
    starter: STARTER,
    mover: MOVER,
    flyer: FLYER,
};

static STARTER: &[ItemDef] = &[
    ItemDef { id: "red", label: "Red", visual: Swatch("#e53935") },
    ItemDef { id: "blue", label: "Blue", visual: Swatch("#1e88e5") },
    ItemDef { id: "yellow", label: "Yellow", visual: Swatch("#fdd835") },
    ItemDef { id: "green", label: "Green", visual: Swatch("#43a047") },
    ItemDef { id: "black", label: "Black", visual: Swatch("#212121") },
    ItemDef { id: "white", label: "White", visual: Swatch("#fafafa") },
];

static MOVER: &[ItemDef] = &[
    ItemDef { id: "orange", label: "Orange", visual: Swatch("#fb8c00") },
    ItemDef { id: "purple", label: "Purple", visual: Swatch("#8e24aa") },
    ItemDef { id: "pink", label: "Pink", visual: Swatch("#ec407a") },
    ItemDef { id: "brown", label: "Brown", visual: Swatch("#795548") },
    ItemDef { id: "gray", label: "Gray", visual: Swatch("#9e9e9e") },
];

static FLYER: &[ItemDef] = &[
    ItemDef { id: "turquoise", label: "Turquoise", visual: Swatch("#00bcd4") },
    ItemDef { id: "violet", label: "Violet", visual: Swatch("#7c4dff") },
    ItemDef { id: "beige", label: "Beige", visual: Swatch("#d7ccc8") },
    ItemDef { id: "silver", label: "Silver", visual: Swatch("#b0bec5") },
    ItemDef { id: "gold", label: "Gold", visual: Swatch("#fbc02d") },
];
