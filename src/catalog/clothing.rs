// Clothing category data
use super::{CategoryDesc, ItemDef, Visual::Image};

pub static CLOTHING: CategoryDesc = CategoryDesc {
    id: "clothing",
    name: "Clothing",
    starter: STARTER,
    mover: MOVER,
    flyer: FLYER,
};

static STARTER: &[ItemDef] = &[
    ItemDef { id: "shirt", label: "Shirt", visual: Image("icons/clothing/shirt.svg") },
    ItemDef { id: "pants", label: "Pants", visual: Image("icons/clothing/pants.svg") },
    ItemDef { id: "shoes", label: "Shoes", visual: Image("icons/clothing/shoes.svg") },
    ItemDef { id: "hat", label: "Hat", visual: Image("icons/clothing/hat.svg") },
    ItemDef { id: "socks", label: "Socks", visual: Image("icons/clothing/socks.svg") },
    ItemDef { id: "dress", label: "Dress", visual: Image("icons/clothing/dress.svg") },
    ItemDef { id: "coat", label: "Coat", visual: Image("icons/clothing/coat.svg") },
];

static MOVER: &[ItemDef] = &[
    ItemDef { id: "skirt", label: "Skirt", visual: Image("icons/clothing/skirt.svg") },
    ItemDef { id: "sweater", label: "Sweater", visual: Image("icons/clothing/sweater.svg") },
    ItemDef { id: "gloves", label: "Gloves", visual: Image("icons/clothing/gloves.svg") },
    ItemDef { id: "scarf", label: "Scarf", visual: Image("icons/clothing/scarf.svg") },
    ItemDef { id: "boots", label: "Boots", visual: Image("icons/clothing/boots.svg") },
];

static FLYER: &[ItemDef] = &[
    ItemDef { id: "pajamas", label: "Pajamas", visual: Image("icons/clothing/pajamas.svg") },
    ItemDef { id: "raincoat", label: "Raincoat", visual: Image("icons/clothing/raincoat.svg") },
    ItemDef { id: "sandals", label: "Sandals", visual: Image("icons/clothing/sandals.svg") },
    ItemDef { id: "uniform", label: "Uniform", visual: Image("icons/clothing/uniform.svg") },
    ItemDef { id: "belt", label: "Belt", visual: Image("icons/clothing/belt.svg") },
];
