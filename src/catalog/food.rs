// Food category data
use super::{CategoryDesc, ItemDef, Visual::Image};

pub static FOOD: CategoryDesc = CategoryDesc {
    id: "food",
    name: "Food",
    starter: STARTER,
    mover: MOVER,
    flyer: FLYER,
};

static STARTER: &[ItemDef] = &[
    ItemDef { id: "apple", label: "Apple", visual: Image("icons/food/apple.svg") },
    ItemDef { id: "banana", label: "Banana", visual: Image("icons/food/banana.svg") },
    ItemDef { id: "bread", label: "Bread", visual: Image("icons/food/bread.svg") },
    ItemDef { id: "milk", label: "Milk", visual: Image("icons/food/milk.svg") },
    ItemDef { id: "egg", label: "Egg", visual: Image("icons/food/egg.svg") },
    ItemDef { id: "rice", label: "Rice", visual: Image("icons/food/rice.svg") },
    ItemDef { id: "cheese", label: "Cheese", visual: Image("icons/food/cheese.svg") },
    ItemDef { id: "orange-fruit", label: "Orange", visual: Image("icons/food/orange.svg") },
];

static MOVER: &[ItemDef] = &[
    ItemDef { id: "pizza", label: "Pizza", visual: Image("icons/food/pizza.svg") },
    ItemDef { id: "soup", label: "Soup", visual: Image("icons/food/soup.svg") },
    ItemDef { id: "salad", label: "Salad", visual: Image("icons/food/salad.svg") },
    ItemDef { id: "chicken", label: "Chicken", visual: Image("icons/food/chicken.svg") },
    ItemDef { id: "grapes", label: "Grapes", visual: Image("icons/food/grapes.svg") },
    ItemDef { id: "carrot", label: "Carrot", visual: Image("icons/food/carrot.svg") },
];

static FLYER: &[ItemDef] = &[
    ItemDef { id: "noodles", label: "Noodles", visual: Image("icons/food/noodles.svg") },
    ItemDef { id: "pancake", label: "Pancake", visual: Image("icons/food/pancake.svg") },
    ItemDef { id: "yogurt", label: "Yogurt", visual: Image("icons/food/yogurt.svg") },
    ItemDef { id: "sandwich", label: "Sandwich", visual: Image("icons/food/sandwich.svg") },
    ItemDef { id: "strawberry", label: "Strawberry", visual: Image("icons/food/strawberry.svg") },
    ItemDef { id: "watermelon", label: "Watermelon", visual: Image("icons/food/watermelon.svg") },
];
