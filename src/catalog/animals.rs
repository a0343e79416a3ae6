// Animals category data
use super::{CategoryDesc, ItemDef, Visual::Image};

pub static ANIMALS: CategoryDesc = CategoryDesc {
    id: "animals",
    name: "Animals",
    starter: STARTER,
    mover: MOVER,
    flyer: FLYER,
};

static STARTER: &[ItemDef] = &[
    ItemDef { id: "dog", label: "Dog", visual: Image("icons/animals/dog.svg") },
    ItemDef { id: "cat", label: "Cat", visual: Image("icons/animals/cat.svg") },
    ItemDef { id: "fish", label: "Fish", visual: Image("icons/animals/fish.svg") },
    ItemDef { id: "bird", label: "Bird", visual: Image("icons/animals/bird.svg") },
    ItemDef { id: "cow", label: "Cow", visual: Image("icons/animals/cow.svg") },
    ItemDef { id: "pig", label: "Pig", visual: Image("icons/animals/pig.svg") },
    ItemDef { id: "duck", label: "Duck", visual: Image("icons/animals/duck.svg") },
    ItemDef { id: "horse", label: "Horse", visual: Image("icons/animals/horse.svg") },
    ItemDef { id: "sheep", label: "Sheep", visual: Image("icons/animals/sheep.svg") },
    ItemDef { id: "rabbit", label: "Rabbit", visual: Image("icons/animals/rabbit.svg") },
    ItemDef { id: "goat", label: "Goat", visual: Image("icons/animals/goat.svg") },
    ItemDef { id: "mouse", label: "Mouse", visual: Image("icons/animals/mouse.svg") },
    ItemDef { id: "chicken-animal", label: "Chicken", visual: Image("icons/animals/chicken.svg") },
    ItemDef { id: "bee", label: "Bee", visual: Image("icons/animals/bee.svg") },
];

static MOVER: &[ItemDef] = &[
    ItemDef { id: "lion", label: "Lion", visual: Image("icons/animals/lion.svg") },
    ItemDef { id: "tiger", label: "Tiger", visual: Image("icons/animals/tiger.svg") },
    ItemDef { id: "bear", label: "Bear", visual: Image("icons/animals/bear.svg") },
    ItemDef { id: "monkey", label: "Monkey", visual: Image("icons/animals/monkey.svg") },
    ItemDef { id: "elephant", label: "Elephant", visual: Image("icons/animals/elephant.svg") },
    ItemDef { id: "giraffe", label: "Giraffe", visual: Image("icons/animals/giraffe.svg") },
    ItemDef { id: "zebra", label: "Zebra", visual: Image("icons/animals/zebra.svg") },
    ItemDef { id: "frog", label: "Frog", visual: Image("icons/animals/frog.svg") },
];

static FLYER: &[ItemDef] = &[
    ItemDef { id: "dolphin", label: "Dolphin", visual: Image("icons/animals/dolphin.svg") },
    ItemDef { id: "penguin", label: "Penguin", visual: Image("icons/animals/penguin.svg") },
    ItemDef { id: "kangaroo", label: "Kangaroo", visual: Image("icons/animals/kangaroo.svg") },
    ItemDef { id: "octopus", label: "Octopus", visual: Image("icons/animals/octopus.svg") },
    ItemDef { id: "crocodile", label: "Crocodile", visual: Image("icons/animals/crocodile.svg") },
    ItemDef { id: "hedgehog", label: "Hedgehog", visual: Image("icons/animals/hedgehog.svg") },
    ItemDef { id: "squirrel", label: "Squirrel", visual: Image("icons/animals/squirrel.svg") },
    ItemDef { id: "whale", label: "Whale", visual: Image("icons/animals/whale.svg") },
];
