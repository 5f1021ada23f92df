//! Food catalog - the fixed set of sortable foods and the round draw.
//!
//! Foods are split into two energy categories of 50 entries each. A round
//! draws a balanced, shuffled subset with no run of more than two foods of
//! the same category, so the player never sees long one-sided streaks.

use crate::core::rng::SimpleRng;
use crate::types::Basket;

/// A single sortable item. Immutable once drawn; `id` is the only key used
/// to detect duplicate or late resolution events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub basket: Basket,
}

/// Longest allowed run of same-category foods in a draw sequence.
pub const MAX_CATEGORY_RUN: usize = 2;

const LOW_ENERGY: &[(&str, &str)] = &[
    ("Apple", "\u{1F34E}"),
    ("Banana", "\u{1F34C}"),
    ("Orange", "\u{1F34A}"),
    ("Pear", "\u{1F350}"),
    ("Strawberry", "\u{1F353}"),
    ("Blueberries", "\u{1FAD0}"),
    ("Grapes", "\u{1F347}"),
    ("Watermelon", "\u{1F349}"),
    ("Carrot", "\u{1F955}"),
    ("Potato", "\u{1F954}"),
    ("Sweet potato", "\u{1F360}"),
    ("Tomato", "\u{1F345}"),
    ("Lettuce", "\u{1F96C}"),
    ("Spinach", "\u{1F96C}"),
    ("Cucumber", "\u{1F952}"),
    ("Onion", "\u{1F9C5}"),
    ("Garlic", "\u{1F9C4}"),
    ("Bell pepper", "\u{1FAD1}"),
    ("Broccoli", "\u{1F966}"),
    ("Cauliflower", "\u{1F966}"),
    ("Peas", "\u{1FADB}"),
    ("Corn", "\u{1F33D}"),
    ("Beans", "\u{1FAD8}"),
    ("Lentils", "\u{1FAD8}"),
    ("Chickpeas", "\u{1FAD8}"),
    ("Rice", "\u{1F35A}"),
    ("Pasta", "\u{1F35D}"),
    ("Bread", "\u{1F35E}"),
    ("Oats", "\u{1F963}"),
    ("Barley", "\u{1F33E}"),
    ("Quinoa", "\u{1F33E}"),
    ("Couscous", "\u{1F35A}"),
    ("Flour", "\u{1F33E}"),
    ("Tofu", "\u{1F9C8}"),
    ("Nuts", "\u{1F95C}"),
    ("Seeds", "\u{1F33B}"),
    ("Peanut butter", "\u{1F95C}"),
    ("Olive oil", "\u{1FAD2}"),
    ("Vegetable soup", "\u{1F963}"),
    ("Salad", "\u{1F957}"),
    ("Applesauce", "\u{1F34E}"),
    ("Mashed potatoes", "\u{1F954}"),
    ("Popcorn", "\u{1F37F}"),
    ("Jam", "\u{1F353}"),
    ("Tomato sauce", "\u{1F345}"),
    ("Vegetable stir-fry", "\u{1F96C}"),
    ("Fruit smoothie", "\u{1F964}"),
    ("Baked vegetables", "\u{1F955}"),
    ("Vegetable wrap", "\u{1F32F}"),
    ("Bean stew", "\u{1F372}"),
];

const HIGH_ENERGY: &[(&str, &str)] = &[
    ("Beef", "\u{1F969}"),
    ("Steak", "\u{1F969}"),
    ("Burger", "\u{1F354}"),
    ("Lamb", "\u{1F356}"),
    ("Pork", "\u{1F953}"),
    ("Bacon", "\u{1F953}"),
    ("Sausage", "\u{1F32D}"),
    ("Ham", "\u{1F356}"),
    ("Chicken", "\u{1F357}"),
    ("Chicken nuggets", "\u{1F357}"),
    ("Turkey", "\u{1F983}"),
    ("Duck", "\u{1F986}"),
    ("Fish", "\u{1F41F}"),
    ("Salmon", "\u{1F41F}"),
    ("Tuna", "\u{1F41F}"),
    ("Shrimp", "\u{1F990}"),
    ("Lobster", "\u{1F99E}"),
    ("Cheese", "\u{1F9C0}"),
    ("Butter", "\u{1F9C8}"),
    ("Milk", "\u{1F95B}"),
    ("Yogurt", "\u{1F95B}"),
    ("Ice cream", "\u{1F366}"),
    ("Cream", "\u{1F95B}"),
    ("Eggs", "\u{1F95A}"),
    ("Pizza", "\u{1F355}"),
    ("Lasagna", "\u{1F35D}"),
    ("Hot dog", "\u{1F32D}"),
    ("Fried chicken", "\u{1F357}"),
    ("Cheeseburger", "\u{1F354}"),
    ("Pepperoni", "\u{1F355}"),
    ("Salami", "\u{1F953}"),
    ("Fish sticks", "\u{1F41F}"),
    ("Meatballs", "\u{1F356}"),
    ("Kebab", "\u{1F362}"),
    ("Fried eggs", "\u{1F373}"),
    ("Omelette", "\u{1F373}"),
    ("Pancakes", "\u{1F95E}"),
    ("Chocolate", "\u{1F36B}"),
    ("Cake", "\u{1F370}"),
    ("Cookies", "\u{1F36A}"),
    ("Croissant", "\u{1F950}"),
    ("Donut", "\u{1F369}"),
    ("Milkshake", "\u{1F964}"),
    ("Frozen meals", "\u{1F371}"),
    ("Ready-made meals", "\u{1F371}"),
    ("Fast food fries", "\u{1F35F}"),
    ("Processed sandwiches", "\u{1F96A}"),
    ("Packaged snacks", "\u{1F37F}"),
    ("Instant noodles", "\u{1F35C}"),
    ("Frozen pizza", "\u{1F355}"),
];

/// Number of foods in the full catalog.
pub fn catalog_len() -> usize {
    LOW_ENERGY.len() + HIGH_ENERGY.len()
}

fn low_energy_food(index: usize) -> Food {
    let (name, emoji) = LOW_ENERGY[index];
    Food {
        id: index as u32,
        name,
        emoji,
        basket: Basket::LowEnergy,
    }
}

fn high_energy_food(index: usize) -> Food {
    let (name, emoji) = HIGH_ENERGY[index];
    Food {
        id: (LOW_ENERGY.len() + index) as u32,
        name,
        emoji,
        basket: Basket::HighEnergy,
    }
}

/// Draw a randomized, category-balanced sequence of `count` distinct foods.
///
/// Each category is shuffled independently, the two are interleaved to an
/// even split, and the final order is a random merge that never emits more
/// than [`MAX_CATEGORY_RUN`] foods of the same category in a row.
///
/// Deterministic for a given RNG state. If `count` exceeds the catalog the
/// result is shorter than requested.
pub fn draw_items(count: usize, rng: &mut SimpleRng) -> Vec<Food> {
    let mut low: Vec<Food> = (0..LOW_ENERGY.len()).map(low_energy_food).collect();
    let mut high: Vec<Food> = (0..HIGH_ENERGY.len()).map(high_energy_food).collect();
    rng.shuffle(&mut low);
    rng.shuffle(&mut high);

    // Even split: alternate categories until `count` foods are pooled.
    let half = count.div_ceil(2);
    let mut pool: Vec<Food> = Vec::with_capacity(count);
    for i in 0..half {
        if i < low.len() && pool.len() < count {
            pool.push(low[i]);
        }
        if i < high.len() && pool.len() < count {
            pool.push(high[i]);
        }
    }

    // Run-limited random merge.
    let mut out: Vec<Food> = Vec::with_capacity(pool.len());
    let mut last: Option<Basket> = None;
    let mut run = 0usize;

    while !pool.is_empty() {
        let eligible: Vec<usize> = (0..pool.len())
            .filter(|&i| run < MAX_CATEGORY_RUN || Some(pool[i].basket) != last)
            .collect();

        // Unsatisfiable only when the pool has degenerated to the tail's
        // category. Appending would extend the run, so splice the item into
        // an earlier gap instead; a balanced pool always has one.
        if eligible.is_empty() {
            let food = pool.swap_remove(rng.next_range(pool.len() as u32) as usize);
            let at = splice_point(&out, food.basket).unwrap_or(out.len());
            out.insert(at, food);
            last = out.last().map(|f| f.basket);
            run = out
                .iter()
                .rev()
                .take_while(|f| Some(f.basket) == last)
                .count();
            continue;
        }

        let picked = eligible[rng.next_range(eligible.len() as u32) as usize];
        let food = pool.swap_remove(picked);
        if Some(food.basket) == last {
            run += 1;
        } else {
            last = Some(food.basket);
            run = 1;
        }
        out.push(food);
    }

    out
}

/// First gap in `seq` where an item of `basket` fits without pushing any
/// same-category run past [`MAX_CATEGORY_RUN`].
fn splice_point(seq: &[Food], basket: Basket) -> Option<usize> {
    (0..=seq.len()).find(|&at| {
        let before = seq[..at]
            .iter()
            .rev()
            .take_while(|f| f.basket == basket)
            .count();
        let after = seq[at..]
            .iter()
            .take_while(|f| f.basket == basket)
            .count();
        before + 1 + after <= MAX_CATEGORY_RUN
    })
}
