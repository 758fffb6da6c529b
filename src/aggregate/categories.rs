//! Keyword-based display categories for the grocery list.
//!
//! A pure lookup: first keyword that appears in the lowercased item name
//! wins, so more specific keywords must come after the broad ones only when
//! the broad one maps to the same category. Anything unmatched lands in
//! Other.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Produce,
    Meat,
    Dairy,
    Canned,
    Baking,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Meat => "Meat",
            Category::Dairy => "Dairy",
            Category::Canned => "Canned",
            Category::Baking => "Baking",
            Category::Other => "Other",
        }
    }

    /// Display order of the grocery list groups.
    pub const DISPLAY_ORDER: [Category; 6] = [
        Category::Produce,
        Category::Meat,
        Category::Dairy,
        Category::Canned,
        Category::Baking,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[rustfmt::skip]
const KEYWORDS: &[(&str, Category)] = &[
    // produce: aromatics and herbs
    ("onion", Category::Produce),
    ("garlic", Category::Produce),
    ("tomato", Category::Produce),
    ("cilantro", Category::Produce),
    ("parsley", Category::Produce),
    ("basil", Category::Produce),
    ("thyme", Category::Produce),
    ("rosemary", Category::Produce),
    ("sage", Category::Produce),
    ("mint", Category::Produce),
    ("dill", Category::Produce),
    ("chives", Category::Produce),
    ("ginger", Category::Produce),
    ("scallion", Category::Produce),
    ("green onion", Category::Produce),
    ("shallot", Category::Produce),
    // produce: fruit
    ("lemon", Category::Produce),
    ("lime", Category::Produce),
    ("orange", Category::Produce),
    ("apple", Category::Produce),
    ("banana", Category::Produce),
    ("avocado", Category::Produce),
    ("grape", Category::Produce),
    ("strawberry", Category::Produce),
    ("blueberry", Category::Produce),
    ("raspberry", Category::Produce),
    ("pineapple", Category::Produce),
    ("mango", Category::Produce),
    // produce: vegetables
    ("carrot", Category::Produce),
    ("celery", Category::Produce),
    ("potato", Category::Produce),
    ("sweet potato", Category::Produce),
    ("yam", Category::Produce),
    ("broccoli", Category::Produce),
    ("cauliflower", Category::Produce),
    ("zucchini", Category::Produce),
    ("cucumber", Category::Produce),
    ("bell pepper", Category::Produce),
    ("jalapeno", Category::Produce),
    ("serrano", Category::Produce),
    ("mushroom", Category::Produce),
    ("spinach", Category::Produce),
    ("kale", Category::Produce),
    ("lettuce", Category::Produce),
    ("arugula", Category::Produce),
    ("cabbage", Category::Produce),
    ("brussels sprout", Category::Produce),
    ("green bean", Category::Produce),
    ("asparagus", Category::Produce),
    ("corn", Category::Produce),
    ("eggplant", Category::Produce),
    ("squash", Category::Produce),
    ("butternut squash", Category::Produce),
    ("pumpkin", Category::Produce),
    // meat
    ("beef", Category::Meat),
    ("ground beef", Category::Meat),
    ("steak", Category::Meat),
    ("chicken", Category::Meat),
    ("chicken breast", Category::Meat),
    ("chicken thigh", Category::Meat),
    ("pork", Category::Meat),
    ("bacon", Category::Meat),
    ("ham", Category::Meat),
    ("sausage", Category::Meat),
    ("italian sausage", Category::Meat),
    ("turkey", Category::Meat),
    ("ground turkey", Category::Meat),
    ("lamb", Category::Meat),
    ("veal", Category::Meat),
    // seafood counts as meat
    ("salmon", Category::Meat),
    ("tuna", Category::Meat),
    ("shrimp", Category::Meat),
    ("cod", Category::Meat),
    ("tilapia", Category::Meat),
    ("crab", Category::Meat),
    ("lobster", Category::Meat),
    ("scallop", Category::Meat),
    ("anchovy", Category::Meat),
    // dairy
    ("milk", Category::Dairy),
    ("whole milk", Category::Dairy),
    ("skim milk", Category::Dairy),
    ("half and half", Category::Dairy),
    ("heavy cream", Category::Dairy),
    ("whipping cream", Category::Dairy),
    ("cheese", Category::Dairy),
    ("cheddar", Category::Dairy),
    ("mozzarella", Category::Dairy),
    ("parmesan", Category::Dairy),
    ("feta", Category::Dairy),
    ("goat cheese", Category::Dairy),
    ("cream cheese", Category::Dairy),
    ("ricotta", Category::Dairy),
    ("butter", Category::Dairy),
    ("yogurt", Category::Dairy),
    ("greek yogurt", Category::Dairy),
    ("sour cream", Category::Dairy),
    // eggs count as dairy
    ("egg", Category::Dairy),
    ("eggs", Category::Dairy),
    // canned
    ("canned", Category::Canned),
    ("canned tomato", Category::Canned),
    ("tomato sauce", Category::Canned),
    ("tomato paste", Category::Canned),
    ("crushed tomato", Category::Canned),
    ("diced tomato", Category::Canned),
    ("beans", Category::Canned),
    ("black bean", Category::Canned),
    ("kidney bean", Category::Canned),
    ("chickpea", Category::Canned),
    ("garbanzo bean", Category::Canned),
    ("canned corn", Category::Canned),
    ("broth", Category::Canned),
    ("stock", Category::Canned),
    ("chicken broth", Category::Canned),
    ("beef broth", Category::Canned),
    ("vegetable broth", Category::Canned),
    // baking and dry goods
    ("flour", Category::Baking),
    ("all purpose flour", Category::Baking),
    ("bread flour", Category::Baking),
    ("cake flour", Category::Baking),
    ("cornstarch", Category::Baking),
    ("sugar", Category::Baking),
    ("brown sugar", Category::Baking),
    ("powdered sugar", Category::Baking),
    ("baking powder", Category::Baking),
    ("baking soda", Category::Baking),
    ("yeast", Category::Baking),
    ("vanilla extract", Category::Baking),
    ("cocoa powder", Category::Baking),
    ("chocolate chip", Category::Baking),
    // pantry and condiments fold into baking
    ("ketchup", Category::Baking),
    ("mustard", Category::Baking),
    ("mayonnaise", Category::Baking),
    ("soy sauce", Category::Baking),
    ("hot sauce", Category::Baking),
    ("bbq sauce", Category::Baking),
    ("worcestershire", Category::Baking),
    ("vinegar", Category::Baking),
    ("white vinegar", Category::Baking),
    ("apple cider vinegar", Category::Baking),
    ("balsamic vinegar", Category::Baking),
    ("rice vinegar", Category::Baking),
    ("olive oil", Category::Baking),
    ("vegetable oil", Category::Baking),
    ("canola oil", Category::Baking),
    ("sesame oil", Category::Baking),
    ("honey", Category::Baking),
    ("maple syrup", Category::Baking),
    ("peanut butter", Category::Baking),
    ("jam", Category::Baking),
    ("jelly", Category::Baking),
    ("salsa", Category::Baking),
    ("pickles", Category::Baking),
    ("relish", Category::Baking),
    // spices fold into baking
    ("salt", Category::Baking),
    ("kosher salt", Category::Baking),
    ("sea salt", Category::Baking),
    ("black pepper", Category::Baking),
    ("peppercorn", Category::Baking),
    ("paprika", Category::Baking),
    ("smoked paprika", Category::Baking),
    ("cumin", Category::Baking),
    ("chili powder", Category::Baking),
    ("cayenne", Category::Baking),
    ("oregano", Category::Baking),
    ("italian seasoning", Category::Baking),
    ("garlic powder", Category::Baking),
    ("onion powder", Category::Baking),
    ("cinnamon", Category::Baking),
    ("nutmeg", Category::Baking),
    ("clove", Category::Baking),
    ("ginger powder", Category::Baking),
    // dry goods
    ("breadcrumb", Category::Baking),
    ("breadcrumbs", Category::Baking),
    ("panko", Category::Baking),
    // pasta and grains fold into baking
    ("spaghetti", Category::Baking),
    ("pasta", Category::Baking),
    ("penne", Category::Baking),
    ("fusilli", Category::Baking),
    ("macaroni", Category::Baking),
    ("noodle", Category::Baking),
    ("rice", Category::Baking),
    ("white rice", Category::Baking),
    ("brown rice", Category::Baking),
    ("quinoa", Category::Baking),
    ("couscous", Category::Baking),
    ("oat", Category::Baking),
    ("oats", Category::Baking),
    // bread items
    ("bread", Category::Baking),
    ("bagel", Category::Baking),
    ("bun", Category::Baking),
    ("tortilla", Category::Baking),
    ("pita", Category::Baking),
];

/// Assign a display category to an item name: first substring match in the
/// table wins, else Other.
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
