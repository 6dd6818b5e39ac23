pub mod categories;

pub use categories::{
    all_categories, category, category_by_name, CategoryId, CreatureCategory, CATEGORY_COUNT,
    CREATURE_CATEGORIES,
};
