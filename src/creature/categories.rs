//! Static table of hostile creature categories
//!
//! Categories are plain data. Lookups go through the free functions below
//! rather than methods on `CategoryId`.

use serde::{Deserialize, Serialize};

/// Identifier of a creature category
///
/// Discriminants double as indices into `CREATURE_CATEGORIES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CategoryId {
    Zombie,
    Husk,
    Drowned,
    ZombieVillager,
    Skeleton,
    Stray,
    WitherSkeleton,
    Creeper,
    Spider,
    CaveSpider,
    Enderman,
    Witch,
    Blaze,
    Silverfish,
    Endermite,
    Pillager,
    Vindicator,
    Evoker,
    Ravager,
    Guardian,
    Hoglin,
    Phantom,
}

/// Immutable description of one creature category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureCategory {
    pub id: CategoryId,
    /// Lowercase name used in commands, storage and host entity kinds
    pub name: &'static str,
    pub max_health: f64,
    /// Follow range the creature spawns with (blocks)
    pub default_follow_range: f64,
    pub default_knockback_resistance: f64,
}

/// Number of categories in the table
pub const CATEGORY_COUNT: usize = 22;

const fn entry(
    id: CategoryId,
    name: &'static str,
    max_health: f64,
    default_follow_range: f64,
    default_knockback_resistance: f64,
) -> CreatureCategory {
    CreatureCategory {
        id,
        name,
        max_health,
        default_follow_range,
        default_knockback_resistance,
    }
}

/// All categories, ordered by `CategoryId` discriminant
pub static CREATURE_CATEGORIES: [CreatureCategory; CATEGORY_COUNT] = [
    entry(CategoryId::Zombie, "zombie", 20.0, 35.0, 0.0),
    entry(CategoryId::Husk, "husk", 20.0, 35.0, 0.0),
    entry(CategoryId::Drowned, "drowned", 20.0, 35.0, 0.0),
    entry(CategoryId::ZombieVillager, "zombie_villager", 20.0, 35.0, 0.0),
    entry(CategoryId::Skeleton, "skeleton", 20.0, 16.0, 0.0),
    entry(CategoryId::Stray, "stray", 20.0, 16.0, 0.0),
    entry(CategoryId::WitherSkeleton, "wither_skeleton", 20.0, 16.0, 0.0),
    entry(CategoryId::Creeper, "creeper", 20.0, 16.0, 0.0),
    entry(CategoryId::Spider, "spider", 16.0, 16.0, 0.0),
    entry(CategoryId::CaveSpider, "cave_spider", 12.0, 16.0, 0.0),
    entry(CategoryId::Enderman, "enderman", 40.0, 64.0, 0.0),
    entry(CategoryId::Witch, "witch", 26.0, 16.0, 0.0),
    entry(CategoryId::Blaze, "blaze", 20.0, 48.0, 0.0),
    entry(CategoryId::Silverfish, "silverfish", 8.0, 16.0, 0.0),
    entry(CategoryId::Endermite, "endermite", 8.0, 16.0, 0.0),
    entry(CategoryId::Pillager, "pillager", 24.0, 32.0, 0.0),
    entry(CategoryId::Vindicator, "vindicator", 24.0, 12.0, 0.0),
    entry(CategoryId::Evoker, "evoker", 24.0, 12.0, 0.0),
    entry(CategoryId::Ravager, "ravager", 100.0, 32.0, 0.75),
    entry(CategoryId::Guardian, "guardian", 30.0, 16.0, 0.0),
    entry(CategoryId::Hoglin, "hoglin", 40.0, 16.0, 0.6),
    entry(CategoryId::Phantom, "phantom", 20.0, 64.0, 0.0),
];

/// Look up the table entry for a category id
pub fn category(id: CategoryId) -> &'static CreatureCategory {
    &CREATURE_CATEGORIES[id as usize]
}

/// Iterate every category id in table order
pub fn all_categories() -> impl Iterator<Item = CategoryId> {
    CREATURE_CATEGORIES.iter().map(|c| c.id)
}

/// Find a category by name
///
/// Case-insensitive; an optional `namespace:` prefix (as in host entity
/// kinds such as `minecraft:zombie`) is ignored. Unknown names yield `None`.
pub fn category_by_name(name: &str) -> Option<CategoryId> {
    let bare = name.rsplit(':').next().unwrap_or(name).trim();
    CREATURE_CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(bare))
        .map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_discriminants() {
        for (index, def) in CREATURE_CATEGORIES.iter().enumerate() {
            assert_eq!(
                def.id as usize, index,
                "Table entry {} is out of order",
                def.name
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = CREATURE_CATEGORIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATEGORY_COUNT);
    }

    #[test]
    fn test_health_and_range_positive() {
        for def in &CREATURE_CATEGORIES {
            assert!(def.max_health > 0.0, "{} has no health", def.name);
            assert!(def.default_follow_range > 0.0, "{} has no range", def.name);
            assert!((0.0..=1.0).contains(&def.default_knockback_resistance));
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(category_by_name("zombie"), Some(CategoryId::Zombie));
        assert_eq!(category_by_name("Cave_Spider"), Some(CategoryId::CaveSpider));
        assert_eq!(category_by_name("minecraft:skeleton"), Some(CategoryId::Skeleton));
        assert_eq!(category_by_name("villager"), None);
        assert_eq!(category_by_name(""), None);
    }

    #[test]
    fn test_category_lookup_round_trips_name() {
        for id in all_categories() {
            assert_eq!(category_by_name(category(id).name), Some(id));
        }
    }
}
