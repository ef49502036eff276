//! Loadout stat calculation
//!
//! Totals the six armor stats a loadout would give a character: armor
//! base stats, the masterwork bonus, armor mod bonuses, subclass fragment
//! bonuses and, optionally, conditional "font" bonuses.

use crate::models::definitions::ARMOR_STATS;
use crate::models::{InventoryItem, ItemDefinition};

use super::resolve::SubclassPlug;

/// Stat points a fully masterworked armor piece adds to every stat
pub const MASTERWORK_BONUS: i32 = 2;

/// Number of armor slots a complete set fills
pub const FULL_ARMOR_SET: usize = 5;

/// A computed stat total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTotal {
    pub stat_hash: u32,
    pub value: i32,
}

/// Compute armor stat totals, in armor-stat display order
///
/// Returns `None` unless `armor` is a complete set, since partial sets don't
/// produce meaningful totals.
pub fn loadout_stats(
    armor: &[&InventoryItem],
    mods: &[&ItemDefinition],
    subclass_plugs: &[SubclassPlug<'_>],
    include_runtime_stat_benefits: bool,
) -> Option<Vec<StatTotal>> {
    if armor.len() != FULL_ARMOR_SET {
        return None;
    }

    let totals = ARMOR_STATS
        .iter()
        .map(|&stat_hash| {
            let from_armor: i32 = armor
                .iter()
                .map(|item| {
                    let masterwork = if item.masterworked { MASTERWORK_BONUS } else { 0 };
                    item.stat(stat_hash) + masterwork
                })
                .sum();

            let from_mods: i32 = mods
                .iter()
                .map(|m| {
                    let runtime = if include_runtime_stat_benefits {
                        bonus(&m.runtime_stat_bonuses, stat_hash)
                    } else {
                        0
                    };
                    bonus(&m.stat_bonuses, stat_hash) + runtime
                })
                .sum();

            let from_subclass: i32 = subclass_plugs
                .iter()
                .map(|p| bonus(&p.plug.stat_bonuses, stat_hash))
                .sum();

            StatTotal {
                stat_hash,
                value: from_armor + from_mods + from_subclass,
            }
        })
        .collect();

    Some(totals)
}

fn bonus(bonuses: &std::collections::BTreeMap<u32, i32>, stat_hash: u32) -> i32 {
    bonuses.get(&stat_hash).copied().unwrap_or(0)
}
