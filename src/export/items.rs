//! Inventory item spreadsheet export
//!
//! Weapons, armor and ghosts each get their own sheet, including the user's
//! tags and notes so they can be edited in a spreadsheet and re-imported.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use tracing::info;

use crate::config::Settings;
use crate::error::{SheetsError, SheetsResult};
use crate::models::bucket::{self, BucketCategory};
use crate::models::definitions::ARMOR_STATS;
use crate::models::{Definitions, InventoryItem, InventorySnapshot, ItemAnnotation, ItemId};

use super::sheet::{write_csv, CsvRow};

/// Columns whose lists are spread over one cell per entry
pub const ITEM_LIST_COLUMNS: [&str; 1] = ["Perks"];

/// Which items a sheet covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSheet {
    Weapons,
    Armor,
    Ghost,
}

impl ItemSheet {
    /// Default file base name for this sheet
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Weapons => "destinyWeapons",
            Self::Armor => "destinyArmor",
            Self::Ghost => "destinyGhost",
        }
    }

    pub fn includes(&self, item: &InventoryItem) -> bool {
        match self {
            Self::Weapons => BucketCategory::Weapons.position(item.bucket_hash).is_some(),
            Self::Armor => BucketCategory::Armor.position(item.bucket_hash).is_some(),
            Self::Ghost => item.bucket_hash == bucket::GHOST,
        }
    }
}

impl fmt::Display for ItemSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapons => write!(f, "Weapons"),
            Self::Armor => write!(f, "Armor"),
            Self::Ghost => write!(f, "Ghost"),
        }
    }
}

/// Build one row per owned item of the sheet's kind
pub fn build_item_rows(
    snapshot: &InventorySnapshot,
    annotations: &HashMap<ItemId, ItemAnnotation>,
    sheet: ItemSheet,
    settings: &Settings,
) -> SheetsResult<Vec<CsvRow>> {
    let defs = snapshot.loaded_definitions().ok_or(SheetsError::NotLoaded)?;

    let mut items: Vec<_> = snapshot.items.iter().filter(|i| sheet.includes(i)).collect();
    items.sort_by(|a, b| {
        let pos = |i: &InventoryItem| BucketCategory::of(i.bucket_hash).and_then(|c| c.position(i.bucket_hash));
        pos(a).cmp(&pos(b)).then_with(|| a.name.cmp(&b.name))
    });

    Ok(items
        .into_iter()
        .map(|item| item_row(snapshot, defs, annotations.get(&item.id), item, sheet, settings))
        .collect())
}

fn item_row(
    snapshot: &InventorySnapshot,
    defs: &Definitions,
    annotation: Option<&ItemAnnotation>,
    item: &InventoryItem,
    sheet: ItemSheet,
    settings: &Settings,
) -> CsvRow {
    let owner = snapshot
        .store(&item.owner)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| item.owner.to_string());
    let equippable = if item.class_type.is_any() {
        settings.any_class_label.clone()
    } else {
        defs.class_name(item.class_type)
            .map(str::to_string)
            .unwrap_or_else(|| item.class_type.to_string())
    };

    let mut row = CsvRow::new()
        .with("Name", item.name.as_str())
        .with("Hash", item.hash)
        // Quoted so spreadsheets don't round long instance ids
        .with("Id", format!("\"{}\"", item.id))
        .with("Tag", annotation.and_then(|a| a.tag).map(|t| t.to_string()))
        .with("Tier", item.tier.to_string())
        .with("Type", item.item_type.as_str())
        .with("Equippable", equippable)
        .with("Power", item.power)
        .with("Owner", owner)
        .with("Locked", item.locked)
        .with("Equipped", item.equipped);

    if sheet != ItemSheet::Ghost {
        row.set("Masterwork", item.masterworked);
    }

    if sheet == ItemSheet::Armor {
        let mut total = 0;
        for stat_hash in ARMOR_STATS {
            let Some(stat_def) = defs.stat(stat_hash) else {
                continue;
            };
            let value = item.stat(stat_hash);
            total += value;
            row.set(stat_def.name.as_str(), value);
        }
        row.set("Total", total);
    } else {
        for stat in &item.stats {
            if let Some(stat_def) = defs.stat(stat.stat_hash) {
                row.set(stat_def.name.as_str(), stat.value);
            }
        }
    }

    row.set("Notes", annotation.and_then(|a| a.notes.clone()));
    row.set("Perks", item.perks.clone());
    row
}

/// Export one item sheet as CSV, returning the number of rows written
pub fn export_items_csv<W: Write>(
    snapshot: &InventorySnapshot,
    annotations: &HashMap<ItemId, ItemAnnotation>,
    sheet: ItemSheet,
    settings: &Settings,
    writer: W,
) -> SheetsResult<usize> {
    let rows = build_item_rows(snapshot, annotations, sheet, settings)?;
    write_csv(writer, &rows, &ITEM_LIST_COLUMNS)?;
    info!(sheet = %sheet, exported = rows.len(), "exported items");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sheet::CsvValue;
    use crate::fixtures;
    use crate::models::ItemTag;

    fn annotations() -> HashMap<ItemId, ItemAnnotation> {
        let mut annotation = ItemAnnotation::new("w1", fixtures::ACE_OF_SPADES);
        annotation.tag = Some(ItemTag::Favorite);
        annotation.notes = Some("PvP main".into());
        HashMap::from([(annotation.id.clone(), annotation)])
    }

    #[test]
    fn test_weapon_rows() {
        let rows = build_item_rows(
            &fixtures::snapshot(),
            &annotations(),
            ItemSheet::Weapons,
            &Settings::default(),
        )
        .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.get("Name").cloned().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                CsvValue::from("Ace of Spades"),
                CsvValue::from("Calus Mini-Tool"),
                CsvValue::from("Apex Predator"),
            ]
        );

        let ace = &rows[0];
        assert_eq!(ace.get("Id"), Some(&CsvValue::from("\"w1\"")));
        assert_eq!(ace.get("Tag"), Some(&CsvValue::from("favorite")));
        assert_eq!(ace.get("Notes"), Some(&CsvValue::from("PvP main")));
        assert_eq!(ace.get("Owner"), Some(&CsvValue::from("Hunter")));
        assert_eq!(ace.get("Rounds Per Minute"), Some(&CsvValue::Number(140)));
        assert_eq!(ace.get("Locked"), Some(&CsvValue::Bool(true)));

        let apex = &rows[2];
        assert_eq!(apex.get("Owner"), Some(&CsvValue::from("Vault")));
        assert_eq!(apex.get("Tag"), Some(&CsvValue::Empty));
    }

    #[test]
    fn test_armor_rows_have_stat_totals() {
        let rows = build_item_rows(
            &fixtures::snapshot(),
            &HashMap::new(),
            ItemSheet::Armor,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(rows.len(), 5);
        let helmet = &rows[0];
        assert_eq!(helmet.get("Name"), Some(&CsvValue::from("Celestial Nighthawk")));
        assert_eq!(helmet.get("Equippable"), Some(&CsvValue::from("Hunter")));
        assert_eq!(helmet.get("Total"), Some(&CsvValue::Number(60)));
        assert_eq!(helmet.get("Masterwork"), Some(&CsvValue::Bool(true)));
    }

    #[test]
    fn test_equippable_uses_any_class_label() {
        let settings = Settings {
            any_class_label: "All Classes".to_string(),
            ..Settings::default()
        };
        let rows = build_item_rows(
            &fixtures::snapshot(),
            &HashMap::new(),
            ItemSheet::Weapons,
            &settings,
        )
        .unwrap();
        assert_eq!(rows[0].get("Equippable"), Some(&CsvValue::from("All Classes")));
    }

    #[test]
    fn test_ghost_rows() {
        let rows = build_item_rows(
            &fixtures::snapshot(),
            &HashMap::new(),
            ItemSheet::Ghost,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].get("Masterwork").is_none());
    }

    #[test]
    fn test_requires_loaded_snapshot() {
        let result = build_item_rows(
            &InventorySnapshot::default(),
            &HashMap::new(),
            ItemSheet::Armor,
            &Settings::default(),
        );
        assert!(matches!(result, Err(SheetsError::NotLoaded)));
    }

    #[test]
    fn test_export_items_csv() {
        let mut out = Vec::new();
        let count = export_items_csv(
            &fixtures::snapshot(),
            &annotations(),
            ItemSheet::Weapons,
            &Settings::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(count, 3);

        let csv = String::from_utf8(out).unwrap();
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("Name,Hash,Id,Tag,Tier,Type"));
        assert!(header.ends_with("Notes,Perks 0,Perks 1"));
        assert!(csv.contains("\"\"\"w1\"\"\""));
        assert!(csv.contains("Memento Mori,Paracausal Shot"));
    }
}
