//! Loadout spreadsheet export
//!
//! One row per loadout that can be resolved against one of the player's
//! characters, describing its subclass setup, items, mods, artifact and
//! stat totals.

use std::io::Write;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{SheetsError, SheetsResult};
use crate::models::bucket::{self, BucketCategory};
use crate::models::loadout::{LOCKED_EXOTIC_ANY_EXOTIC, LOCKED_EXOTIC_NO_EXOTIC};
use crate::models::{pick_backing_store, Definitions, InventorySnapshot, Loadout, Store};
use crate::services::resolve::{
    fully_resolve_loadout, plug_names, subclass_plugs, ResolvedLoadoutItem, SubclassPlugKind,
};
use crate::services::stats::loadout_stats;

use super::sheet::{write_csv, CsvRow, CsvValue};

/// Columns whose lists are spread over one cell per entry
pub const LOADOUT_LIST_COLUMNS: [&str; 7] = [
    "Abilities",
    "Aspects",
    "Fragments",
    "Equipped Items",
    "Unequipped Items",
    "Mods",
    "Artifact Unlocks",
];

/// Build one row per exportable loadout
///
/// Loadouts for a class the player has no character of are skipped.
pub fn build_loadout_rows(
    snapshot: &InventorySnapshot,
    loadouts: &[Loadout],
    settings: &Settings,
) -> SheetsResult<Vec<CsvRow>> {
    let defs = snapshot.loaded_definitions().ok_or(SheetsError::NotLoaded)?;

    let rows = loadouts
        .iter()
        .filter_map(|loadout| {
            let Some(store) = pick_backing_store(&snapshot.stores, loadout.class_type) else {
                debug!(loadout = %loadout.id, class = %loadout.class_type, "no character for loadout, skipping");
                return None;
            };
            Some(loadout_row(snapshot, defs, store, loadout, settings))
        })
        .collect();

    Ok(rows)
}

fn loadout_row(
    snapshot: &InventorySnapshot,
    defs: &Definitions,
    store: &Store,
    loadout: &Loadout,
    settings: &Settings,
) -> CsvRow {
    let resolved = fully_resolve_loadout(snapshot, defs, store, loadout);
    if resolved.missing_count() > 0 {
        debug!(
            loadout = %loadout.id,
            store = %store.name,
            missing = resolved.missing_count(),
            "loadout references items the player doesn't own"
        );
    }
    let subclass = resolved.subclass();
    let plugs = subclass_plugs(defs, subclass);

    let class_name = if loadout.class_type.is_any() {
        settings.any_class_label.clone()
    } else {
        defs.class_name(loadout.class_type)
            .unwrap_or("Unknown")
            .to_string()
    };

    let mut row = CsvRow::new()
        .with("Id", loadout.id.to_string())
        .with("Class Type", class_name)
        .with("Name", loadout.name.as_str())
        .with("Notes", loadout.notes.clone())
        .with(
            "Last Edited",
            loadout
                .last_updated()
                .map(|at| at.format(&settings.date_format).to_string()),
        );

    // Stat columns are always present so every row lines up; they're only
    // filled when the loadout equips a full armor set
    let totals = loadout_stats(
        &resolved.equipped_armor(),
        &resolved.mods,
        &plugs,
        loadout.includes_runtime_stat_benefits(),
    );
    for stat_hash in crate::models::definitions::ARMOR_STATS {
        let Some(stat_def) = defs.stat(stat_hash) else {
            continue;
        };
        let value = totals
            .as_ref()
            .and_then(|t| t.iter().find(|s| s.stat_hash == stat_hash))
            .map(|s| s.value);
        row.set(stat_def.name.as_str(), value);
    }

    let equipped = sorted_names(
        resolved
            .items
            .iter()
            .filter(|i| i.equip() && i.bucket_hash() != bucket::SUBCLASS),
        BucketCategory::Weapons,
    );
    let unequipped = sorted_names(
        resolved.items.iter().filter(|i| !i.equip()),
        BucketCategory::Armor,
    );

    let parameters = loadout.parameters.as_ref();
    let artifact = parameters.and_then(|p| p.artifact_unlocks.as_ref());

    row.set("Subclass", subclass.map(|s| s.item.name.clone()));
    row.set("Abilities", plug_names(&plugs, SubclassPlugKind::Ability));
    row.set("Aspects", plug_names(&plugs, SubclassPlugKind::Aspect));
    row.set("Fragments", plug_names(&plugs, SubclassPlugKind::Fragment));
    row.set("Equipped Items", equipped);
    row.set("Unequipped Items", unequipped);
    row.set(
        "Mods",
        resolved.mods.iter().map(|m| m.name.clone()).collect::<Vec<_>>(),
    );
    row.set("Artifact Season", artifact.map(|a| a.season_number));
    row.set(
        "Artifact Unlocks",
        match artifact {
            Some(a) => CsvValue::List(
                a.unlocked_item_hashes
                    .iter()
                    .map(|&hash| defs.item(hash).map(|d| d.name.clone()).unwrap_or_default())
                    .collect(),
            ),
            None => CsvValue::Empty,
        },
    );
    row.set(
        "Exotic Armor",
        parameters
            .and_then(|p| p.exotic_armor_hash)
            .and_then(|hash| locked_exotic_name(defs, hash)),
    );

    row
}

/// Item names ordered by bucket position within `category`
///
/// Items outside the category sort first; equal positions keep loadout order.
fn sorted_names<'a>(
    items: impl Iterator<Item = &'a ResolvedLoadoutItem>,
    category: BucketCategory,
) -> Vec<String> {
    let mut items: Vec<_> = items.collect();
    items.sort_by_key(|i| category.position(i.bucket_hash()));
    items.into_iter().map(|i| i.item.name.clone()).collect()
}

/// Display name for a loadout's exotic armor constraint
fn locked_exotic_name(defs: &Definitions, hash: i64) -> Option<String> {
    match hash {
        LOCKED_EXOTIC_NO_EXOTIC => Some("No Exotic".to_string()),
        LOCKED_EXOTIC_ANY_EXOTIC => Some("Any Exotic".to_string()),
        _ => u32::try_from(hash)
            .ok()
            .and_then(|h| defs.item(h))
            .map(|d| d.name.clone()),
    }
}

/// Export loadouts as CSV, returning the number of rows written
pub fn export_loadouts_csv<W: Write>(
    snapshot: &InventorySnapshot,
    loadouts: &[Loadout],
    settings: &Settings,
    writer: W,
) -> SheetsResult<usize> {
    let rows = build_loadout_rows(snapshot, loadouts, settings)?;
    write_csv(writer, &rows, &LOADOUT_LIST_COLUMNS)?;
    info!(
        exported = rows.len(),
        skipped = loadouts.len() - rows.len(),
        "exported loadouts"
    );
    Ok(rows.len())
}
