//! Loadout resolution
//!
//! Joins a loadout's item references with the items and definitions they
//! point at, so exports can work with names, buckets and stats.

use tracing::debug;

use crate::models::bucket;
use crate::models::definitions::{
    ASPECT_SOCKET_CATEGORIES, FRAGMENT_SOCKET_CATEGORIES, SUBCLASS_ABILITY_SOCKET_CATEGORIES,
};
use crate::models::{
    Definitions, InventoryItem, InventorySnapshot, ItemDefinition, Loadout, LoadoutItem, Store,
};

/// A loadout item reference joined with its full item
#[derive(Debug, Clone)]
pub struct ResolvedLoadoutItem {
    pub loadout_item: LoadoutItem,
    pub item: InventoryItem,
    /// The player doesn't own this item; `item` was built from its definition
    pub missing: bool,
}

impl ResolvedLoadoutItem {
    pub fn equip(&self) -> bool {
        self.loadout_item.equip
    }

    pub fn bucket_hash(&self) -> u32 {
        self.item.bucket_hash
    }
}

/// A loadout with every reference resolved against a backing store
#[derive(Debug, Clone)]
pub struct ResolvedLoadout<'a> {
    /// Resolved items in loadout order; references to unknown hashes are dropped
    pub items: Vec<ResolvedLoadoutItem>,
    /// Resolved armor mods in loadout order; unknown hashes are dropped
    pub mods: Vec<&'a ItemDefinition>,
}

impl ResolvedLoadout<'_> {
    /// The subclass item, if the loadout has one
    pub fn subclass(&self) -> Option<&ResolvedLoadoutItem> {
        self.items
            .iter()
            .find(|i| i.bucket_hash() == bucket::SUBCLASS)
    }

    /// Number of items the player doesn't own
    pub fn missing_count(&self) -> usize {
        self.items.iter().filter(|i| i.missing).count()
    }

    /// Equipped items in armor buckets
    pub fn equipped_armor(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|i| i.equip() && bucket::is_armor(i.bucket_hash()))
            .map(|i| &i.item)
            .collect()
    }
}

/// Resolve a loadout against the inventory of `store`
pub fn fully_resolve_loadout<'a>(
    snapshot: &InventorySnapshot,
    defs: &'a Definitions,
    store: &Store,
    loadout: &Loadout,
) -> ResolvedLoadout<'a> {
    let items = loadout
        .items
        .iter()
        .filter_map(|loadout_item| resolve_item(snapshot, defs, store, loadout_item))
        .collect();

    let mods = loadout
        .parameters
        .iter()
        .flat_map(|p| p.mods.iter())
        .filter_map(|&hash| {
            let def = defs.item(hash);
            if def.is_none() {
                debug!(loadout = %loadout.id, hash, "dropping unknown mod");
            }
            def
        })
        .collect();

    ResolvedLoadout { items, mods }
}

fn resolve_item(
    snapshot: &InventorySnapshot,
    defs: &Definitions,
    store: &Store,
    loadout_item: &LoadoutItem,
) -> Option<ResolvedLoadoutItem> {
    // Prefer the exact instance, then any copy of the item on this character
    let owned = snapshot
        .item(&loadout_item.id)
        .filter(|i| i.hash == loadout_item.hash)
        .or_else(|| {
            snapshot
                .items
                .iter()
                .find(|i| i.hash == loadout_item.hash && i.owner == store.id)
        });

    if let Some(item) = owned {
        return Some(ResolvedLoadoutItem {
            loadout_item: loadout_item.clone(),
            item: item.clone(),
            missing: false,
        });
    }

    match defs.item(loadout_item.hash) {
        Some(def) => Some(ResolvedLoadoutItem {
            loadout_item: loadout_item.clone(),
            item: InventoryItem::from_definition(def, store.id.clone()),
            missing: true,
        }),
        None => {
            debug!(item = %loadout_item.id, hash = loadout_item.hash, "dropping unknown item");
            None
        }
    }
}

/// A plug chosen for one of the subclass's sockets
#[derive(Debug, Clone, Copy)]
pub struct SubclassPlug<'a> {
    pub plug: &'a ItemDefinition,
    pub socket_category_hash: u32,
}

/// Which part of a subclass a plug configures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubclassPlugKind {
    Ability,
    Aspect,
    Fragment,
}

impl SubclassPlug<'_> {
    pub fn kind(&self) -> Option<SubclassPlugKind> {
        let hash = self.socket_category_hash;
        if SUBCLASS_ABILITY_SOCKET_CATEGORIES.contains(&hash) {
            Some(SubclassPlugKind::Ability)
        } else if ASPECT_SOCKET_CATEGORIES.contains(&hash) {
            Some(SubclassPlugKind::Aspect)
        } else if FRAGMENT_SOCKET_CATEGORIES.contains(&hash) {
            Some(SubclassPlugKind::Fragment)
        } else {
            None
        }
    }
}

/// Plugs socketed into a subclass via its socket overrides, in socket order
pub fn subclass_plugs<'a>(
    defs: &'a Definitions,
    subclass: Option<&ResolvedLoadoutItem>,
) -> Vec<SubclassPlug<'a>> {
    let Some(subclass) = subclass else {
        return Vec::new();
    };
    let Some(subclass_def) = defs.item(subclass.item.hash) else {
        return Vec::new();
    };

    subclass
        .loadout_item
        .socket_overrides
        .iter()
        .filter_map(|(&socket_index, &plug_hash)| {
            let socket = subclass_def.sockets.get(socket_index)?;
            let plug = defs.item(plug_hash)?;
            Some(SubclassPlug {
                plug,
                socket_category_hash: socket.category_hash,
            })
        })
        .collect()
}

/// Names of the plugs of one kind
pub fn plug_names(plugs: &[SubclassPlug<'_>], kind: SubclassPlugKind) -> Vec<String> {
    plugs
        .iter()
        .filter(|p| p.kind() == Some(kind))
        .map(|p| p.plug.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_resolves_owned_missing_and_unknown_items() {
        let snapshot = fixtures::snapshot();
        let defs = snapshot.definitions.as_ref().unwrap();
        let loadout = fixtures::raid_hunter();
        let store = &snapshot.stores[0];

        let resolved = fully_resolve_loadout(&snapshot, defs, store, &loadout);

        // "dismantled" has an unknown hash and is dropped
        assert_eq!(resolved.items.len(), loadout.items.len() - 1);

        let gone = resolved
            .items
            .iter()
            .find(|i| i.loadout_item.id.as_str() == "gone")
            .unwrap();
        // Falls back to the copy owned by the backing store
        assert!(!gone.missing);
        assert_eq!(gone.item.id.as_str(), "a2");

        let apex = resolved
            .items
            .iter()
            .find(|i| i.item.hash == fixtures::APEX_PREDATOR)
            .unwrap();
        assert!(!apex.missing);
        assert_eq!(apex.item.owner.as_str(), "vault");
        assert_eq!(resolved.missing_count(), 0);
    }

    #[test]
    fn test_unowned_item_is_synthesized() {
        let mut snapshot = fixtures::snapshot();
        snapshot.items.retain(|i| i.hash != fixtures::APEX_PREDATOR);
        let defs = snapshot.definitions.clone().unwrap();
        let loadout = fixtures::raid_hunter();
        let store = snapshot.stores[0].clone();

        let resolved = fully_resolve_loadout(&snapshot, &defs, &store, &loadout);
        let apex = resolved
            .items
            .iter()
            .find(|i| i.item.hash == fixtures::APEX_PREDATOR)
            .unwrap();
        assert!(apex.missing);
        assert_eq!(resolved.missing_count(), 1);
        assert_eq!(apex.item.name, "Apex Predator");
        assert_eq!(apex.item.owner.as_str(), "hunter-1");
    }

    #[test]
    fn test_mods_drop_unknown_hashes() {
        let snapshot = fixtures::snapshot();
        let defs = snapshot.definitions.as_ref().unwrap();
        let loadout = fixtures::raid_hunter();

        let resolved = fully_resolve_loadout(&snapshot, defs, &snapshot.stores[0], &loadout);
        let names: Vec<_> = resolved.mods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Mobility Mod", "Font of Might"]);
    }

    #[test]
    fn test_subclass_plugs_by_kind() {
        let snapshot = fixtures::snapshot();
        let defs = snapshot.definitions.as_ref().unwrap();
        let loadout = fixtures::raid_hunter();
        let resolved = fully_resolve_loadout(&snapshot, defs, &snapshot.stores[0], &loadout);

        let subclass = resolved.subclass();
        assert_eq!(subclass.unwrap().item.name, "Nightstalker");

        let plugs = subclass_plugs(defs, subclass);
        assert_eq!(
            plug_names(&plugs, SubclassPlugKind::Ability),
            vec!["Shadowshot: Deadfall", "Vortex Grenade"]
        );
        assert_eq!(
            plug_names(&plugs, SubclassPlugKind::Aspect),
            vec!["Trapper's Ambush"]
        );
        assert_eq!(
            plug_names(&plugs, SubclassPlugKind::Fragment),
            vec!["Echo of Persistence"]
        );
    }

    #[test]
    fn test_no_subclass_means_no_plugs() {
        let defs = fixtures::definitions();
        assert!(subclass_plugs(&defs, None).is_empty());
    }

    #[test]
    fn test_equipped_armor() {
        let snapshot = fixtures::snapshot();
        let defs = snapshot.definitions.as_ref().unwrap();
        let loadout = fixtures::raid_hunter();
        let resolved = fully_resolve_loadout(&snapshot, defs, &snapshot.stores[0], &loadout);

        assert_eq!(resolved.equipped_armor().len(), 5);
    }
}
