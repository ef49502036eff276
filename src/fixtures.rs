//! Shared test data: a small hunter-and-titan account with a few loadouts

use chrono::{TimeZone, Utc};

use crate::models::bucket;
use crate::models::definitions::{
    SocketDefinition, ARMOR_STATS, STAT_INTELLECT, STAT_MOBILITY, STAT_STRENGTH,
};
use crate::models::loadout::LOCKED_EXOTIC_NO_EXOTIC;
use crate::models::{
    ArtifactUnlocks, ClassDefinition, Definitions, DestinyClass, InventoryItem, InventorySnapshot,
    ItemDefinition, ItemStat, ItemTier, Loadout, LoadoutItem, LoadoutParameters, StatDefinition,
    Store, StoreId,
};

pub const NIGHTSTALKER: u32 = 1000;
pub const DEADFALL: u32 = 2001;
pub const VORTEX_GRENADE: u32 = 2002;
pub const TRAPPERS_AMBUSH: u32 = 2003;
pub const ECHO_OF_PERSISTENCE: u32 = 2004;
pub const ECHO_OF_EXPULSION: u32 = 2005;
pub const ACE_OF_SPADES: u32 = 3001;
pub const CALUS_MINI_TOOL: u32 = 3002;
pub const APEX_PREDATOR: u32 = 3003;
pub const NIGHTHAWK: u32 = 4001;
pub const GAUNTLETS: u32 = 4002;
pub const CHEST: u32 = 4003;
pub const LEGS: u32 = 4004;
pub const CLOAK: u32 = 4005;
pub const MOBILITY_MOD: u32 = 5001;
pub const FONT_OF_MIGHT: u32 = 5002;
pub const ANTI_BARRIER_SCOUT: u32 = 6001;
pub const GHOST_SHELL: u32 = 7001;

const STAT_NAMES: [&str; 6] = [
    "Mobility",
    "Resilience",
    "Recovery",
    "Discipline",
    "Intellect",
    "Strength",
];

fn def(hash: u32, name: &str, bucket_hash: u32, item_type: &str) -> ItemDefinition {
    let mut d = ItemDefinition::new(hash, name, bucket_hash);
    d.item_type = item_type.to_string();
    d.tier = ItemTier::Legendary;
    d
}

pub fn definitions() -> Definitions {
    let mut defs = Definitions::default();

    for (hash, name) in ARMOR_STATS.iter().zip(STAT_NAMES) {
        defs.stats.insert(
            *hash,
            StatDefinition {
                hash: *hash,
                name: name.to_string(),
            },
        );
    }
    defs.stats.insert(
        4284893193,
        StatDefinition {
            hash: 4284893193,
            name: "Rounds Per Minute".into(),
        },
    );

    defs.classes = [
        (DestinyClass::Titan, "Titan"),
        (DestinyClass::Hunter, "Hunter"),
        (DestinyClass::Warlock, "Warlock"),
    ]
    .into_iter()
    .map(|(class_type, name)| ClassDefinition {
        class_type,
        name: name.into(),
    })
    .collect();

    let mut subclass = def(NIGHTSTALKER, "Nightstalker", bucket::SUBCLASS, "Subclass");
    subclass.class_type = DestinyClass::Hunter;
    subclass.sockets = [309722977, 309722977, 2140934067, 271461480, 271461480]
        .into_iter()
        .map(|category_hash| SocketDefinition { category_hash })
        .collect();
    defs.insert_item(subclass);

    defs.insert_item(def(DEADFALL, "Shadowshot: Deadfall", 0, "Super Ability"));
    defs.insert_item(def(VORTEX_GRENADE, "Vortex Grenade", 0, "Grenade"));
    defs.insert_item(def(TRAPPERS_AMBUSH, "Trapper's Ambush", 0, "Aspect"));
    let mut persistence = def(ECHO_OF_PERSISTENCE, "Echo of Persistence", 0, "Fragment");
    persistence.stat_bonuses.insert(STAT_MOBILITY, -10);
    defs.insert_item(persistence);
    let mut expulsion = def(ECHO_OF_EXPULSION, "Echo of Expulsion", 0, "Fragment");
    expulsion.stat_bonuses.insert(STAT_INTELLECT, 10);
    defs.insert_item(expulsion);

    let mut ace = def(ACE_OF_SPADES, "Ace of Spades", bucket::KINETIC_WEAPONS, "Hand Cannon");
    ace.tier = ItemTier::Exotic;
    defs.insert_item(ace);
    defs.insert_item(def(CALUS_MINI_TOOL, "Calus Mini-Tool", bucket::ENERGY_WEAPONS, "Submachine Gun"));
    defs.insert_item(def(APEX_PREDATOR, "Apex Predator", bucket::POWER_WEAPONS, "Rocket Launcher"));

    let mut nighthawk = def(NIGHTHAWK, "Celestial Nighthawk", bucket::HELMET, "Helmet");
    nighthawk.tier = ItemTier::Exotic;
    nighthawk.class_type = DestinyClass::Hunter;
    defs.insert_item(nighthawk);
    for (hash, name, bucket_hash, item_type) in [
        (GAUNTLETS, "Wild Anthem Grips", bucket::GAUNTLETS, "Gauntlets"),
        (CHEST, "Wild Anthem Vest", bucket::CHEST_ARMOR, "Chest Armor"),
        (LEGS, "Wild Anthem Strides", bucket::LEG_ARMOR, "Leg Armor"),
        (CLOAK, "Wild Anthem Cloak", bucket::CLASS_ARMOR, "Hunter Cloak"),
    ] {
        let mut d = def(hash, name, bucket_hash, item_type);
        d.class_type = DestinyClass::Hunter;
        for stat in ARMOR_STATS {
            d.base_stats.insert(stat, 10);
        }
        defs.insert_item(d);
    }

    let mut mobility_mod = def(MOBILITY_MOD, "Mobility Mod", 0, "General Armor Mod");
    mobility_mod.stat_bonuses.insert(STAT_MOBILITY, 10);
    defs.insert_item(mobility_mod);
    let mut font = def(FONT_OF_MIGHT, "Font of Might", 0, "Chest Armor Mod");
    font.runtime_stat_bonuses.insert(STAT_STRENGTH, 30);
    defs.insert_item(font);

    defs.insert_item(def(ANTI_BARRIER_SCOUT, "Anti-Barrier Scout Rifle", 0, "Artifact Perk"));
    defs.insert_item(def(GHOST_SHELL, "Ophiuchus Shell", bucket::GHOST, "Ghost Shell"));

    defs
}

pub fn stores() -> Vec<Store> {
    vec![
        Store::character("hunter-1", "Hunter", DestinyClass::Hunter)
            .with_last_played(Utc.with_ymd_and_hms(2025, 1, 12, 18, 0, 0).unwrap()),
        Store::character("titan-1", "Titan", DestinyClass::Titan)
            .with_last_played(Utc.with_ymd_and_hms(2025, 1, 10, 18, 0, 0).unwrap()),
        Store::vault(),
    ]
}

fn owned(defs: &Definitions, id: &str, hash: u32, owner: &str) -> InventoryItem {
    let mut item = InventoryItem::from_definition(&defs.items[&hash], StoreId::from(owner));
    item.id = id.into();
    item.power = 1810;
    item
}

pub fn items(defs: &Definitions) -> Vec<InventoryItem> {
    let mut items = vec![owned(defs, "s1", NIGHTSTALKER, "hunter-1")];

    let mut ace = owned(defs, "w1", ACE_OF_SPADES, "hunter-1");
    ace.equipped = true;
    ace.locked = true;
    ace.masterworked = true;
    ace.perks = vec!["Memento Mori".into(), "Paracausal Shot".into()];
    ace.stats = vec![ItemStat {
        stat_hash: 4284893193,
        value: 140,
    }];
    items.push(ace);
    items.push(owned(defs, "w2", CALUS_MINI_TOOL, "hunter-1"));
    items.push(owned(defs, "w3", APEX_PREDATOR, "vault"));

    let mut helmet = owned(defs, "a1", NIGHTHAWK, "hunter-1");
    helmet.masterworked = true;
    helmet.stats = ARMOR_STATS
        .iter()
        .map(|&stat_hash| ItemStat {
            stat_hash,
            value: 10,
        })
        .collect();
    items.push(helmet);
    items.push(owned(defs, "a2", GAUNTLETS, "hunter-1"));
    items.push(owned(defs, "a3", CHEST, "hunter-1"));
    items.push(owned(defs, "a4", LEGS, "hunter-1"));
    items.push(owned(defs, "a5", CLOAK, "hunter-1"));
    items.push(owned(defs, "g1", GHOST_SHELL, "vault"));
    items
}

pub fn snapshot() -> InventorySnapshot {
    let defs = definitions();
    InventorySnapshot {
        items: items(&defs),
        definitions: Some(defs),
        stores: stores(),
    }
}

/// Full hunter build with subclass, mods, artifact and exotic choice
pub fn raid_hunter() -> Loadout {
    let mut loadout = Loadout::new("loadout-raid", "Raid Hunter", DestinyClass::Hunter);
    loadout.notes = Some("Use with tether".into());
    loadout.last_updated_at = Some(1_736_899_200_000);
    loadout.items = vec![
        LoadoutItem::new("a3", CHEST, true),
        LoadoutItem::new("w2", CALUS_MINI_TOOL, true),
        LoadoutItem::new("w1", ACE_OF_SPADES, true),
        LoadoutItem::new("s1", NIGHTSTALKER, true)
            .with_override(0, DEADFALL)
            .with_override(1, VORTEX_GRENADE)
            .with_override(2, TRAPPERS_AMBUSH)
            .with_override(3, ECHO_OF_PERSISTENCE),
        LoadoutItem::new("a1", NIGHTHAWK, true),
        LoadoutItem::new("a2", GAUNTLETS, true),
        LoadoutItem::new("a4", LEGS, true),
        LoadoutItem::new("a5", CLOAK, true),
        LoadoutItem::new("w3", APEX_PREDATOR, false),
        LoadoutItem::new("gone", GAUNTLETS, false),
        LoadoutItem::new("dismantled", 999_999, false),
    ];
    loadout.parameters = Some(LoadoutParameters {
        mods: vec![MOBILITY_MOD, FONT_OF_MIGHT, 888_888],
        artifact_unlocks: Some(ArtifactUnlocks {
            season_number: 25,
            unlocked_item_hashes: vec![ANTI_BARRIER_SCOUT, 777_777],
        }),
        exotic_armor_hash: Some(NIGHTHAWK.into()),
        include_runtime_stat_benefits: None,
    });
    loadout
}

/// Class-agnostic loadout with nothing but notes
pub fn any_class_notes() -> Loadout {
    let mut loadout = Loadout::new("loadout-any", "Reminders", DestinyClass::Unknown);
    loadout.notes = Some("Farm, then infuse".into());
    loadout.parameters = Some(LoadoutParameters {
        exotic_armor_hash: Some(LOCKED_EXOTIC_NO_EXOTIC),
        ..Default::default()
    });
    loadout
}

/// Warlock loadout on an account with no warlock
pub fn orphan_warlock() -> Loadout {
    Loadout::new("loadout-warlock", "Well Skating", DestinyClass::Warlock)
}

pub fn loadouts() -> Vec<Loadout> {
    vec![raid_hunter(), any_class_notes(), orphan_warlock()]
}
