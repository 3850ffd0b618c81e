//! Static category / subcategory / metric catalogue.
//!
//! The catalogue is authoritative: rankings enumerate these lists rather than
//! whatever keys happen to appear in captured data, and snapshot parsing drops
//! keys that are not listed here. Every entry carries the camelCase key used by
//! the hiscores JSON format.

use crate::errors::EventError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! keyed_enum {
    ($(#[$meta:meta])* $name:ident, $label:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every entry, in catalogue order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire key of this entry
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Look up an entry by its wire key
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Like [`Self::from_key`], failing with `UnknownCatalogueKey`
            pub fn parse(key: &str) -> Result<Self, EventError> {
                Self::from_key(key).ok_or_else(|| EventError::UnknownCatalogueKey {
                    category: $label.to_string(),
                    key: key.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let key = String::deserialize(deserializer)?;
                Self::parse(&key).map_err(serde::de::Error::custom)
            }
        }
    };
}

keyed_enum!(
    /// Top-level statistic category
    Category, "category", {
        Skills => "skills",
        Minigames => "minigames",
        Bosses => "bosses",
    }
);

keyed_enum!(
    /// Leaf metric recorded for a subcategory
    Metric, "metric", {
        Rank => "rank",
        Level => "level",
        Xp => "xp",
        Score => "score",
        Kills => "kills",
    }
);

keyed_enum!(
    Skill, "skill", {
        Overall => "overall",
        Attack => "attack",
        Defence => "defence",
        Strength => "strength",
        Hitpoints => "hitpoints",
        Ranged => "ranged",
        Prayer => "prayer",
        Magic => "magic",
        Cooking => "cooking",
        Woodcutting => "woodcutting",
        Fletching => "fletching",
        Fishing => "fishing",
        Firemaking => "firemaking",
        Crafting => "crafting",
        Smithing => "smithing",
        Mining => "mining",
        Herblore => "herblore",
        Agility => "agility",
        Thieving => "thieving",
        Slayer => "slayer",
        Farming => "farming",
        Runecrafting => "runecrafting",
        Hunter => "hunter",
        Construction => "construction",
    }
);

keyed_enum!(
    Minigame, "minigame", {
        LeaguePoints => "leaguePoints",
        DeadmanPoints => "deadmanPoints",
        BountyHunter => "bountyHunter",
        BountyHunterRogues => "bountyHunterRogues",
        BountyHunterLegacy => "bountyHunterLegacy",
        BountyHunterRoguesLegacy => "bountyHunterRoguesLegacy",
        ClueScrollsAll => "clueScrollsAll",
        ClueScrollsBeginner => "clueScrollsBeginner",
        ClueScrollsEasy => "clueScrollsEasy",
        ClueScrollsMedium => "clueScrollsMedium",
        ClueScrollsHard => "clueScrollsHard",
        ClueScrollsElite => "clueScrollsElite",
        ClueScrollsMaster => "clueScrollsMaster",
        LastManStanding => "lms",
        PvpArena => "pvpArena",
        SoulWarsZeal => "soulWarsZeal",
        RiftsClosed => "riftsClosed",
        ColosseumGlory => "colosseumGlory",
    }
);

keyed_enum!(
    Boss, "boss", {
        AbyssalSire => "abyssalSire",
        AlchemicalHydra => "alchemicalHydra",
        Amoxliatl => "amoxliatl",
        Araxxor => "araxxor",
        Artio => "artio",
        BarrowsChests => "barrowsChests",
        Bryophyta => "bryophyta",
        Callisto => "callisto",
        Calvarion => "calvarion",
        Cerberus => "cerberus",
        ChambersOfXeric => "chambersOfXeric",
        ChambersOfXericChallengeMode => "chambersOfXericChallengeMode",
        ChaosElemental => "chaosElemental",
        ChaosFanatic => "chaosFanatic",
        CommanderZilyana => "commanderZilyana",
        CorporealBeast => "corporealBeast",
        CrazyArchaeologist => "crazyArchaeologist",
        DagannothPrime => "dagannothPrime",
        DagannothRex => "dagannothRex",
        DagannothSupreme => "dagannothSupreme",
        DerangedArchaeologist => "derangedArchaeologist",
        DukeSucellus => "dukeSucellus",
        GeneralGraardor => "generalGraardor",
        GiantMole => "giantMole",
        GrotesqueGuardians => "grotesqueGuardians",
        Hespori => "hespori",
        KalphiteQueen => "kalphiteQueen",
        KingBlackDragon => "kingBlackDragon",
        Kraken => "kraken",
        KrilTsutsaroth => "krilTsutsaroth",
        LunarChests => "lunarChests",
        Mimic => "mimic",
        Nex => "nex",
        Nightmare => "nightmare",
        PhosanisNightmare => "phosanisNightmare",
        Obor => "obor",
        PhantomMuspah => "phantomMuspah",
        Sarachnis => "sarachnis",
        Scorpia => "scorpia",
        Scurrius => "scurrius",
        Skotizo => "skotizo",
        SolHeredit => "solHeredit",
        Spindel => "spindel",
        Tempoross => "tempoross",
        Gauntlet => "gauntlet",
        CorruptedGauntlet => "corruptedGauntlet",
        Hueycoatl => "hueycoatl",
        Leviathan => "leviathan",
        RoyalTitans => "royalTitans",
        Whisperer => "whisperer",
        TheatreOfBlood => "theatreOfBlood",
        TheatreOfBloodHardMode => "theatreOfBloodHardMode",
        ThermonuclearSmokeDevil => "thermonuclearSmokeDevil",
        TombsOfAmascut => "tombsOfAmascut",
        TombsOfAmascutExpertMode => "tombsOfAmascutExpertMode",
        TzKalZuk => "tzKalZuk",
        TzTokJad => "tzTokJad",
        Vardorvis => "vardorvis",
        Venenatis => "venenatis",
        Vetion => "vetion",
        Vorkath => "vorkath",
        Wintertodt => "wintertodt",
        Zalcano => "zalcano",
        Zulrah => "zulrah",
    }
);

impl Category {
    /// Metrics recorded for every subcategory of this category, in wire order
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Category::Skills => &[Metric::Rank, Metric::Level, Metric::Xp],
            Category::Minigames => &[Metric::Rank, Metric::Score],
            Category::Bosses => &[Metric::Rank, Metric::Kills],
        }
    }

    pub fn tracks(self, metric: Metric) -> bool {
        self.metrics().contains(&metric)
    }

    /// Full catalogue of subcategories for this category
    pub fn subcategories(self) -> Vec<Subcategory> {
        match self {
            Category::Skills => Skill::ALL.iter().copied().map(Subcategory::Skill).collect(),
            Category::Minigames => Minigame::ALL
                .iter()
                .copied()
                .map(Subcategory::Minigame)
                .collect(),
            Category::Bosses => Boss::ALL.iter().copied().map(Subcategory::Boss).collect(),
        }
    }

    /// Human-facing heading
    pub fn title(self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Minigames => "Minigames",
            Category::Bosses => "Bosses",
        }
    }
}

/// A catalogue entry qualified by its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subcategory {
    Skill(Skill),
    Minigame(Minigame),
    Boss(Boss),
}

impl Subcategory {
    pub fn category(self) -> Category {
        match self {
            Subcategory::Skill(_) => Category::Skills,
            Subcategory::Minigame(_) => Category::Minigames,
            Subcategory::Boss(_) => Category::Bosses,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Subcategory::Skill(s) => s.key(),
            Subcategory::Minigame(m) => m.key(),
            Subcategory::Boss(b) => b.key(),
        }
    }

    /// Look up a subcategory key within a category
    pub fn parse(category: Category, key: &str) -> Result<Self, EventError> {
        match category {
            Category::Skills => Skill::parse(key).map(Subcategory::Skill),
            Category::Minigames => Minigame::parse(key).map(Subcategory::Minigame),
            Category::Bosses => Boss::parse(key).map(Subcategory::Boss),
        }
    }

    /// Parse a dotted `category.key` path, e.g. `bosses.zulrah`
    pub fn parse_path(path: &str) -> Result<Self, EventError> {
        let (category, key) =
            path.split_once('.')
                .ok_or_else(|| EventError::UnknownCatalogueKey {
                    category: "subcategory".to_string(),
                    key: path.to_string(),
                })?;
        Subcategory::parse(Category::parse(category)?, key)
    }

    /// Every subcategory of every category, in catalogue order
    pub fn all() -> Vec<Subcategory> {
        Category::ALL
            .iter()
            .flat_map(|c| c.subcategories())
            .collect()
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category().key(), self.key())
    }
}
