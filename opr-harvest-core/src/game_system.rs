/// Army Forge game systems (rulesets) that publish official army books.
///
/// This enum centralizes system identity (listing slugs, numeric ids used
/// by the detail endpoint, display names and CLI aliases) so the rest of
/// the workspace never matches on raw strings or magic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameSystem {
    GrimdarkFuture,
    GrimdarkFutureFirefight,
    AgeOfFantasy,
    AgeOfFantasySkirmish,
    AgeOfFantasyRegiments,
    AgeOfFantasyQuest,
    GrimdarkFutureStarQuest,
}

/// All game systems in scan order. Deduplication is first-seen-wins, so this
/// order decides which system's listing metadata is kept.
const ALL_SYSTEMS: &[GameSystem] = &[
    GameSystem::GrimdarkFuture,
    GameSystem::GrimdarkFutureFirefight,
    GameSystem::AgeOfFantasy,
    GameSystem::AgeOfFantasySkirmish,
    GameSystem::AgeOfFantasyRegiments,
    GameSystem::AgeOfFantasyQuest,
    GameSystem::GrimdarkFutureStarQuest,
];

impl GameSystem {
    /// Slug used by the listing endpoint and written to output records.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::GrimdarkFuture => "grimdark-future",
            Self::GrimdarkFutureFirefight => "grimdark-future-firefight",
            Self::AgeOfFantasy => "age-of-fantasy",
            Self::AgeOfFantasySkirmish => "age-of-fantasy-skirmish",
            Self::AgeOfFantasyRegiments => "age-of-fantasy-regiments",
            Self::AgeOfFantasyQuest => "age-of-fantasy-quest",
            Self::GrimdarkFutureStarQuest => "grimdark-future-star-quest",
        }
    }

    /// Numeric id used by the detail endpoint and in `enabledGameSystems`.
    pub fn id(&self) -> u32 {
        match self {
            Self::GrimdarkFuture => 2,
            Self::GrimdarkFutureFirefight => 3,
            Self::AgeOfFantasy => 4,
            Self::AgeOfFantasySkirmish => 5,
            Self::AgeOfFantasyRegiments => 6,
            Self::AgeOfFantasyQuest => 7,
            Self::GrimdarkFutureStarQuest => 9,
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GrimdarkFuture => "Grimdark Future",
            Self::GrimdarkFutureFirefight => "Grimdark Future: Firefight",
            Self::AgeOfFantasy => "Age of Fantasy",
            Self::AgeOfFantasySkirmish => "Age of Fantasy: Skirmish",
            Self::AgeOfFantasyRegiments => "Age of Fantasy: Regiments",
            Self::AgeOfFantasyQuest => "Age of Fantasy: Quest",
            Self::GrimdarkFutureStarQuest => "Grimdark Future: Star Quest",
        }
    }

    /// Short names accepted in addition to the slug (case-insensitive).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::GrimdarkFuture => &["gf"],
            Self::GrimdarkFutureFirefight => &["gff", "firefight"],
            Self::AgeOfFantasy => &["aof"],
            Self::AgeOfFantasySkirmish => &["aofs", "skirmish"],
            Self::AgeOfFantasyRegiments => &["aofr", "regiments"],
            Self::AgeOfFantasyQuest => &["aofq", "quest"],
            Self::GrimdarkFutureStarQuest => &["gfsq", "star-quest"],
        }
    }

    /// Look up a system by its numeric id.
    pub fn from_id(id: u32) -> Option<GameSystem> {
        ALL_SYSTEMS.iter().copied().find(|s| s.id() == id)
    }

    /// All 7 game systems, in scan order.
    pub fn all() -> &'static [GameSystem] {
        ALL_SYSTEMS
    }
}

impl std::fmt::Display for GameSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl serde::Serialize for GameSystem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

/// Error returned when a string cannot be parsed into a `GameSystem`.
#[derive(Debug, Clone)]
pub struct GameSystemParseError(pub String);

impl std::fmt::Display for GameSystemParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown game system: '{}'", self.0)
    }
}

impl std::error::Error for GameSystemParseError {}

impl std::str::FromStr for GameSystem {
    type Err = GameSystemParseError;

    /// Parse a game system from its slug, alias, or numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(id) = lower.parse::<u32>() {
            return GameSystem::from_id(id).ok_or_else(|| GameSystemParseError(s.to_string()));
        }
        for &system in ALL_SYSTEMS {
            if system.slug() == lower || system.aliases().contains(&lower.as_str()) {
                return Ok(system);
            }
        }
        Err(GameSystemParseError(s.to_string()))
    }
}
