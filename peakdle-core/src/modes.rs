use peakdle_types::{AttributeSpec, DirectionStyle, ModeKey};

/// How a mode records its day in the daily-plays blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStyle {
    WinLose,
    /// Modes without a binary win/lose store the primary guess count.
    GuessCount,
}

/// Static definition of a playable mode: its key, schema, guess limit, and
/// flow shape. The catalog itself is supplied separately so tiers can pair
/// different datasets with the same schema.
#[derive(Debug, Clone)]
pub struct ModeSpec {
    pub key: ModeKey,
    pub schema: Vec<AttributeSpec>,
    pub max_guesses: usize,
    pub two_phase: bool,
    pub outcome_style: OutcomeStyle,
}

/// Cooking levels for the edibles category, mildest first.
pub const EDIBLE_TIERS: [&str; 5] = ["base", "cooked", "well-done", "burnt", "incinerated"];

pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Edibles mode at the given cooking level.
pub fn edibles(tier: &str) -> ModeSpec {
    ModeSpec {
        key: ModeKey::with_tier("edibles", tier),
        schema: vec![
            AttributeSpec::numeric("Hunger", 10.0, DirectionStyle::HighLow),
            AttributeSpec::numeric("Weight", 0.5, DirectionStyle::HeavyLight),
            AttributeSpec::numeric("Stamina", 10.0, DirectionStyle::HighLow),
            AttributeSpec::tag_set("Status Effects"),
            AttributeSpec::tag_set("Locations"),
        ],
        max_guesses: DEFAULT_MAX_GUESSES,
        two_phase: false,
        outcome_style: OutcomeStyle::WinLose,
    }
}

pub fn equipments() -> ModeSpec {
    ModeSpec {
        key: ModeKey::new("equipments"),
        schema: vec![
            AttributeSpec::numeric("Weight", 1.0, DirectionStyle::HeavyLight),
            AttributeSpec::tag_set("Status Effects"),
            AttributeSpec::exact("Type"),
            AttributeSpec::exact("Rarity"),
            AttributeSpec::numeric("Range", 3.0, DirectionStyle::FarClose),
        ],
        max_guesses: DEFAULT_MAX_GUESSES,
        two_phase: false,
        outcome_style: OutcomeStyle::WinLose,
    }
}

/// Image-reveal mode: identity is the only comparison, the picture zooms
/// out as guesses accumulate, and finding the badge opens the cosmetic
/// reward phase.
pub fn badges() -> ModeSpec {
    ModeSpec {
        key: ModeKey::new("badges"),
        schema: Vec::new(),
        max_guesses: DEFAULT_MAX_GUESSES,
        two_phase: true,
        outcome_style: OutcomeStyle::GuessCount,
    }
}

/// Zoom level for the badge image, from 5 (tightest crop) down to 1, one
/// step per submitted guess.
pub fn reveal_level(guess_count: usize) -> u8 {
    (5usize.saturating_sub(guess_count)).max(1) as u8
}
