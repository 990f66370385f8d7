//! Ten-god (十神) relation of a stem or branch to the day stem.
//!
//! The relation is fixed by the element distance from the day stem along
//! the generating cycle (0–4) and by whether polarities agree.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Polarity;
use crate::stem::Stem;
use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Peer,
    /// 劫財: same element, opposite polarity.
    Rival,
    /// 食神: generated by the day stem, same polarity.
    EatingGod,
    /// 傷官: generated by the day stem, opposite polarity.
    HurtingOfficer,
    /// 偏財: controlled by the day stem, same polarity.
    IndirectWealth,
    /// 正財: controlled by the day stem, opposite polarity.
    DirectWealth,
    /// 偏官: controls the day stem, same polarity.
    SevenKillings,
    /// 正官: controls the day stem, opposite polarity.
    DirectOfficer,
    /// 偏印: generates the day stem, same polarity.
    IndirectResource,
    /// 正印: generates the day stem, opposite polarity.
    DirectResource,
}

/// All ten relations, ordered by element distance then polarity.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::Rival,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

const TEN_GOD_NAMES: [&str; 10] = [
    "Peer",
    "Rival",
    "Eating God",
    "Hurting Officer",
    "Indirect Wealth",
    "Direct Wealth",
    "Seven Killings",
    "Direct Officer",
    "Indirect Resource",
    "Direct Resource",
];

const TEN_GOD_HANJA: [&str; 10] = [
    "比肩", "劫財", "食神", "傷官", "偏財", "正財", "偏官", "正官", "偏印", "正印",
];

const TEN_GOD_KOREAN: [&str; 10] = [
    "비견", "겁재", "식신", "상관", "편재", "정재", "편관", "정관", "편인", "정인",
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Peer => 0,
            Self::Rival => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::SevenKillings => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }

    pub fn name(self) -> &'static str {
        TEN_GOD_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        TEN_GOD_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        TEN_GOD_KOREAN[self.index() as usize]
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How branch polarity is read when relating a branch to the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarityConvention {
    /// Plain index parity for every symbol.
    #[default]
    #[serde(rename = "index")]
    IndexParity,
    /// 子 and 午 read as yin, 巳 and 亥 as yang, following their dominant
    /// hidden stems. Stems and the other branches keep index parity.
    Functional,
}

impl PolarityConvention {
    /// Polarity of a symbol under this convention.
    pub fn polarity(self, symbol: Symbol) -> Polarity {
        match (self, symbol) {
            (
                Self::Functional,
                Symbol::Branch(Branch::Zi | Branch::Wu | Branch::Si | Branch::Hai),
            ) => symbol.polarity().flipped(),
            _ => symbol.polarity(),
        }
    }
}

impl PolarityConvention {
    pub fn name(self) -> &'static str {
        match self {
            Self::IndexParity => "index",
            Self::Functional => "functional",
        }
    }
}

impl std::str::FromStr for PolarityConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" | "index-parity" | "parity" => Ok(Self::IndexParity),
            "functional" => Ok(Self::Functional),
            _ => Err(format!("unknown polarity convention: {s} (expected index or functional)")),
        }
    }
}

/// Ten-god relation of `target` to `day_stem`.
pub fn ten_god(
    day_stem: Stem,
    target: impl Into<Symbol>,
    convention: PolarityConvention,
) -> TenGod {
    let target = target.into();
    let distance = day_stem.element().distance_to(target.element());
    let differs = day_stem.polarity() != convention.polarity(target);
    ALL_TEN_GODS[(distance * 2 + u8::from(differs)) as usize]
}
