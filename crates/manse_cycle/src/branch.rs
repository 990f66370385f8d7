//! The twelve earthly branches (地支).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::CycleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (index 0 = Zi 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Element of each branch: 子 water, 丑 earth, 寅卯 wood, 辰 earth, 巳午 fire,
/// 未 earth, 申酉 metal, 戌 earth, 亥 water.
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle position; any integer wraps modulo 12.
    pub fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    pub fn from_index(index: usize) -> Result<Self, CycleError> {
        ALL_BRANCHES.get(index).copied().ok_or(CycleError::InvalidIndex {
            cycle: "branch",
            index,
        })
    }

    /// Romanized (pinyin) name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> char {
        BRANCH_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    /// Zodiac animal of the branch.
    pub fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    /// Polarity by plain index parity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Branch `n` places further along the cycle (negative steps go back).
    pub fn offset(self, n: i64) -> Self {
        Self::from_cycle(self.index() as i64 + n)
    }

    /// Steps from `self` forward to `other`, in 0..12.
    pub const fn steps_to(self, other: Branch) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }

    pub fn from_hanja(c: char) -> Option<Self> {
        BRANCH_HANJA
            .iter()
            .position(|&h| h == c)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl std::str::FromStr for Branch {
    type Err = CycleError;

    /// Accepts the hanja glyph or the romanized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Self::from_hanja(c) {
                return Ok(branch);
            }
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CycleError::InvalidSymbol(s.to_string()))
    }
}
