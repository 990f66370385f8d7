//! The ten heavenly stems (天干).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::CycleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (index 0 = Jia 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position; any integer wraps modulo 10.
    pub fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    pub fn from_index(index: usize) -> Result<Self, CycleError> {
        ALL_STEMS.get(index).copied().ok_or(CycleError::InvalidIndex {
            cycle: "stem",
            index,
        })
    }

    /// Romanized (pinyin) name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> char {
        STEM_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// Stems pair off by element: 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem `n` places further along the cycle (negative steps go back).
    pub fn offset(self, n: i64) -> Self {
        Self::from_cycle(self.index() as i64 + n)
    }

    pub fn from_hanja(c: char) -> Option<Self> {
        STEM_HANJA
            .iter()
            .position(|&h| h == c)
            .map(|i| ALL_STEMS[i])
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl std::str::FromStr for Stem {
    type Err = CycleError;

    /// Accepts the hanja glyph or the romanized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Self::from_hanja(c) {
                return Ok(stem);
            }
        }
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CycleError::InvalidSymbol(s.to_string()))
    }
}
