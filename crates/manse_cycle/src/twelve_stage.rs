//! Twelve life stages (十二運星) of a stem over a branch.
//!
//! Each stem is born (長生) in a fixed branch. Yang stems then advance
//! forward through the branches, yin stems backward.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Polarity;
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveStage {
    /// 絕
    Severance,
    /// 胎
    Conception,
    /// 養
    Nurture,
    /// 長生
    Birth,
    /// 沐浴
    Bath,
    /// 冠帶
    Cap,
    /// 建祿
    Office,
    /// 帝旺
    Peak,
    /// 衰
    Decline,
    /// 病
    Sickness,
    /// 死
    Death,
    /// 墓
    Tomb,
}

/// All twelve stages in cycle order; index 3 is Birth (長生).
pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Severance,
    TwelveStage::Conception,
    TwelveStage::Nurture,
    TwelveStage::Birth,
    TwelveStage::Bath,
    TwelveStage::Cap,
    TwelveStage::Office,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sickness,
    TwelveStage::Death,
    TwelveStage::Tomb,
];

const STAGE_NAMES: [&str; 12] = [
    "Severance",
    "Conception",
    "Nurture",
    "Birth",
    "Bath",
    "Cap",
    "Office",
    "Peak",
    "Decline",
    "Sickness",
    "Death",
    "Tomb",
];

const STAGE_HANJA: [&str; 12] = [
    "絕", "胎", "養", "長生", "沐浴", "冠帶", "建祿", "帝旺", "衰", "病", "死", "墓",
];

const STAGE_KOREAN: [&str; 12] = [
    "절", "태", "양", "장생", "목욕", "관대", "건록", "제왕", "쇠", "병", "사", "묘",
];

const BIRTH_STAGE_INDEX: u8 = 3;

impl TwelveStage {
    pub const fn index(self) -> u8 {
        match self {
            Self::Severance => 0,
            Self::Conception => 1,
            Self::Nurture => 2,
            Self::Birth => 3,
            Self::Bath => 4,
            Self::Cap => 5,
            Self::Office => 6,
            Self::Peak => 7,
            Self::Decline => 8,
            Self::Sickness => 9,
            Self::Death => 10,
            Self::Tomb => 11,
        }
    }

    pub fn name(self) -> &'static str {
        STAGE_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        STAGE_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        STAGE_KOREAN[self.index() as usize]
    }
}

impl std::fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Branch in which each stem reaches Birth (長生).
const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Hai,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Yin,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Si,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Shen,
        Stem::Gui => Branch::Mao,
    }
}

/// Stage of `stem` over `branch`.
pub fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    let start = birth_branch(stem);
    let distance = match stem.polarity() {
        Polarity::Yang => start.steps_to(branch),
        Polarity::Yin => branch.steps_to(start),
    };
    ALL_TWELVE_STAGES[((BIRTH_STAGE_INDEX + distance) % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn bijection_for_every_stem() {
        for stem in ALL_STEMS {
            let mut seen = [false; 12];
            for branch in ALL_BRANCHES {
                seen[twelve_stage(stem, branch).index() as usize] = true;
            }
            assert!(seen.iter().all(|&s| s), "{stem} misses a stage");
        }
    }

    #[test]
    fn jia_born_in_hai_peaks_in_mao() {
        assert_eq!(twelve_stage(Stem::Jia, Branch::Hai), TwelveStage::Birth);
        assert_eq!(twelve_stage(Stem::Jia, Branch::Yin), TwelveStage::Office);
        assert_eq!(twelve_stage(Stem::Jia, Branch::Mao), TwelveStage::Peak);
        assert_eq!(twelve_stage(Stem::Jia, Branch::Wei), TwelveStage::Tomb);
        assert_eq!(twelve_stage(Stem::Jia, Branch::Shen), TwelveStage::Severance);
    }

    #[test]
    fn yi_runs_backward_from_wu() {
        assert_eq!(twelve_stage(Stem::Yi, Branch::Wu), TwelveStage::Birth);
        assert_eq!(twelve_stage(Stem::Yi, Branch::Si), TwelveStage::Bath);
        assert_eq!(twelve_stage(Stem::Yi, Branch::Mao), TwelveStage::Office);
        assert_eq!(twelve_stage(Stem::Yi, Branch::Yin), TwelveStage::Peak);
    }

    #[test]
    fn gui_born_in_mao() {
        assert_eq!(twelve_stage(Stem::Gui, Branch::Mao), TwelveStage::Birth);
        assert_eq!(twelve_stage(Stem::Gui, Branch::Zi), TwelveStage::Office);
    }
}
