//! Stem-branch pairs and the pillar formulas.
//!
//! A pair only exists in the sixty-fold cycle when stem and branch share
//! parity; every constructor here preserves that.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Reference year of the year cycle: CE 1984 = 甲子 (cycle index 0).
pub const YEAR_CYCLE_EPOCH: i32 = 1984;

/// Day-number offset so that `(jdn + 49) mod 60` is the cycle index.
const DAY_CYCLE_OFFSET: i64 = 49;

/// One pillar: a stem paired with a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at a position of the sixty-fold cycle; wraps modulo 60.
    pub fn from_cycle_index(n: i64) -> Self {
        let idx = n.rem_euclid(60);
        Self {
            stem: Stem::from_cycle(idx),
            branch: Branch::from_cycle(idx),
        }
    }

    /// Position in the sixty-fold cycle (甲子 = 0 .. 癸亥 = 59).
    ///
    /// Returns `None` for a mixed-parity pair, which the cycle never produces.
    pub fn cycle_index(&self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Solve idx ≡ s (mod 10), idx ≡ b (mod 12).
        (0..6)
            .map(|k| s + 10 * k)
            .find(|idx| idx % 12 == b)
    }

    /// Pair of a Julian Day Number.
    pub fn from_day_number(jdn: i64) -> Self {
        Self::from_cycle_index(jdn + DAY_CYCLE_OFFSET)
    }

    /// Step both stem and branch by `n` (negative steps go back).
    pub fn offset(&self, n: i64) -> Self {
        Self {
            stem: self.stem.offset(n),
            branch: self.branch.offset(n),
        }
    }

    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    pub fn korean(&self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// Year pair of a reference (solar) year, counted from 1984 = 甲子.
pub fn year_pillar_for(year: i32) -> StemBranch {
    StemBranch::from_cycle_index(i64::from(year) - i64::from(YEAR_CYCLE_EPOCH))
}

/// Stem of the 寅 month for each year stem: 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
const TIGER_MONTH_STEM: [Stem; 10] = [
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
];

/// Month pair from the year stem and the branch of the governing major term.
///
/// Months count from 寅; the stem advances one place per month from the
/// year stem's 寅-month stem.
pub fn month_pillar_for(year_stem: Stem, month_branch: Branch) -> StemBranch {
    let months_from_tiger = Branch::Yin.steps_to(month_branch);
    let base = TIGER_MONTH_STEM[year_stem.index() as usize];
    StemBranch {
        stem: base.offset(i64::from(months_from_tiger)),
        branch: month_branch,
    }
}

/// Stem of the 子 hour for each day stem: 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
const RAT_HOUR_STEM: [Stem; 10] = [
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
];

/// Hour branch for minutes since midnight (apparent solar time).
///
/// Each branch spans two hours centred on an odd hour; 子 covers 23:00–01:00.
pub fn hour_branch_for(minutes_since_midnight: f64) -> Branch {
    let slot = ((minutes_since_midnight + 60.0) / 120.0).floor() as i64;
    Branch::from_cycle(slot)
}

/// Hour pair from the day stem and hour branch.
pub fn hour_pillar_for(day_stem: Stem, hour_branch: Branch) -> StemBranch {
    let base = RAT_HOUR_STEM[day_stem.index() as usize];
    StemBranch {
        stem: base.offset(i64::from(hour_branch.index())),
        branch: hour_branch,
    }
}
