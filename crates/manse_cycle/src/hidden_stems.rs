//! Hidden stems (支藏干) of each branch, early → middle → dominant.

use crate::branch::Branch;
use crate::stem::Stem;

use Stem::*;

const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Ren, Gui],       // 子
    &[Gui, Xin, Ji],   // 丑
    &[Wu, Bing, Jia],  // 寅
    &[Jia, Yi],        // 卯
    &[Yi, Gui, Wu],    // 辰
    &[Wu, Geng, Bing], // 巳
    &[Bing, Ji, Ding], // 午
    &[Ding, Yi, Ji],   // 未
    &[Wu, Ren, Geng],  // 申
    &[Geng, Xin],      // 酉
    &[Xin, Ding, Wu],  // 戌
    &[Wu, Jia, Ren],   // 亥
];

/// Hidden stems of a branch; the last entry is the dominant (本氣) stem.
pub fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_STEMS[branch.index() as usize]
}

/// Dominant hidden stem of a branch.
pub fn dominant_stem(branch: Branch) -> Stem {
    let stems = hidden_stems(branch);
    stems[stems.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn two_or_three_per_branch() {
        for b in ALL_BRANCHES {
            let n = hidden_stems(b).len();
            assert!((2..=3).contains(&n), "{b}: {n}");
        }
    }

    #[test]
    fn dominant_stem_shares_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(dominant_stem(b).element(), b.element(), "{b}");
        }
    }

    #[test]
    fn cardinal_branches_hold_two() {
        assert_eq!(hidden_stems(Branch::Mao), &[Jia, Yi]);
        assert_eq!(hidden_stems(Branch::You), &[Geng, Xin]);
        assert_eq!(hidden_stems(Branch::Zi), &[Ren, Gui]);
    }
}
