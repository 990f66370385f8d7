//! Derived facts attached to a pillar relative to the day stem.

use serde::{Deserialize, Serialize};

use crate::hidden_stems::hidden_stems;
use crate::pillar::StemBranch;
use crate::stem::Stem;
use crate::ten_god::{PolarityConvention, TenGod, ten_god};
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Ten gods, life stage and hidden stems of one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarDetail {
    /// Relation of the pillar stem to the day stem; `None` for the day
    /// stem itself (日元).
    pub stem_ten_god: Option<TenGod>,
    pub branch_ten_god: TenGod,
    /// Stage of the pillar's own stem over its branch.
    pub twelve_stage: TwelveStage,
    pub hidden_stems: Vec<Stem>,
}

impl PillarDetail {
    /// Describe `pillar` relative to `day_stem`.
    ///
    /// Pass `is_day_pillar = true` for the day pillar so its stem is reported
    /// as the self rather than as its own peer.
    pub fn new(
        pillar: StemBranch,
        day_stem: Stem,
        convention: PolarityConvention,
        is_day_pillar: bool,
    ) -> Self {
        Self {
            stem_ten_god: (!is_day_pillar).then(|| ten_god(day_stem, pillar.stem, convention)),
            branch_ten_god: ten_god(day_stem, pillar.branch, convention),
            twelve_stage: twelve_stage(pillar.stem, pillar.branch),
            hidden_stems: hidden_stems(pillar.branch).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;

    #[test]
    fn day_pillar_stem_is_self() {
        let day = StemBranch::new(Stem::Bing, Branch::Yin);
        let d = PillarDetail::new(day, Stem::Bing, PolarityConvention::IndexParity, true);
        assert_eq!(d.stem_ten_god, None);
        assert_eq!(d.branch_ten_god, TenGod::IndirectResource);
        assert_eq!(d.twelve_stage, TwelveStage::Birth);
        assert_eq!(d.hidden_stems, vec![Stem::Wu, Stem::Bing, Stem::Jia]);
    }

    #[test]
    fn other_pillar_stem_is_related() {
        let hour = StemBranch::new(Stem::Jia, Branch::Wu);
        let d = PillarDetail::new(hour, Stem::Bing, PolarityConvention::IndexParity, false);
        assert_eq!(d.stem_ten_god, Some(TenGod::IndirectResource));
        assert_eq!(d.branch_ten_god, TenGod::Peer);
        assert_eq!(d.twelve_stage, TwelveStage::Death);
    }
}
