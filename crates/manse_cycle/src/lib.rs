//! Sexagenary (stem-branch) cycle arithmetic.
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches with their elements
//!   and polarities
//! - Stem-branch pairs and their placement in the sixty-fold cycle
//! - Hidden stems, ten-god relations and the twelve life stages
//! - The twenty-four solar terms and the pillar formulas keyed on them
//! - Luck-cycle direction, starting age, decadal and annual pillars
//!
//! Everything here is pure table lookup and modular arithmetic; the
//! astronomy that decides *which* pair applies lives in `manse_chart`.

pub mod branch;
pub mod detail;
pub mod element;
pub mod error;
pub mod hidden_stems;
pub mod luck;
pub mod pillar;
pub mod solar_term;
pub mod stem;
pub mod symbol;
pub mod ten_god;
pub mod twelve_stage;

pub use branch::{ALL_BRANCHES, Branch};
pub use detail::PillarDetail;
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::CycleError;
pub use hidden_stems::{dominant_stem, hidden_stems};
pub use luck::{
    ANNUAL_PILLAR_COUNT, AnnualPillar, DECADAL_PILLAR_COUNT, Gender, LuckDirection, LuckPillar,
    StartingAge, age_years_months, annual_pillars, decadal_pillars, luck_direction,
};
pub use pillar::{
    StemBranch, YEAR_CYCLE_EPOCH, hour_branch_for, hour_pillar_for, month_pillar_for,
    year_pillar_for,
};
pub use solar_term::{ALL_SOLAR_TERMS, MAJOR_TERMS, SolarTerm};
pub use stem::{ALL_STEMS, Stem};
pub use symbol::{Symbol, element_of, polarity_of};
pub use ten_god::{ALL_TEN_GODS, PolarityConvention, TenGod, ten_god};
pub use twelve_stage::{ALL_TWELVE_STAGES, TwelveStage, twelve_stage};
