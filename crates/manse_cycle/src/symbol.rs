//! Glyph-level lookups over the 22 stem and branch symbols.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::CycleError;
use crate::stem::Stem;

/// Either a stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Stem(Stem),
    Branch(Branch),
}

impl Symbol {
    /// Resolve a single hanja glyph.
    pub fn from_char(c: char) -> Result<Self, CycleError> {
        if let Some(stem) = Stem::from_hanja(c) {
            return Ok(Self::Stem(stem));
        }
        Branch::from_hanja(c)
            .map(Self::Branch)
            .ok_or_else(|| CycleError::InvalidSymbol(c.to_string()))
    }

    pub fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Branch(b) => b.element(),
        }
    }

    /// Polarity by plain index parity.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Stem(s) => s.polarity(),
            Self::Branch(b) => b.polarity(),
        }
    }

    pub fn hanja(self) -> char {
        match self {
            Self::Stem(s) => s.hanja(),
            Self::Branch(b) => b.hanja(),
        }
    }
}

impl From<Stem> for Symbol {
    fn from(s: Stem) -> Self {
        Self::Stem(s)
    }
}

impl From<Branch> for Symbol {
    fn from(b: Branch) -> Self {
        Self::Branch(b)
    }
}

impl std::str::FromStr for Symbol {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(CycleError::InvalidSymbol(s.to_string())),
        }
    }
}

/// Element of a stem or branch glyph.
pub fn element_of(glyph: char) -> Result<Element, CycleError> {
    Symbol::from_char(glyph).map(Symbol::element)
}

/// Polarity of a stem or branch glyph (index parity, index 0 = yang).
pub fn polarity_of(glyph: char) -> Result<Polarity, CycleError> {
    Symbol::from_char(glyph).map(Symbol::polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_resolves() {
        let glyphs = "甲乙丙丁戊己庚辛壬癸子丑寅卯辰巳午未申酉戌亥";
        assert_eq!(glyphs.chars().count(), 22);
        for c in glyphs.chars() {
            assert_eq!(Symbol::from_char(c).unwrap().hanja(), c);
        }
    }

    #[test]
    fn element_lookup() {
        assert_eq!(element_of('壬').unwrap(), Element::Water);
        assert_eq!(element_of('未').unwrap(), Element::Earth);
        assert_eq!(element_of('酉').unwrap(), Element::Metal);
    }

    #[test]
    fn polarity_lookup() {
        assert_eq!(polarity_of('子').unwrap(), Polarity::Yang);
        assert_eq!(polarity_of('亥').unwrap(), Polarity::Yin);
        assert_eq!(polarity_of('癸').unwrap(), Polarity::Yin);
    }

    #[test]
    fn unknown_glyph_rejected() {
        assert_eq!(
            element_of('木'),
            Err(CycleError::InvalidSymbol("木".to_string()))
        );
        assert!("甲子".parse::<Symbol>().is_err());
    }
}
