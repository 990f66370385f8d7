//! The five elements and yin/yang polarity.

use serde::{Deserialize, Serialize};

/// One of the five elements, in generating order.
///
/// Each element generates the next (`index + 1`) and controls the one after
/// that (`index + 2`), modulo 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub fn name(self) -> &'static str {
        ["Wood", "Fire", "Earth", "Metal", "Water"][self.index() as usize]
    }

    pub fn hanja(self) -> char {
        ['木', '火', '土', '金', '水'][self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        ["목", "화", "토", "금", "수"][self.index() as usize]
    }

    /// Steps from `self` to `other` along the generating cycle, in 0..5.
    pub const fn distance_to(self, other: Element) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }
}

/// Yin/yang polarity. Even cycle indices are yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a 0-based cycle index.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn wood_generates_fire_and_controls_earth() {
        assert_eq!(Element::Wood.distance_to(Element::Fire), 1);
        assert_eq!(Element::Wood.distance_to(Element::Earth), 2);
        assert_eq!(Element::Wood.distance_to(Element::Water), 4);
        assert_eq!(Element::Metal.distance_to(Element::Metal), 0);
    }

    #[test]
    fn even_index_is_yang() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(11), Polarity::Yin);
        assert_eq!(Polarity::Yin.flipped(), Polarity::Yang);
    }
}
