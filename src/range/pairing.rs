use crate::cards::suit::Suit;

/// Which (suit, suit) pairs a two-rank shape allows.
///
/// Pairs come out in a fixed order derived from [`Suit::all`],
/// first suit major, so output is stable across calls.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Pairing {
    /// 4 x 4 = 16, any suit relation
    Product,
    /// 4 x 3 = 12, suits differ
    Permutation,
    /// 4, suits match
    Diagonal,
}

impl Pairing {
    pub fn suits(self) -> impl Iterator<Item = (Suit, Suit)> {
        Suit::all()
            .into_iter()
            .flat_map(|a| Suit::all().into_iter().map(move |b| (a, b)))
            .filter(move |(a, b)| match self {
                Self::Product => true,
                Self::Permutation => a != b,
                Self::Diagonal => a == b,
            })
    }
    pub const fn size(&self) -> usize {
        match self {
            Self::Product => 16,
            Self::Permutation => 12,
            Self::Diagonal => 4,
        }
    }
}
