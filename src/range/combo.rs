use super::error::Error;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// Two distinct cards, kept in the order they were generated.
///
/// Order is not meaningful for play but keeps output stable;
/// compare through [`Hand`] when order should not matter.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Combo(Card, Card);

impl Combo {
    pub fn new(a: Card, b: Card) -> Result<Self, Error> {
        if a == b {
            Err(Error::Combo(format!("{} paired with itself", a)))
        } else {
            Ok(Self(a, b))
        }
    }
    pub fn first(&self) -> Card {
        self.0
    }
    pub fn second(&self) -> Card {
        self.1
    }
    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
}

/// generation only ever pairs cards it has already proven distinct
impl From<(Card, Card)> for Combo {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b, "{} paired with itself", a);
        Self(a, b)
    }
}
impl From<Combo> for (Card, Card) {
    fn from(combo: Combo) -> Self {
        (combo.0, combo.1)
    }
}

/// one-way: forget the order
impl From<Combo> for Hand {
    fn from(combo: Combo) -> Self {
        Hand::add(Hand::from(combo.0), Hand::from(combo.1))
    }
}

impl TryFrom<&str> for Combo {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s).map_err(Error::Combo)?.as_slice() {
            &[a, b] => Self::new(a, b),
            _ => Err(Error::Combo(format!("combo needs 2 cards: {}", s))),
        }
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl serde::Serialize for Combo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
