use super::combo::Combo;
use super::error::Error;
use super::notation::Notation;
use crate::cards::hand::Hand;
use std::collections::HashSet;

/// A list of shorthand tokens such as `"AA, AKs, Kxo"`, expanded into
/// the union of their combos. Combos are kept in first-seen order and
/// a combo naming the same two cards as an earlier one is dropped.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Range {
    input: String,
    notations: Vec<Notation>,
    combos: Vec<Combo>,
}

impl Range {
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn notations(&self) -> &[Notation] {
        &self.notations
    }
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }
    pub fn len(&self) -> usize {
        self.combos.len()
    }
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
    /// order-free membership
    pub fn contains(&self, combo: &Combo) -> bool {
        let hand = Hand::from(*combo);
        self.combos.iter().any(|c| Hand::from(*c) == hand)
    }
    /// combos sorted by the deck order of their (unordered) cards
    pub fn sorted(&self) -> Vec<Combo> {
        let mut combos = self.combos.clone();
        combos.sort_by_key(|c| Hand::from(*c));
        combos
    }

    fn tokens(input: &str) -> impl Iterator<Item = &str> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
    }
}

impl TryFrom<&str> for Range {
    type Error = Error;
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let notations = Self::tokens(input)
            .inspect(|t| log::trace!("expanding token {:?}", t))
            .map(Notation::try_from)
            .collect::<Result<Vec<Notation>, Error>>()?;
        let ref mut seen = HashSet::<Hand>::new();
        let combos = notations
            .iter()
            .flat_map(|n| n.combos().iter().copied())
            .filter(|c| seen.insert(Hand::from(*c)))
            .collect::<Vec<Combo>>();
        let total = notations.iter().map(Notation::len).sum::<usize>();
        if total > combos.len() {
            log::warn!(
                "{:?} overlaps itself, dropped {} duplicate combos",
                input,
                total - combos.len()
            );
        }
        Ok(Self {
            input: input.to_string(),
            notations,
            combos,
        })
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tokens = self
            .notations
            .iter()
            .map(|n| n.token())
            .collect::<Vec<&str>>()
            .join(",");
        write!(f, "{} ({} combos)", tokens, self.len())
    }
}
