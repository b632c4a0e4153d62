use super::error::Error;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// The shape of a shorthand token. Each variant is named by what
/// it expands to; Display gives the canonical shorthand for it.
///
/// | variant       | shorthand | combos |
/// |---------------|-----------|--------|
/// | `Pair`        | `AA`      | 6      |
/// | `Unsuited`    | `AK`      | 16     |
/// | `Offsuit`     | `AKo`     | 12     |
/// | `Suited`      | `AKs`     | 4      |
/// | `Wild`        | `AX`      | 192    |
/// | `WildOffsuit` | `AXo`     | 144    |
/// | `WildSuited`  | `AXs`     | 48     |
/// | `Any`         | `XX`      | 1326   |
/// | `Exact`       | `AhKh`    | 1      |
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    Pair,
    Unsuited,
    Offsuit,
    Suited,
    Wild,
    WildOffsuit,
    WildSuited,
    Any,
    Exact,
}

impl HandType {
    pub const fn all() -> [Self; 9] {
        [
            Self::Pair,
            Self::Unsuited,
            Self::Offsuit,
            Self::Suited,
            Self::Wild,
            Self::WildOffsuit,
            Self::WildSuited,
            Self::Any,
            Self::Exact,
        ]
    }
    /// number of combos a token of this shape expands to
    pub const fn size(&self) -> usize {
        match self {
            Self::Pair => 6,
            Self::Unsuited => 16,
            Self::Offsuit => 12,
            Self::Suited => 4,
            Self::Wild => 12 * 16,
            Self::WildOffsuit => 12 * 12,
            Self::WildSuited => 12 * 4,
            Self::Any => 52 * 51 / 2,
            Self::Exact => 1,
        }
    }
    /// the number of characters a token of this shape has
    pub const fn width(&self) -> usize {
        match self {
            Self::Pair | Self::Unsuited | Self::Wild | Self::Any => 2,
            Self::Offsuit | Self::Suited | Self::WildOffsuit | Self::WildSuited => 3,
            Self::Exact => 4,
        }
    }
    pub const fn shorthand(&self) -> &'static str {
        match self {
            Self::Pair => "AA",
            Self::Unsuited => "AK",
            Self::Offsuit => "AKo",
            Self::Suited => "AKs",
            Self::Wild => "AX",
            Self::WildOffsuit => "AXo",
            Self::WildSuited => "AXs",
            Self::Any => "XX",
            Self::Exact => "AhKh",
        }
    }
}

fn is_wild(c: char) -> bool {
    c.eq_ignore_ascii_case(&'x')
}

fn is_rank(c: char) -> bool {
    Rank::try_from(c).is_ok()
}

fn same_rank(a: char, b: char) -> bool {
    Rank::try_from(a).ok() == Rank::try_from(b).ok()
}

pub(crate) fn card(rank: char, suit: char) -> Option<Card> {
    let rank = Rank::try_from(rank).ok()?;
    let suit = Suit::try_from(suit).ok()?;
    Some(Card::from((rank, suit)))
}

/// Assigns a HandType to a shorthand token, or rejects it.
///
/// A wildcard may only lead the token as `xx`. Suffixes are `o` or `s`
/// and never follow a pair. Four-character tokens must be two distinct
/// rank+suit cards.
pub fn classify(token: &str) -> Result<HandType, Error> {
    let invalid = || Error::Notation(token.to_string());
    let chars = token.chars().collect::<Vec<char>>();
    if let Some(&first) = chars.first() {
        if is_wild(first) && !(chars.len() == 2 && is_wild(chars[1])) {
            return Err(invalid());
        }
    }
    let hand_type = match chars.as_slice() {
        &[a, _] if is_wild(a) => HandType::Any,
        &[a, _] if !is_rank(a) => return Err(invalid()),
        &[a, b] if same_rank(a, b) => HandType::Pair,
        &[_, b] if is_wild(b) => HandType::Wild,
        &[_, b] if is_rank(b) => HandType::Unsuited,
        &[a, b, o] if is_rank(a) && o.eq_ignore_ascii_case(&'o') => match b {
            b if is_wild(b) => HandType::WildOffsuit,
            b if is_rank(b) && !same_rank(a, b) => HandType::Offsuit,
            _ => return Err(invalid()),
        },
        &[a, b, s] if is_rank(a) && s.eq_ignore_ascii_case(&'s') => match b {
            b if is_wild(b) => HandType::WildSuited,
            b if is_rank(b) && !same_rank(a, b) => HandType::Suited,
            _ => return Err(invalid()),
        },
        &[r1, s1, r2, s2] => match (card(r1, s1), card(r2, s2)) {
            (Some(one), Some(two)) if one != two => HandType::Exact,
            _ => return Err(invalid()),
        },
        _ => return Err(invalid()),
    };
    log::debug!("classified {:?} as {}", token, hand_type);
    Ok(hand_type)
}

impl TryFrom<&str> for HandType {
    type Error = Error;
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        classify(token)
    }
}

impl std::fmt::Display for HandType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.shorthand())
    }
}

impl serde::Serialize for HandType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.shorthand())
    }
}
