use super::handtype::HandType;

/// Failures while turning shorthand into combos.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// no HandType fits the token
    #[error("invalid hand notation: {0:?}")]
    Notation(String),
    /// generation was asked for a category the token does not have
    #[error("cannot generate {hand_type} combos from {token:?}")]
    Inconsistent { token: String, hand_type: HandType },
    /// a combo string that does not name two distinct cards
    #[error("invalid combo: {0}")]
    Combo(String),
}
