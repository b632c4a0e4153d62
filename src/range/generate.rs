use super::combo::Combo;
use super::error::Error;
use super::handtype::HandType;
use super::handtype::card;
use super::handtype::classify;
use super::pairing::Pairing;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// the C(4,2) = 6 ways to hold two cards of one rank
pub fn pair(rank: Rank) -> impl Iterator<Item = Combo> {
    Suit::all()
        .into_iter()
        .enumerate()
        .flat_map(|(i, a)| Suit::all().into_iter().skip(i + 1).map(move |b| (a, b)))
        .map(move |(a, b)| Combo::from((Card::from((rank, a)), Card::from((rank, b)))))
}

/// two distinct ranks under a suit pairing, `hi` always first
pub fn ranks(hi: Rank, lo: Rank, pairing: Pairing) -> impl Iterator<Item = Combo> {
    debug_assert!(hi != lo);
    pairing
        .suits()
        .map(move |(a, b)| Combo::from((Card::from((hi, a)), Card::from((lo, b)))))
}

/// one fixed rank against every other rank, ascending
pub fn wild(rank: Rank, pairing: Pairing) -> impl Iterator<Item = Combo> {
    rank.others()
        .flat_map(move |other| ranks(rank, other, pairing))
}

/// the whole deck, two at a time: for each rank ascending,
/// its pairs, then every combo against a lower rank
pub fn any() -> impl Iterator<Item = Combo> {
    Rank::all().into_iter().flat_map(|hi| {
        pair(hi).chain(
            Rank::all()
                .into_iter()
                .take_while(move |lo| *lo < hi)
                .flat_map(move |lo| ranks(hi, lo, Pairing::Product)),
        )
    })
}

/// Expands a classified token into its combos.
///
/// The token's own rank and suit characters drive the expansion; the
/// HandType picks the rule. A HandType that `classify` would not give
/// this token is refused rather than expanded.
pub fn generate(token: &str, hand_type: HandType) -> Result<Vec<Combo>, Error> {
    let inconsistent = || Error::Inconsistent {
        token: token.to_string(),
        hand_type,
    };
    if classify(token).ok() != Some(hand_type) {
        return Err(inconsistent());
    }
    let chars = token.chars().collect::<Vec<char>>();
    let rank = |i: usize| {
        chars
            .get(i)
            .and_then(|c| Rank::try_from(*c).ok())
            .ok_or_else(inconsistent)
    };
    let exact = |i: usize| {
        chars
            .get(i..i + 2)
            .and_then(|c| card(c[0], c[1]))
            .ok_or_else(inconsistent)
    };
    let combos = match hand_type {
        HandType::Pair => pair(rank(0)?).collect(),
        HandType::Unsuited => ranks(rank(0)?, rank(1)?, Pairing::Product).collect(),
        HandType::Offsuit => ranks(rank(0)?, rank(1)?, Pairing::Permutation).collect(),
        HandType::Suited => ranks(rank(0)?, rank(1)?, Pairing::Diagonal).collect(),
        HandType::Wild => wild(rank(0)?, Pairing::Product).collect(),
        HandType::WildOffsuit => wild(rank(0)?, Pairing::Permutation).collect(),
        HandType::WildSuited => wild(rank(0)?, Pairing::Diagonal).collect(),
        HandType::Any => any().collect(),
        HandType::Exact => vec![Combo::new(exact(0)?, exact(2)?)?],
    };
    log::debug!("generated {} combos for {:?} ({})", combos.len(), token, hand_type);
    Ok(combos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use std::collections::HashSet;

    fn expand(token: &str) -> Vec<Combo> {
        generate(token, classify(token).unwrap()).unwrap()
    }

    fn set(combos: &[Combo]) -> HashSet<Hand> {
        combos.iter().copied().map(Hand::from).collect()
    }

    fn strings(combos: &[Combo]) -> HashSet<String> {
        combos.iter().map(|c| c.to_string()).collect()
    }

    fn distinct(combos: &[Combo]) -> bool {
        set(combos).len() == combos.len()
    }

    #[test]
    fn pairs() {
        for rank in Rank::all() {
            let combos = expand(&format!("{}{}", rank, rank));
            assert_eq!(combos.len(), 6);
            assert!(distinct(&combos));
            assert!(combos.iter().all(|c| c.first() != c.second()));
            assert!(combos.iter().all(|c| c.first().rank() == rank));
            assert!(combos.iter().all(|c| c.second().rank() == rank));
        }
    }

    #[test]
    fn twos() {
        let expected = ["2d2c", "2h2s", "2s2c", "2h2d", "2d2s", "2h2c"]
            .map(|s| Hand::from(Combo::try_from(s).unwrap()))
            .into_iter()
            .collect::<HashSet<Hand>>();
        assert_eq!(set(&expand("22")), expected);
    }

    #[test]
    fn ace_king() {
        let combos = expand("AK");
        assert_eq!(combos.len(), 16);
        assert!(distinct(&combos));
        assert!(combos.iter().all(|c| c.first().rank() == Rank::Ace));
        assert!(combos.iter().all(|c| c.second().rank() == Rank::King));
    }

    #[test]
    fn token_order_drives_card_order() {
        assert!(expand("37").iter().all(|c| c.first().rank() == Rank::Three));
        assert!(expand("73").iter().all(|c| c.first().rank() == Rank::Seven));
        assert_eq!(set(&expand("37")), set(&expand("73")));
    }

    #[test]
    fn offsuit_and_suited_partition_unsuited() {
        for a in Rank::all() {
            for b in a.others() {
                let any = expand(&format!("{}{}", a, b));
                let off = expand(&format!("{}{}o", a, b));
                let sui = expand(&format!("{}{}s", a, b));
                assert_eq!(any.len(), 16);
                assert_eq!(off.len(), 12);
                assert_eq!(sui.len(), 4);
                assert!(off.iter().all(|c| !c.is_suited()));
                assert!(sui.iter().all(|c| c.is_suited()));
                assert!(set(&off).is_disjoint(&set(&sui)));
                let union = set(&off).union(&set(&sui)).copied().collect::<HashSet<Hand>>();
                assert_eq!(union, set(&any));
            }
        }
    }

    #[test]
    fn queen_deuce_suited() {
        let expected = ["Qs2s", "Qh2h", "Qd2d", "Qc2c"]
            .map(String::from)
            .into_iter()
            .collect::<HashSet<String>>();
        assert_eq!(strings(&expand("Q2s")), expected);
    }

    #[test]
    fn wild_is_union_of_unsuited() {
        let combos = expand("9x");
        let expected = Rank::Nine
            .others()
            .flat_map(|r| expand(&format!("{}9", r)))
            .collect::<Vec<Combo>>();
        assert_eq!(combos.len(), 192);
        assert!(distinct(&combos));
        assert_eq!(set(&combos), set(&expected));
    }

    #[test]
    fn wild_offsuit_is_union_of_offsuit() {
        let combos = expand("Qxo");
        let expected = Rank::Queen
            .others()
            .flat_map(|r| expand(&format!("{}Qo", r)))
            .collect::<Vec<Combo>>();
        assert_eq!(combos.len(), 144);
        assert!(distinct(&combos));
        assert_eq!(set(&combos), set(&expected));
    }

    #[test]
    fn wild_suited_is_union_of_suited() {
        let combos = expand("Kxs");
        let expected = Rank::King
            .others()
            .flat_map(|r| expand(&format!("{}Ks", r)))
            .collect::<Vec<Combo>>();
        assert_eq!(combos.len(), 48);
        assert!(distinct(&combos));
        assert_eq!(set(&combos), set(&expected));
    }

    #[test]
    fn any_is_the_whole_deck() {
        let combos = expand("xx");
        let deck = Card::all()
            .flat_map(|a| Card::all().filter(move |b| a < *b).map(move |b| (a, b)))
            .map(|(a, b)| Hand::add(Hand::from(a), Hand::from(b)))
            .collect::<HashSet<Hand>>();
        assert_eq!(deck.len(), 1326);
        assert_eq!(combos.len(), 1326);
        assert!(distinct(&combos));
        assert!(combos.iter().all(|c| c.first() != c.second()));
        assert_eq!(set(&combos), deck);
    }

    #[test]
    fn exact_is_echoed() {
        let combos = expand("AhKh");
        assert_eq!(strings(&combos), HashSet::from(["AhKh".to_string()]));
        assert_eq!(expand("ahkh")[0].to_string(), "AhKh");
        assert_eq!(expand("KhAh")[0].to_string(), "KhAh");
    }

    #[test]
    fn sizes_match_hand_type() {
        for token in ["TT", "JT", "JTo", "JTs", "Jx", "Jxo", "Jxs", "xx", "JcTd"] {
            let hand_type = classify(token).unwrap();
            assert_eq!(expand(token).len(), hand_type.size());
        }
    }

    #[test]
    fn stable_order() {
        for token in ["55", "A5", "A5o", "A5s", "5x", "5xo", "5xs", "xx"] {
            assert_eq!(expand(token), expand(token));
        }
        assert_eq!(expand("AK")[0].to_string(), "AcKc");
        assert_eq!(expand("AKo")[0].to_string(), "AcKd");
        assert_eq!(expand("AA")[0].to_string(), "AcAd");
    }

    #[test]
    fn cards_reparse() {
        for token in ["77", "T9", "T9o", "T9s", "4x", "4xo", "4xs", "xx", "9s8s"] {
            for combo in expand(token) {
                let text = combo.to_string();
                assert_eq!(text.len(), 4);
                let a = Card::try_from(&text[0..2]).unwrap();
                let b = Card::try_from(&text[2..4]).unwrap();
                assert_ne!(a, b);
                assert_eq!((a, b), <(Card, Card)>::from(combo));
            }
        }
    }

    #[test]
    fn inconsistent_requests_fail() {
        let cases = [
            ("AK", HandType::Pair),
            ("AA", HandType::Unsuited),
            ("AKs", HandType::Offsuit),
            ("9x", HandType::Any),
            ("xx", HandType::Wild),
            ("AhKh", HandType::Unsuited),
            ("AK", HandType::Exact),
            ("x9", HandType::Wild),
            (" AK", HandType::Unsuited),
        ];
        for (token, hand_type) in cases {
            assert_eq!(
                generate(token, hand_type),
                Err(Error::Inconsistent {
                    token: token.to_string(),
                    hand_type,
                })
            );
        }
    }
}
