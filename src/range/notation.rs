use super::combo::Combo;
use super::error::Error;
use super::generate::generate;
use super::handtype::HandType;
use super::handtype::classify;

/// A single shorthand token, classified and expanded up front.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notation {
    #[serde(rename = "input")]
    token: String,
    hand_type: HandType,
    combos: Vec<Combo>,
}

impl Notation {
    pub fn token(&self) -> &str {
        &self.token
    }
    pub fn hand_type(&self) -> HandType {
        self.hand_type
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
}

impl TryFrom<&str> for Notation {
    type Error = Error;
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let token = token.trim();
        let hand_type = classify(token)?;
        let combos = generate(token, hand_type)?;
        Ok(Self {
            token: token.to_string(),
            hand_type,
            combos,
        })
    }
}

impl From<Notation> for Vec<Combo> {
    fn from(notation: Notation) -> Self {
        notation.combos
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}, {} combos)", self.token, self.hand_type, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_and_expands() {
        let notation = Notation::try_from("AKs").unwrap();
        assert_eq!(notation.token(), "AKs");
        assert_eq!(notation.hand_type(), HandType::Suited);
        assert_eq!(notation.len(), 4);
        assert_eq!(notation.to_string(), "AKs (AKs, 4 combos)");
    }

    #[test]
    fn trims_whitespace() {
        let notation = Notation::try_from("  QQ ").unwrap();
        assert_eq!(notation.token(), "QQ");
        assert_eq!(notation.hand_type(), HandType::Pair);
    }

    #[test]
    fn invalid_token() {
        assert_eq!(
            Notation::try_from("x9"),
            Err(Error::Notation("x9".to_string()))
        );
    }

    #[test]
    fn serializes() {
        let notation = Notation::try_from("AhKh").unwrap();
        let json = serde_json::to_string(&notation).unwrap();
        assert_eq!(json, r#"{"input":"AhKh","hand_type":"AhKh","combos":["AhKh"]}"#);
    }
}
