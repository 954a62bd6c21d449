use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields the canonical deck order used everywhere
/// downstream: sorted first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: compact index `0..52`
/// - `u64`: single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards parse from strings like `"As"` (ace of spades) or `"Tc"`.
/// `"10c"` and suit glyphs (`"A♠"`) are accepted too, since that is
/// what card pickers tend to emit. Use [`Card::parse`] for several cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }

    /// Parses whitespace- or comma-separated card notations.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| String::from("empty card"))?;
        match split {
            1 | 2 => {
                let rank = Rank::try_from(&s[..split])?;
                let suit = Suit::try_from(&s[split..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from(37u8);
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_str() {
        let card = Card::from((Rank::Ten, Suit::S));
        assert_eq!(card.to_string(), "Ts");
        assert_eq!(Card::try_from("Ts"), Ok(card));
    }

    #[test]
    fn canonical_encoding() {
        assert_eq!(u8::from(Card::try_from("2c").unwrap()), 0);
        assert_eq!(u8::from(Card::try_from("2s").unwrap()), 3);
        assert_eq!(u8::from(Card::try_from("Ts").unwrap()), 35);
        assert_eq!(u8::from(Card::try_from("As").unwrap()), 51);
    }

    #[test]
    fn lenient_notation() {
        assert_eq!(Card::try_from("10h"), Card::try_from("Th"));
        assert_eq!(Card::try_from("A♠"), Card::try_from("As"));
        assert_eq!(Card::try_from("as"), Card::try_from("As"));
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("Asx").is_err());
        assert!(Card::try_from("Zs").is_err());
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Ks, Qs").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::from((Rank::Queen, Suit::S)));
        assert!(Card::parse("As Kx").is_err());
    }

    #[test]
    fn serde_as_string() {
        let card = Card::try_from("Jd").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Jd\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
