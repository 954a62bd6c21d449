use crate::cards::Card;
use crate::cards::Category;

/// How a candidate card changes hero's prospects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutKind {
    /// better category and measurably more equity
    Real,
    /// better category, no meaningful equity gain
    Dirty,
    /// no better category, and opponents beat hero noticeably more often
    Reverse,
}

/// One classified card, with the category hero holds once it lands.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Out {
    pub card: Card,
    pub category: Category,
    /// for reverse outs, the opposing category that most often beat hero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<Category>,
}

impl Out {
    pub fn new(card: Card, category: Category) -> Self {
        Self {
            card,
            category,
            opponent: None,
        }
    }
    pub fn against(self, opponent: Option<Category>) -> Self {
        Self { opponent, ..self }
    }
}

impl std::fmt::Display for Out {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.opponent {
            Some(opponent) => write!(f, "{} ({}, vs {})", self.card, self.category, opponent),
            None => write!(f, "{} ({})", self.card, self.category),
        }
    }
}

/// The three disjoint out lists, each in deck order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Outs {
    real: Vec<Out>,
    dirty: Vec<Out>,
    reverse: Vec<Out>,
}

impl Outs {
    pub fn push(&mut self, kind: OutKind, out: Out) {
        match kind {
            OutKind::Real => self.real.push(out),
            OutKind::Dirty => self.dirty.push(out),
            OutKind::Reverse => self.reverse.push(out),
        }
    }
    pub fn real(&self) -> &[Out] {
        &self.real
    }
    pub fn dirty(&self) -> &[Out] {
        &self.dirty
    }
    pub fn reverse(&self) -> &[Out] {
        &self.reverse
    }
    pub fn is_empty(&self) -> bool {
        self.real.is_empty() && self.dirty.is_empty() && self.reverse.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_routes_by_kind() {
        let ace = Card::try_from("As").unwrap();
        let two = Card::try_from("2d").unwrap();
        let mut outs = Outs::default();
        outs.push(OutKind::Real, Out::new(ace, Category::Flush));
        outs.push(OutKind::Reverse, Out::new(two, Category::OnePair).against(Some(Category::Straight)));
        assert_eq!(outs.real().len(), 1);
        assert_eq!(outs.dirty().len(), 0);
        assert_eq!(outs.reverse()[0].opponent, Some(Category::Straight));
        assert!(!outs.is_empty());
    }

    #[test]
    fn serialized_out_omits_missing_opponent() {
        let out = Out::new(Card::try_from("Th").unwrap(), Category::Straight);
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"{"card":"Th","category":"Straight"}"#);
        let json = serde_json::to_string(&out.against(Some(Category::Flush))).unwrap();
        assert_eq!(json, r#"{"card":"Th","category":"Straight","opponent":"Flush"}"#);
    }
}
