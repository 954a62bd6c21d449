use super::evaluate::Evaluate;
use super::evaluate::playable;
use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::cards::Strength;

/// Searches the rank and suit masks of the whole hand at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bitwise;

impl Evaluate for Bitwise {
    fn evaluate(&self, hand: Hand) -> Option<Strength> {
        match playable(&hand) {
            true => Evaluator::from(hand).strength(),
            false => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    #[test]
    fn too_few_cards() {
        let hand = Hand::try_from("As Ks Qs Js").unwrap();
        assert_eq!(Bitwise.evaluate(hand), None);
    }

    #[test]
    fn too_many_cards() {
        let hand = Hand::try_from("As Ks Qs Js Ts 9s 8s 7s").unwrap();
        assert_eq!(Bitwise.evaluate(hand), None);
    }

    #[test]
    fn seven_cards() {
        let hand = Hand::try_from("As Ks Qs Js 2d 9c Ts").unwrap();
        let strength = Bitwise.evaluate(hand).unwrap();
        assert_eq!(strength.category(), Category::StraightFlush);
    }
}
