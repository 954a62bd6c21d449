//! Closed-form quantities derived from simulated equity and out counts.
use crate::Chips;
use crate::Probability;

/// Round to the hundredths place, halves away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.).round() / 100.
}

/// A probability as a percentage, rounded for reporting.
pub fn percent(p: Probability) -> f64 {
    round2(p * 100.)
}

/// Share of the final pot hero must put in to call.
pub fn pot_odds(pot: Chips, bet: Chips) -> Probability {
    match bet > 0. {
        true => bet / (pot + bet),
        false => 0.,
    }
}

/// Expected chips won by calling `bet` into `pot` with the given equity.
pub fn expected_value(equity: Probability, pot: Chips, bet: Chips) -> Chips {
    equity * (pot + bet) - (1. - equity) * bet
}

/// Chance of hitting at least one of `outs` cards from `remaining` unseen
/// cards with `pending` cards still to come, drawing without replacement.
pub fn draw_odds(outs: usize, remaining: usize, pending: usize) -> Probability {
    if outs == 0 || pending == 0 || remaining == 0 {
        return 0.;
    }
    if outs >= remaining {
        return 1.;
    }
    let r = remaining as f64;
    let n = outs as f64;
    match pending {
        1 => n / r,
        _ => 1. - (r - n) / r * (r - 1. - n) / (r - 1.),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round2(1.005 + 1e-9), 1.01);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(33.333333), 33.33);
    }

    #[test]
    fn pot_odds_of_half_pot_bet() {
        assert_eq!(percent(pot_odds(100., 50.)), 33.33);
        assert_eq!(pot_odds(100., 0.), 0.);
        assert_eq!(pot_odds(0., 10.), 1.);
    }

    #[test]
    fn expected_value_at_the_extremes() {
        assert_eq!(expected_value(1., 100., 50.), 150.);
        assert_eq!(expected_value(0., 100., 50.), -50.);
        assert_eq!(expected_value(0.25, 100., 50.), 0.);
    }

    #[test]
    fn one_card_to_come() {
        assert_eq!(draw_odds(9, 46, 1), 9. / 46.);
    }

    #[test]
    fn two_cards_to_come() {
        let odds = draw_odds(9, 47, 2);
        assert!((odds - (1. - 38. / 47. * 37. / 46.)).abs() < 1e-12);
        assert_eq!(percent(odds), 34.97);
    }

    #[test]
    fn nothing_to_draw() {
        assert_eq!(draw_odds(0, 47, 2), 0.);
        assert_eq!(draw_odds(5, 45, 0), 0.);
        assert_eq!(draw_odds(47, 47, 2), 1.);
    }
}
