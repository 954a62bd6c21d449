use crate::equity::EquityResult;
use crate::equity::Out;
use colored::Colorize;

/// Terminal rendering of an [`EquityResult`].
pub struct Report<'a>(&'a EquityResult);

impl<'a> From<&'a EquityResult> for Report<'a> {
    fn from(result: &'a EquityResult) -> Self {
        Self(result)
    }
}

impl Report<'_> {
    fn cards(outs: &[Out]) -> String {
        outs.iter()
            .map(|out| out.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let r = self.0;
        let ev = format!("{:+.2}", r.ev);
        let ev = match r.ev >= 0. {
            true => ev.green(),
            false => ev.red(),
        };
        let hand = match r.hand_name.is_empty() {
            true => "-".dimmed(),
            false => r.hand_name.as_str().bold(),
        };
        writeln!(f, "{:<10}{}", "hand", hand)?;
        writeln!(f, "{:<10}{:.2}%", "equity", r.equity)?;
        writeln!(f, "{:<10}{}", "ev", ev)?;
        writeln!(f, "{:<10}{:.2}%", "pot odds", r.pot_odds)?;
        writeln!(
            f,
            "{:<10}{} ({:.2}%) {}",
            "outs",
            r.outs.to_string().green(),
            r.draw_odds,
            Self::cards(&r.outs_list)
        )?;
        writeln!(
            f,
            "{:<10}{} {}",
            "dirty",
            r.dirty_outs.to_string().yellow(),
            Self::cards(&r.dirty_outs_list)
        )?;
        write!(
            f,
            "{:<10}{} ({:.2}%) {}",
            "reverse",
            r.reverse_outs.to_string().red(),
            r.reverse_draw_odds,
            Self::cards(&r.reverse_outs_list)
        )
    }
}
