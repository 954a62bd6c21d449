use super::report::Report;
use crate::Chips;
use crate::equity::Tuning;
use crate::worker::Request;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Estimate equity, EV and outs for a hold'em hand",
    long_about = None
)]
pub struct Args {
    #[arg(long, required = true, help = "hero's two cards, e.g. \"As Ks\"")]
    pub hero: String,
    #[arg(long, default_value = "", help = "board cards, e.g. \"Qs Js 2d\"")]
    pub board: String,
    #[arg(long, short = 'n', default_value_t = 1)]
    pub opponents: usize,
    #[arg(long, default_value_t = 0.)]
    pub pot: Chips,
    #[arg(long, default_value_t = 0.)]
    pub bet: Chips,
    #[arg(long, short = 't', default_value_t = crate::DEFAULT_TRIALS)]
    pub trials: usize,
    #[arg(long, help = "fix the random seed for repeatable runs")]
    pub seed: Option<u64>,
    #[arg(long, help = "print the result as JSON")]
    pub json: bool,
    #[arg(long, help = "equity gain a real out must exceed (0 to 1)")]
    pub equity_tolerance: Option<f64>,
    #[arg(long, help = "loss-rate rise a reverse out must exceed (0 to 1)")]
    pub loss_tolerance: Option<f64>,
    #[arg(long, help = "fewest trials per candidate out")]
    pub outs_trial_floor: Option<usize>,
    #[arg(long, help = "share of trials per candidate out")]
    pub outs_trial_fraction: Option<f64>,
}

impl Args {
    pub fn run(&self) -> anyhow::Result<()> {
        let request = Request::from(self);
        log::info!("simulating {} ~ {} over {} trials", self.hero, self.board, self.trials);
        let result = request.evaluate()?;
        match self.json {
            true => println!("{}", serde_json::to_string_pretty(&result)?),
            false => println!("{}", Report::from(&result)),
        }
        Ok(())
    }

    fn tuning(&self) -> Tuning {
        let default = Tuning::default();
        Tuning {
            outs_trial_floor: self.outs_trial_floor.unwrap_or(default.outs_trial_floor),
            outs_trial_fraction: self.outs_trial_fraction.unwrap_or(default.outs_trial_fraction),
            equity_tolerance: self.equity_tolerance.unwrap_or(default.equity_tolerance),
            loss_tolerance: self.loss_tolerance.unwrap_or(default.loss_tolerance),
        }
    }
}

impl From<&Args> for Request {
    fn from(args: &Args) -> Self {
        let split = |s: &str| {
            s.split(|c: char| c.is_whitespace() || c == ',')
                .map(String::from)
                .collect::<Vec<String>>()
        };
        Self {
            hero_cards: split(&args.hero),
            board_cards: split(&args.board),
            num_opponents: args.opponents,
            pot: args.pot,
            our_bet: args.bet,
            iterations: args.trials,
            seed: args.seed,
            tuning: args.tuning(),
        }
    }
}
