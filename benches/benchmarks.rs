criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_bitwise,
        evaluating_river_exhaustive,
        enumerating_river_subsets,
        sampling_flop_showdowns,
        simulating_flop_engine,
        simulating_turn_engine,
}

use holdem_equity::cards::*;
use holdem_equity::equity::*;
use holdem_equity::evaluation::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn river() -> Hand {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut deck = Deck::new();
    (0..7).map(|_| deck.draw(rng)).collect::<Hand>()
}

fn spot(hero: &str, board: &str, opponents: usize, trials: usize) -> Spot {
    let hero = Card::parse(hero).unwrap();
    let board = Card::parse(board).unwrap();
    let scenario = Scenario::new(&hero, &board, opponents, 100., 50.).with_trials(trials);
    Spot::try_from(&scenario).unwrap()
}

fn evaluating_river_bitwise(c: &mut criterion::Criterion) {
    let hand = river();
    c.bench_function("evaluate a 7-card Hand (bitwise)", |b| {
        b.iter(|| Bitwise.evaluate(hand))
    });
}

fn evaluating_river_exhaustive(c: &mut criterion::Criterion) {
    let hand = river();
    c.bench_function("evaluate a 7-card Hand (exhaustive)", |b| {
        b.iter(|| Exhaustive.evaluate(hand))
    });
}

fn enumerating_river_subsets(c: &mut criterion::Criterion) {
    let hand = river();
    c.bench_function("enumerate 5-card Subsets of a 7-card Hand", |b| {
        b.iter(|| Subsets::from((5, hand)).count())
    });
}

fn sampling_flop_showdowns(c: &mut criterion::Criterion) {
    let spot = spot("As Ks", "Qs Js 2d", 3, 2_500);
    let ref mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("sample 2500 Flop showdowns against 3 opponents", |b| {
        b.iter(|| Sampler::new(&Bitwise).run(&spot, rng))
    });
}

fn simulating_flop_engine(c: &mut criterion::Criterion) {
    let scenario = Scenario::try_from("As Ks ~ Qs Js 2d").unwrap();
    let engine = Engine::<Bitwise>::default();
    let ref mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("simulate a heads-up Flop with outs", |b| {
        b.iter(|| engine.equity(&scenario, rng))
    });
}

fn simulating_turn_engine(c: &mut criterion::Criterion) {
    let scenario = Scenario::try_from("Th 9h ~ 8h 7c 2h Kd").unwrap();
    let engine = Engine::<Bitwise>::default();
    let ref mut rng = SmallRng::seed_from_u64(3);
    c.bench_function("simulate a heads-up Turn with outs", |b| {
        b.iter(|| engine.equity(&scenario, rng))
    });
}
