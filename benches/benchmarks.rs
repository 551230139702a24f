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
        evaluating_seven_cards,
        extracting_omaha_hand,
        extracting_super_hand,
        enumerating_flop_equity,
        simulating_preflop_equity,
        simulating_omaha_equity,
}

fn evaluating_seven_cards(c: &mut criterion::Criterion) {
    let oracle = Showdown::default();
    let hand = Hand::try_from("As Kd 7h 7c 2s 9d Ts").unwrap();
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| oracle.score(hand))
    });
}

fn extracting_omaha_hand(c: &mut criterion::Criterion) {
    let oracle = Showdown::default();
    let extractor = Extractor::new(&oracle, Variant::Omaha);
    let hole = Hand::try_from("AsAhKsKh").unwrap();
    let board = Hand::try_from("2c 7d 9h Jc 3s").unwrap();
    c.bench_function("extract best Omaha hand (60 combinations)", |b| {
        b.iter(|| extractor.score(hole, board))
    });
}

fn extracting_super_hand(c: &mut criterion::Criterion) {
    let oracle = Showdown::default();
    let extractor = Extractor::new(&oracle, Variant::Super);
    let hole = Hand::try_from("AsAhKs").unwrap();
    let board = Hand::try_from("2c 7d 9h Jc 3s").unwrap();
    c.bench_function("extract best Super Hold'em hand (8 subsets)", |b| {
        b.iter(|| extractor.score(hole, board))
    });
}

fn enumerating_flop_equity(c: &mut criterion::Criterion) {
    let request = request(&["AsAh", "KsKh", "7c8c"], "2c 7d 9h", Variant::Holdem);
    c.bench_function("enumerate 3-way Flop equity", |b| {
        b.iter(|| compute(&request, &Settings::default()))
    });
}

fn simulating_preflop_equity(c: &mut criterion::Criterion) {
    let request = request(&["AsAh", "KsKh"], "", Variant::Holdem);
    let settings = Settings::default().with_seed(0).with_trials(Variant::Holdem, 5_000);
    c.bench_function("simulate 5k Preflop trials", |b| {
        b.iter(|| compute(&request, &settings))
    });
}

fn simulating_omaha_equity(c: &mut criterion::Criterion) {
    let request = request(&["AsAhKsKh", "2c3c4d5d"], "", Variant::Omaha);
    let settings = Settings::default().with_seed(0);
    c.bench_function("simulate default Omaha trials", |b| {
        b.iter(|| compute(&request, &settings))
    });
}

fn request(holes: &[&str], board: &str, variant: Variant) -> Request {
    let holes = holes.iter().map(|h| Hole::try_from(*h).unwrap()).collect();
    Request::new(holes, Board::try_from(board).unwrap(), variant).unwrap()
}

use poker_equity::cards::board::Board;
use poker_equity::cards::hand::Hand;
use poker_equity::cards::hole::Hole;
use poker_equity::cards::variant::Variant;
use poker_equity::equity::compute;
use poker_equity::equity::extractor::Extractor;
use poker_equity::equity::request::Request;
use poker_equity::equity::settings::Settings;
use poker_equity::evaluation::oracle::Oracle;
use poker_equity::evaluation::showdown::Showdown;
