use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_solver::evaluator::total_possibility_count;
use wordle_solver::strategy::{
    decide, lookahead, scan, scan_sequential, Lookahead, Reason, TABLE_SIZE,
};
use wordle_solver::{
    compute_guess, compute_result, expected_possibility_count, reduce_possibilities, Anomaly,
    Decision, GuessExpectationTable, Policy, Strategy, Word,
};

fn words(list: &str) -> Vec<Word> {
    list.split_whitespace().map(|s| s.parse().unwrap()).collect()
}

fn w(s: &str) -> Word {
    s.parse().unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn costs(possible_word: f64, information_word: f64) -> Lookahead {
    Lookahead {
        possible_word,
        information_word,
    }
}

#[test]
fn test_canonical_policy() {
    let policy = Policy::default();
    assert_eq!(policy.opening, "roate");
    assert_eq!(policy.fallback, "abode");
    assert_eq!(policy.dilemma_threshold, 3.5);
    assert_eq!(policy.max_rounds, 6);
    assert_eq!(policy.strategy, Strategy::Greedy);
}

#[test]
fn test_table_lookup() {
    let table = GuessExpectationTable::default();
    let mut anomalies = Vec::new();
    assert_eq!(table.lookup(1, &mut anomalies), 1.0);
    assert_eq!(table.lookup(4, &mut anomalies), 1.9375);
    assert_eq!(table.lookup(6, &mut anomalies), 2.25);
    assert_eq!(table.lookup(TABLE_SIZE, &mut anomalies), 2.5);
    assert!(anomalies.is_empty());
}

#[test]
fn test_table_lookup_out_of_range_clamps() {
    let table = GuessExpectationTable::default();
    let mut anomalies = Vec::new();
    assert_eq!(table.lookup(40, &mut anomalies), 2.5);
    assert_eq!(table.lookup(0, &mut anomalies), 1.0);
    assert_eq!(
        anomalies,
        vec![
            Anomaly::TableOutOfRange {
                remaining: 40,
                clamped_to: 10
            },
            Anomaly::TableOutOfRange {
                remaining: 0,
                clamped_to: 1
            },
        ]
    );
}

#[test]
fn test_decide_threshold_prefers_information() {
    let policy = Policy::default();
    assert_eq!(
        decide(&policy, 1, 3.6, || unreachable!()),
        Decision::InformationWord
    );
    // the threshold itself is not exceeded
    assert_eq!(
        decide(&policy, 1, 3.5, || costs(1.5, 2.0)),
        Decision::PossibleWord
    );
}

#[test]
fn test_decide_last_round_must_gamble() {
    let policy = Policy::default();
    assert_eq!(
        decide(&policy, 5, 3.0, || unreachable!()),
        Decision::PossibleWord
    );
}

#[test]
fn test_decide_second_to_last_round_tie_at_two() {
    let policy = Policy::default();
    assert_eq!(
        decide(&policy, 4, 2.0, || costs(2.0, 2.0)),
        Decision::InformationWord
    );
    assert_eq!(decide(&policy, 3, 2.0, || costs(2.0, 2.0)), Decision::Tie);
    assert_eq!(decide(&policy, 4, 2.0, || costs(2.5, 2.5)), Decision::Tie);
}

#[test]
fn test_decide_compares_costs() {
    let policy = Policy::default();
    assert_eq!(
        decide(&policy, 2, 2.0, || costs(2.3125, 2.5625)),
        Decision::PossibleWord
    );
    assert_eq!(
        decide(&policy, 2, 2.0, || costs(2.55, 2.0)),
        Decision::InformationWord
    );
}

#[test]
fn test_decide_respects_custom_threshold() {
    let policy = Policy {
        dilemma_threshold: 10.0,
        ..Policy::default()
    };
    assert_eq!(
        decide(&policy, 1, 3.6, || costs(2.0, 2.5)),
        Decision::PossibleWord
    );
}

#[test]
fn test_expected_count_matches_definition() {
    let set = words("crane slate trace crate raise arise stare roast toast beast");
    for word in &set {
        let brute: usize = set
            .iter()
            .map(|target| reduce_possibilities(word, compute_result(word, target), &set).len())
            .sum();
        assert_eq!(total_possibility_count(word, &set), brute, "{}", word);
        assert_eq!(
            expected_possibility_count(word, &set),
            brute as f64 / set.len() as f64
        );
    }
}

#[test]
fn test_expected_count_values() {
    let ills = words("bills dills fills gills hills kills mills pills wills zills");
    assert_eq!(expected_possibility_count(&w("bills"), &ills), 8.2);

    let three = words("bills fills hills");
    assert_eq!(expected_possibility_count(&w("bfzzz"), &three), 1.0);
    assert_eq!(total_possibility_count(&w("bills"), &three), 5);
    assert_eq!(expected_possibility_count(&w("bills"), &[]), 0.0);
}

#[test]
fn test_scan_ties_go_to_first_dictionary_word() {
    let ills = words("bills dills fills gills hills kills mills pills wills zills");
    let parallel = scan(&ills, &ills);
    assert_eq!(parallel, scan_sequential(&ills, &ills));
    assert_eq!(parallel.best.map(|s| s.word), Some(w("bills")));
    assert_eq!(parallel.best.map(|s| s.index), Some(0));

    let mut reversed = ills.clone();
    reversed.reverse();
    let parallel = scan(&reversed, &ills);
    assert_eq!(parallel, scan_sequential(&reversed, &ills));
    assert_eq!(parallel.best_possible.map(|s| s.word), Some(w("zills")));
}

#[test]
fn test_scan_parallel_matches_sequential() {
    let dictionary =
        words("sassy gassy speed abide creep geese eerie allee llama hello level roate tales onion");
    let possibilities = words("speed creep geese eerie level hello");
    assert_eq!(
        scan(&dictionary, &possibilities),
        scan_sequential(&dictionary, &possibilities)
    );
}

#[test]
fn test_opening_word() {
    let dictionary = words("tales roate crane");
    let selection = compute_guess(&dictionary, &dictionary, 0, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "roate");
    assert_eq!(selection.reason, Reason::Opening);
}

#[test]
fn test_empty_possibilities_fall_back() {
    let dictionary = words("tales roate crane");
    let selection = compute_guess(&dictionary, &[], 2, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "abode");
    assert_eq!(selection.reason, Reason::Fallback);
    assert_eq!(selection.anomalies, vec![Anomaly::EmptyPossibilities { round: 2 }]);
}

#[test]
fn test_two_possibilities_picks_one_of_them() {
    let dictionary = words("tales roate crane trace");
    let possibilities = words("crane trace");
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = compute_guess(&dictionary, &possibilities, 3, &Policy::default(), &mut rng);
        assert!(possibilities.contains(&selection.word));
        assert_eq!(selection.reason, Reason::Endgame);
    }
}

#[test]
fn test_dilemma_information_word_wins() {
    let possibilities = words("bills fills hills mills pills");
    let mut dictionary = possibilities.clone();
    dictionary.push(w("bfhmp"));

    let selection = compute_guess(&dictionary, &possibilities, 1, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bfhmp");
    assert_eq!(selection.reason, Reason::Dilemma(Decision::InformationWord));
    assert_eq!(selection.expected_remaining, Some(1.0));
    assert!(selection.anomalies.is_empty());

    let cost = lookahead(
        &w("bfhmp"),
        &w("bills"),
        &possibilities,
        &GuessExpectationTable::default(),
        &mut Vec::new(),
    );
    assert_eq!(cost, costs(2.55, 2.0));
}

#[test]
fn test_dilemma_last_round_guesses_possible_word() {
    let possibilities = words("bills fills hills mills pills");
    let mut dictionary = possibilities.clone();
    dictionary.push(w("bfhmp"));

    let selection = compute_guess(&dictionary, &possibilities, 5, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bills");
    assert_eq!(selection.reason, Reason::Dilemma(Decision::PossibleWord));
}

#[test]
fn test_dilemma_possible_word_wins() {
    // bzzzz ties bills on expected count and comes first in the dictionary
    let possibilities = words("bills fills hills mills");
    let mut dictionary = words("bzzzz");
    dictionary.extend(possibilities.iter().copied());

    let selection = compute_guess(&dictionary, &possibilities, 1, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bills");
    assert_eq!(selection.reason, Reason::Dilemma(Decision::PossibleWord));
}

#[test]
fn test_dilemma_tie() {
    let possibilities = words("bills fills hills");
    let mut dictionary = possibilities.clone();
    dictionary.push(w("bfzzz"));

    let selection = compute_guess(&dictionary, &possibilities, 3, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bills");
    assert_eq!(selection.reason, Reason::Dilemma(Decision::Tie));

    let selection = compute_guess(&dictionary, &possibilities, 4, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bfzzz");
    assert_eq!(selection.reason, Reason::Dilemma(Decision::InformationWord));
}

#[test]
fn test_dilemma_threshold_beats_last_round() {
    let possibilities = words("bills fills hills mills pills wills");
    let mut dictionary = possibilities.clone();
    dictionary.push(w("bfhmw"));

    let selection = compute_guess(&dictionary, &possibilities, 5, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bfhmw");
    assert_eq!(selection.reason, Reason::Dilemma(Decision::InformationWord));
}

#[test]
fn test_no_dilemma_when_best_word_is_possible() {
    let set = words("bills dills fills gills hills kills mills pills wills zills");
    let selection = compute_guess(&set, &set, 1, &Policy::default(), &mut rng());
    assert_eq!(selection.word, "bills");
    assert_eq!(selection.reason, Reason::Greedy);
    assert_eq!(selection.expected_remaining, Some(8.2));
}

fn random_policy() -> Policy {
    Policy {
        strategy: Strategy::Random,
        ..Policy::default()
    }
}

#[test]
fn test_random_strategy_skips_opening() {
    let dictionary = words("tales roate crane bills fills hills");
    let possibilities = words("bills fills hills");
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = compute_guess(&dictionary, &possibilities, 0, &random_policy(), &mut rng);
        assert!(possibilities.contains(&selection.word));
        assert_eq!(selection.reason, Reason::Random);
        assert_eq!(selection.expected_remaining, None);
    }
}

#[test]
fn test_random_strategy_still_falls_back() {
    let dictionary = words("tales roate crane");
    let selection = compute_guess(&dictionary, &[], 0, &random_policy(), &mut rng());
    assert_eq!(selection.word, "abode");
    assert_eq!(selection.reason, Reason::Fallback);
    assert_eq!(selection.anomalies, vec![Anomaly::EmptyPossibilities { round: 0 }]);
}
