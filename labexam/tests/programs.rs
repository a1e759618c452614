//! Integration tests: fixture inputs through the full read -> run -> render
//! pipeline, with a frozen clock so the timing line is deterministic.

use std::path::PathBuf;

use algorithms::sorting::SortAlgorithm;
use algorithms::AlgoError;
use labexam::reader::InputError;
use labexam::timer::SteppingClock;
use labexam::{run_program, KthSource, LabConfig, LabError, Program};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture must exist")
}

fn run(program: &Program, input: &str) -> Result<String, LabError> {
    run_program(program, input, &LabConfig::default(), &SteppingClock::frozen())
}

fn verified() -> LabConfig {
    LabConfig {
        verify: true,
        ..LabConfig::default()
    }
}

#[test]
fn fixtures_match_expected_output() {
    let cases = [
        ("bubble_sort", Program::Sort(SortAlgorithm::Bubble)),
        ("matrix_chain", Program::MatrixChain),
        ("knapsack", Program::Knapsack),
        ("coin_change", Program::CoinChange),
        ("coin_change_unreachable", Program::CoinChange),
        ("rod_cut", Program::RodCut),
        ("fibonacci", Program::Fibonacci),
        ("lcs", Program::Lcs),
        ("dijkstra", Program::Dijkstra),
        ("bellman_ford", Program::BellmanFord),
        ("bellman_ford_cycle", Program::BellmanFord),
        ("activity_selection", Program::ActivitySelection),
        ("fractional_knapsack", Program::FractionalKnapsack),
        ("job_sequencing", Program::JobSequencing),
        ("minimum_coins", Program::MinimumCoins),
        ("kth_smallest", Program::KthSmallest(KthSource::Stdin)),
        ("strassen", Program::Strassen),
    ];
    for (fixture, program) in cases {
        let input = load_fixture(&format!("{fixture}.in"));
        let expected = load_fixture(&format!("{fixture}.out"));
        let actual = run(&program, &input).unwrap_or_else(|e| panic!("{fixture}: {e}"));
        assert_eq!(actual, expected, "fixture {fixture}");
    }
}

#[test]
fn every_sort_renders_the_same_output() {
    let input = load_fixture("unsorted_dupes.in");
    let expected = load_fixture("unsorted_dupes.out");
    for algo in SortAlgorithm::ALL {
        let actual = run_program(
            &Program::Sort(algo),
            &input,
            &verified(),
            &SteppingClock::frozen(),
        )
        .unwrap_or_else(|e| panic!("{}: {e}", algo.name()));
        assert_eq!(actual, expected, "{}", algo.name());
    }
}

#[test]
fn negative_cycle_prints_no_distances() {
    let out = run(&Program::BellmanFord, &load_fixture("bellman_ford_cycle.in")).unwrap();
    assert!(out.starts_with("Negative cycle detected\n"));
    assert!(!out.contains("INF"));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn malformed_token_is_reported_with_position() {
    let err = run(&Program::Sort(SortAlgorithm::Quick), "3\n1 x 2\n").unwrap_err();
    match err {
        LabError::Input(InputError::Malformed { token, position, .. }) => {
            assert_eq!(token, "x");
            assert_eq!(position, 3);
        }
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn truncated_input_is_reported() {
    let err = run(&Program::Knapsack, "3\n1 3 4\n15 20 30\n").unwrap_err();
    assert!(matches!(err, LabError::Input(InputError::UnexpectedEof { .. })));
}

#[test]
fn over_capacity_is_rejected_before_reading_values() {
    let err = run(&Program::Sort(SortAlgorithm::Merge), "101").unwrap_err();
    assert!(matches!(
        err,
        LabError::Input(InputError::CapacityExceeded { len: 101, max: 100, .. })
    ));
}

#[test]
fn raised_limit_accepts_larger_inputs() {
    let mut config = LabConfig::default();
    config.limits.max_elements = 1000;
    let values: Vec<String> = (0..500).rev().map(|v| v.to_string()).collect();
    let input = format!("500\n{}\n", values.join(" "));
    let out = run_program(
        &Program::Sort(SortAlgorithm::Heap),
        &input,
        &config,
        &SteppingClock::frozen(),
    )
    .unwrap();
    let first_line = out.lines().next().unwrap();
    assert!(first_line.starts_with("0 1 2 3 "));
    assert!(first_line.ends_with(" 498 499 "));
}

#[test]
fn knapsack_capacity_limit() {
    let err = run(&Program::Knapsack, "1\n1\n1\n5000\n").unwrap_err();
    assert!(matches!(
        err,
        LabError::Input(InputError::CapacityExceeded { what: "knapsack capacity", .. })
    ));
}

#[test]
fn lcs_word_limit() {
    let long = "a".repeat(101);
    let err = run(&Program::Lcs, &format!("{long} abc")).unwrap_err();
    assert!(matches!(err, LabError::Input(InputError::CapacityExceeded { len: 101, .. })));
}

#[test]
fn fibonacci_overflow_is_an_error() {
    let err = run(&Program::Fibonacci, "94").unwrap_err();
    assert!(matches!(err, LabError::Algorithm(_)));
    assert_eq!(run(&Program::Fibonacci, "93").unwrap(), "12200160415121876738\n0.000000\n");
}

#[test]
fn dijkstra_source_out_of_range() {
    let err = run(&Program::Dijkstra, "2\n0 1\n1 0\n5\n").unwrap_err();
    assert!(matches!(err, LabError::Algorithm(_)));
}

#[test]
fn kth_smallest_rank_out_of_range() {
    let err = run(&Program::KthSmallest(KthSource::Stdin), "3\n1 2 3\n4\n").unwrap_err();
    assert!(matches!(err, LabError::Algorithm(_)));
}

#[test]
fn kth_smallest_uses_default_ranks() {
    let values: Vec<String> = (1..=20).rev().map(|v| v.to_string()).collect();
    let input = format!("20 {}", values.join(" "));
    let out = run(&Program::KthSmallest(KthSource::Stdin), &input).unwrap();
    assert!(out.contains("5 th smallest: 5\n"));
    assert!(out.contains("10 th smallest: 10\n"));
    assert!(out.contains("15 th smallest: 15\n"));
}

#[test]
fn generated_kth_smallest_is_reproducible_and_verified() {
    let program = Program::KthSmallest(KthSource::Generate {
        len: 100,
        seed: Some(2024),
    });
    let first = run_program(&program, "", &verified(), &SteppingClock::frozen()).unwrap();
    let second = run_program(&program, "", &verified(), &SteppingClock::frozen()).unwrap();
    assert_eq!(first, second);

    let mut lines = first.lines();
    assert_eq!(lines.next(), Some("Generated Array:"));
    let mut values: Vec<i64> = lines
        .next()
        .unwrap()
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 100);
    values.sort();
    assert!(first.contains(&format!("5 th smallest: {}\n", values[4])));
    assert!(first.contains(&format!("15 th smallest: {}\n", values[14])));
    assert!(first.ends_with("\nRunning time: 0.000000 seconds\n"));
}

#[test]
fn verification_accepts_correct_results() {
    for (fixture, program) in [
        ("knapsack", Program::Knapsack),
        ("dijkstra", Program::Dijkstra),
        ("minimum_coins", Program::MinimumCoins),
        ("kth_smallest", Program::KthSmallest(KthSource::Stdin)),
        ("strassen", Program::Strassen),
    ] {
        let input = load_fixture(&format!("{fixture}.in"));
        run_program(&program, &input, &verified(), &SteppingClock::frozen())
            .unwrap_or_else(|e| panic!("{fixture}: {e}"));
    }
}

#[test]
fn zero_coin_is_invalid_input() {
    let err = run(&Program::MinimumCoins, "2\n0 5\n10\n").unwrap_err();
    assert!(matches!(err, LabError::Algorithm(_)));
}

#[test]
fn knapsack_overflow_is_an_error_with_or_without_verify() {
    let input = format!("2\n1 1\n{} 2\n2\n", i64::MAX - 1);
    for config in [LabConfig::default(), verified()] {
        let err = run_program(&Program::Knapsack, &input, &config, &SteppingClock::frozen())
            .unwrap_err();
        assert!(matches!(err, LabError::Algorithm(AlgoError::Overflow(_))), "{err}");
    }
}

#[test]
fn verified_knapsack_near_the_value_limit() {
    let input = format!("2\n1 1\n{} 1\n1\n", i64::MAX - 1);
    let out = run_program(&Program::Knapsack, &input, &verified(), &SteppingClock::frozen())
        .unwrap();
    assert_eq!(out, format!("{}\n0.000000\n", i64::MAX - 1));
}

#[test]
fn rod_cut_and_job_sequencing_overflow_are_errors() {
    let max = i64::MAX;
    let err = run(&Program::RodCut, &format!("2\n{max} {max}\n")).unwrap_err();
    assert!(matches!(err, LabError::Algorithm(AlgoError::Overflow(_))));
    let err = run(&Program::JobSequencing, &format!("2\n1 2\n{max} {max}\n")).unwrap_err();
    assert!(matches!(err, LabError::Algorithm(AlgoError::Overflow(_))));
}
