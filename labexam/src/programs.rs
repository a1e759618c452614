//! One reader -> timed kernel -> writer pipeline per program.
//!
//! Every program reads its input in a fixed positional order, runs exactly
//! one kernel between two clock reads, and renders a fixed text layout.
//! Input parsing, verification and rendering sit outside the timed section.

use std::fmt::Write as _;
use std::time::Duration;

use algorithms::computation_map::lookup;
use algorithms::dynamic_programming::coin_change::coin_change;
use algorithms::dynamic_programming::fibonacci::fibonacci;
use algorithms::dynamic_programming::knapsack::{knapsack, Item};
use algorithms::dynamic_programming::lcs::{lcs_length, lcs_sequence};
use algorithms::dynamic_programming::matrix_chain::matrix_chain_order;
use algorithms::dynamic_programming::rod_cutting::rod_cutting;
use algorithms::graph::bellman_ford::{bellman_ford, BellmanFord};
use algorithms::graph::dijkstra::dijkstra;
use algorithms::graph::{DenseGraph, Edge};
use algorithms::greedy::activity_selection::{activity_selection, Activity};
use algorithms::greedy::fractional_knapsack::fractional_knapsack;
use algorithms::greedy::job_sequencing::{job_sequencing, Job};
use algorithms::greedy::minimum_coins::{greedy_change, Denominations};
use algorithms::invariant::{Invariant, NonNegative, PermutationOf, Sorted};
use algorithms::AlgoError;
use algorithms::numerical::strassen::naive_2x2;
use algorithms::numerical::{strassen_2x2, Matrix2};
use algorithms::selection::{distinct_sample, kth_smallest};
use algorithms::sorting::SortAlgorithm;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{LabConfig, Limits};
use crate::error::LabError;
use crate::reader::{check_capacity, TokenReader};
use crate::timer::{measure, Clock};
use crate::writer::{seconds, spaced};

/// Ranks reported when none are given.
pub const DEFAULT_RANKS: [usize; 3] = [5, 10, 15];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KthSource {
    /// `n`, `n` values, then one or more ranks (defaults when absent).
    Stdin,
    /// `len` distinct values from `0..=len`, queried at the default ranks.
    Generate { len: usize, seed: Option<u64> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Program {
    Sort(SortAlgorithm),
    MatrixChain,
    Knapsack,
    CoinChange,
    RodCut,
    Fibonacci,
    Lcs,
    Dijkstra,
    BellmanFord,
    ActivitySelection,
    FractionalKnapsack,
    JobSequencing,
    MinimumCoins,
    KthSmallest(KthSource),
    Strassen,
}

impl Program {
    pub fn name(&self) -> &'static str {
        match self {
            Program::Sort(algo) => algo.name(),
            Program::MatrixChain => "matrix-chain",
            Program::Knapsack => "knapsack",
            Program::CoinChange => "coin-change",
            Program::RodCut => "rod-cut",
            Program::Fibonacci => "fibonacci",
            Program::Lcs => "lcs",
            Program::Dijkstra => "dijkstra",
            Program::BellmanFord => "bellman-ford",
            Program::ActivitySelection => "activity-selection",
            Program::FractionalKnapsack => "fractional-knapsack",
            Program::JobSequencing => "job-sequencing",
            Program::MinimumCoins => "minimum-coins",
            Program::KthSmallest(_) => "kth-smallest",
            Program::Strassen => "strassen",
        }
    }
}

struct Run<'a, 'c, C: Clock + ?Sized> {
    name: &'static str,
    reader: TokenReader<'a>,
    limits: Limits,
    verify: bool,
    clock: &'c C,
    out: String,
}

/// Runs `program` on `input` and returns the text to print.
pub fn run_program<C: Clock + ?Sized>(
    program: &Program,
    input: &str,
    config: &LabConfig,
    clock: &C,
) -> Result<String, LabError> {
    let mut run = Run {
        name: program.name(),
        reader: TokenReader::new(input),
        limits: config.limits,
        verify: config.verify,
        clock,
        out: String::new(),
    };

    let elapsed = match program {
        Program::Sort(algo) => run.sort(*algo)?,
        Program::MatrixChain => run.matrix_chain()?,
        Program::Knapsack => run.knapsack()?,
        Program::CoinChange => run.coin_change()?,
        Program::RodCut => run.rod_cut()?,
        Program::Fibonacci => run.fibonacci()?,
        Program::Lcs => run.lcs()?,
        Program::Dijkstra => run.dijkstra()?,
        Program::BellmanFord => run.bellman_ford()?,
        Program::ActivitySelection => run.activity_selection()?,
        Program::FractionalKnapsack => run.fractional_knapsack()?,
        Program::JobSequencing => run.job_sequencing()?,
        Program::MinimumCoins => run.minimum_coins()?,
        Program::KthSmallest(source) => run.kth_smallest(source)?,
        Program::Strassen => run.strassen()?,
    };

    let kind = lookup(run.name).map_or("unknown", |(_, kind, _)| kind);
    info!(
        program = run.name,
        kind,
        elapsed_secs = elapsed.as_secs_f64(),
        "kernel finished"
    );
    Ok(run.out)
}

impl<C: Clock + ?Sized> Run<'_, '_, C> {
    fn fail(&self, reason: impl Into<String>) -> LabError {
        LabError::VerificationFailed {
            program: self.name,
            reason: reason.into(),
        }
    }

    /// Result line, then the timing line.
    fn scalar(
        &mut self,
        value: impl std::fmt::Display,
        elapsed: Duration,
    ) -> Result<Duration, LabError> {
        writeln!(self.out, "{value}")?;
        writeln!(self.out, "{}", seconds(elapsed))?;
        Ok(elapsed)
    }

    fn sort(&mut self, algo: SortAlgorithm) -> Result<Duration, LabError> {
        let n = self.reader.next_len("n", self.limits.max_elements)?;
        let mut values = self.reader.i64s(n, "array element")?;
        debug!(program = self.name, n, "input parsed");
        let original = self.verify.then(|| values.clone());

        let timed = measure(self.clock, || algo.apply(&mut values));

        if let Some(original) = original {
            if !Sorted.check(&values) {
                return Err(self.fail("output is not non-decreasing"));
            }
            if !PermutationOf::new(&original).check(&values) {
                return Err(self.fail("output is not a permutation of the input"));
            }
        }
        writeln!(self.out, "{}", spaced(&values))?;
        writeln!(self.out, "{}", seconds(timed.elapsed))?;
        Ok(timed.elapsed)
    }

    fn matrix_chain(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("dimension count", self.limits.max_elements)?;
        let dims = self.reader.u64s(n, "matrix dimension")?;

        let timed = measure(self.clock, || matrix_chain_order(&dims));
        let plan = timed.value?;
        debug!(order = %plan.parenthesization(), "optimal parenthesization");
        self.scalar(plan.cost, timed.elapsed)
    }

    fn knapsack(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("item count", self.limits.max_elements)?;
        let weights = self.reader.usizes(n, "item weight")?;
        let values = self.reader.i64s(n, "item value")?;
        let capacity = self.reader.next_len("knapsack capacity", self.limits.max_capacity)?;
        let items = zip_items(&weights, &values);

        let timed = measure(self.clock, || knapsack(&items, capacity));
        let best = timed.value?;

        if self.verify {
            let (weight, value) = best
                .items
                .iter()
                .try_fold((0usize, 0i64), |(weight, value), &i| {
                    Some((
                        weight.checked_add(items[i].weight)?,
                        value.checked_add(items[i].value)?,
                    ))
                })
                .ok_or(AlgoError::Overflow("knapsack verification"))?;
            if weight > capacity || value != best.value {
                return Err(self.fail(format!(
                    "chosen items {:?} weigh {weight} and are worth {value}",
                    best.items
                )));
            }
        }
        debug!(items = ?best.items, "chosen items");
        self.scalar(best.value, timed.elapsed)
    }

    fn coin_change(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("coin count", self.limits.max_elements)?;
        let coins = self.reader.usizes(n, "coin value")?;
        let amount = self.reader.next_len("amount", self.limits.max_capacity)?;

        let timed = measure(self.clock, || coin_change(&coins, amount));
        let elapsed = timed.elapsed;
        match timed.value? {
            Some(count) => self.scalar(count, elapsed),
            None => self.scalar(-1, elapsed),
        }
    }

    fn rod_cut(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("rod length", self.limits.max_elements)?;
        let prices = self.reader.i64s(n, "piece price")?;

        let timed = measure(self.clock, || rod_cutting(&prices));
        let revenue = timed.value?;
        self.scalar(revenue, timed.elapsed)
    }

    fn fibonacci(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("n", self.limits.max_elements)?;

        let timed = measure(self.clock, || fibonacci(n));
        let value = timed.value?;
        self.scalar(value, timed.elapsed)
    }

    fn lcs(&mut self) -> Result<Duration, LabError> {
        let max = self.limits.max_string_len;
        let a = self.reader.next_word("first string length", max)?.as_bytes();
        let b = self.reader.next_word("second string length", max)?.as_bytes();

        let timed = measure(self.clock, || lcs_length(a, b));
        debug!(
            subsequence = %String::from_utf8_lossy(&lcs_sequence(a, b)),
            "one longest common subsequence"
        );
        self.scalar(timed.value, timed.elapsed)
    }

    fn dijkstra(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("vertex count", self.limits.max_elements)?;
        let weights = self.reader.i64s(n * n, "adjacency matrix entry")?;
        let source = self.reader.next_usize("source vertex")?;
        let graph = DenseGraph::from_rows(n, weights)?;

        let timed = measure(self.clock, || dijkstra(&graph, source));
        let dist = timed.value?;

        if self.verify {
            if let Some(d) = dist
                .iter()
                .filter_map(|d| d.finite())
                .find(|d| !NonNegative.check(d))
            {
                return Err(self.fail(format!("negative distance {d}")));
            }
        }
        writeln!(self.out, "{}", spaced(&dist))?;
        writeln!(self.out, "{}", seconds(timed.elapsed))?;
        Ok(timed.elapsed)
    }

    fn bellman_ford(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("vertex count", self.limits.max_elements)?;
        let e = self.reader.next_len("edge count", self.limits.max_elements)?;
        let mut edges = Vec::with_capacity(e);
        for _ in 0..e {
            let from = self.reader.next_usize("edge source")?;
            let to = self.reader.next_usize("edge target")?;
            let weight = self.reader.next_i64("edge weight")?;
            edges.push(Edge { from, to, weight });
        }
        let source = self.reader.next_usize("source vertex")?;

        let timed = measure(self.clock, || bellman_ford(n, &edges, source));
        match timed.value? {
            BellmanFord::NegativeCycle => {
                writeln!(self.out, "Negative cycle detected")?;
            }
            BellmanFord::ShortestPaths(dist) => {
                writeln!(self.out, "{}Execution time to run it :- ", spaced(&dist))?;
            }
        }
        writeln!(self.out, "{}", seconds(timed.elapsed))?;
        Ok(timed.elapsed)
    }

    fn activity_selection(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("activity count", self.limits.max_elements)?;
        let starts = self.reader.i64s(n, "start time")?;
        let finishes = self.reader.i64s(n, "finish time")?;
        let activities: Vec<Activity> = starts
            .iter()
            .zip(&finishes)
            .map(|(&start, &finish)| Activity { start, finish })
            .collect();

        let timed = measure(self.clock, || activity_selection(&activities));
        debug!(selected = ?timed.value, "selected activities");
        self.scalar(timed.value.len(), timed.elapsed)
    }

    fn fractional_knapsack(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("item count", self.limits.max_elements)?;
        let weights = self.reader.usizes(n, "item weight")?;
        let values = self.reader.i64s(n, "item value")?;
        let capacity = self.reader.next_usize("knapsack capacity")?;
        let items = zip_items(&weights, &values);

        let timed = measure(self.clock, || fractional_knapsack(&items, capacity));
        let fill = timed.value?;
        debug!(taken = ?fill.taken, "loaded items and fractions");
        self.scalar(format!("{:.2}", fill.total), timed.elapsed)
    }

    fn job_sequencing(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("job count", self.limits.max_elements)?;
        let deadlines = self.reader.usizes(n, "job deadline")?;
        for &deadline in &deadlines {
            check_capacity("job deadline", deadline, self.limits.max_capacity)?;
        }
        let profits = self.reader.i64s(n, "job profit")?;
        let jobs: Vec<Job> = deadlines
            .iter()
            .zip(&profits)
            .map(|(&deadline, &profit)| Job { deadline, profit })
            .collect();

        let timed = measure(self.clock, || job_sequencing(&jobs));
        let schedule = timed.value?;
        debug!(jobs = ?schedule.scheduled().collect::<Vec<_>>(), "scheduled jobs by slot");
        self.scalar(schedule.profit, timed.elapsed)
    }

    fn minimum_coins(&mut self) -> Result<Duration, LabError> {
        let n = self.reader.next_len("coin count", self.limits.max_elements)?;
        let coins = self.reader.u64s(n, "coin value")?;
        let amount = self.reader.next_u64("amount")?;

        let denominations = Denominations::new(&coins)?;

        let timed = measure(self.clock, || greedy_change(&denominations, amount));
        let change = timed.value;

        debug!(used = ?change.used, "coins taken");
        if change.remainder > 0 {
            warn!(remainder = change.remainder, "amount cannot be represented exactly");
        }
        if self.verify {
            self.compare_with_exact_change(&coins, amount, change.count)?;
        }
        self.scalar(change.count, timed.elapsed)
    }

    /// The greedy answer is kept as-is; a worse-than-optimal count is only
    /// reported.
    fn compare_with_exact_change(
        &self,
        coins: &[u64],
        amount: u64,
        greedy: u64,
    ) -> Result<(), LabError> {
        let Ok(amount) = usize::try_from(amount) else {
            return Ok(());
        };
        if amount > self.limits.max_capacity {
            return Ok(());
        }
        let Ok(coins) = coins
            .iter()
            .map(|&c| usize::try_from(c))
            .collect::<Result<Vec<_>, _>>()
        else {
            return Ok(());
        };
        if let Some(exact) = coin_change(&coins, amount)? {
            if exact < greedy {
                warn!(greedy, exact, "greedy change is not optimal for this coin system");
            }
        }
        Ok(())
    }

    fn kth_smallest(&mut self, source: &KthSource) -> Result<Duration, LabError> {
        let (mut values, ranks) = match source {
            KthSource::Stdin => {
                let n = self.reader.next_len("n", self.limits.max_elements)?;
                let values = self.reader.i64s(n, "array element")?;
                let mut ranks = self.reader.rest_usizes("rank")?;
                if ranks.is_empty() {
                    ranks = DEFAULT_RANKS.to_vec();
                }
                (values, ranks)
            }
            KthSource::Generate { len, seed } => {
                check_capacity("generated length", *len, self.limits.max_elements)?;
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                let values = distinct_sample(*len, &mut rng);
                writeln!(self.out, "Generated Array:")?;
                writeln!(self.out, "{}", spaced(&values))?;
                (values, DEFAULT_RANKS.to_vec())
            }
        };
        let sorted = self.verify.then(|| {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            sorted
        });

        let timed = measure(self.clock, || {
            ranks
                .iter()
                .map(|&k| kth_smallest(&mut values, k))
                .collect::<Result<Vec<_>, _>>()
        });
        let answers = timed.value?;

        if let Some(sorted) = sorted {
            for (&k, &answer) in ranks.iter().zip(&answers) {
                if sorted[k - 1] != answer {
                    return Err(self.fail(format!(
                        "rank {k} gave {answer}, expected {}",
                        sorted[k - 1]
                    )));
                }
            }
        }

        writeln!(self.out)?;
        for (k, answer) in ranks.iter().zip(&answers) {
            writeln!(self.out, "{k} th smallest: {answer}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Running time: {} seconds", seconds(timed.elapsed))?;
        Ok(timed.elapsed)
    }

    fn strassen(&mut self) -> Result<Duration, LabError> {
        let a = self.matrix2("first matrix entry")?;
        let b = self.matrix2("second matrix entry")?;

        let timed = measure(self.clock, || strassen_2x2(&a, &b));
        let product = timed.value?;

        if self.verify && naive_2x2(&a, &b)? != product {
            return Err(self.fail("Strassen product disagrees with the naive product"));
        }
        for row in &product {
            writeln!(self.out, "{}", spaced(row))?;
        }
        writeln!(self.out, "{}", seconds(timed.elapsed))?;
        Ok(timed.elapsed)
    }

    fn matrix2(&mut self, expected: &'static str) -> Result<Matrix2, LabError> {
        let mut m = [[0i64; 2]; 2];
        for row in &mut m {
            for cell in row.iter_mut() {
                *cell = self.reader.next_i64(expected)?;
            }
        }
        Ok(m)
    }
}

fn zip_items(weights: &[usize], values: &[i64]) -> Vec<Item> {
    weights
        .iter()
        .zip(values)
        .map(|(&weight, &value)| Item { weight, value })
        .collect()
}
