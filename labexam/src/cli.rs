use clap::{Parser, Subcommand};
use std::path::PathBuf;

use algorithms::sorting::SortAlgorithm;

use crate::programs::{KthSource, Program};

#[derive(Parser)]
#[command(
    name = "labexam",
    about = "Run one classic algorithm on stdin input and report its running time",
    version
)]
pub struct Cli {
    /// TOML file with `verify` and `[limits]` settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Largest accepted sequence length, vertex count or edge count
    #[arg(long, global = true)]
    pub max_elements: Option<usize>,
    /// Largest accepted knapsack capacity, change amount or job deadline
    #[arg(long, global = true)]
    pub max_capacity: Option<usize>,
    /// Longest accepted LCS word
    #[arg(long, global = true)]
    pub max_string_len: Option<usize>,
    /// Check the result against the kernel's postconditions
    #[arg(long, global = true)]
    pub verify: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// n, then n integers
    BubbleSort,
    /// n, then n integers
    InsertionSort,
    /// n, then n integers
    SelectionSort,
    /// n, then n integers
    MergeSort,
    /// n, then n integers
    QuickSort,
    /// n, then n integers
    HeapSort,
    /// n, then n matrix dimensions
    MatrixChain,
    /// n, n weights, n values, capacity
    Knapsack,
    /// n, n coins, amount
    CoinChange,
    /// n, then prices for lengths 1..=n
    RodCut,
    /// n
    Fibonacci,
    /// two words
    Lcs,
    /// n, n*n adjacency matrix, source
    Dijkstra,
    /// n, e, e lines of `u v w`, source
    BellmanFord,
    /// n, n start times, n finish times
    ActivitySelection,
    /// n, n weights, n values, capacity
    FractionalKnapsack,
    /// n, n deadlines, n profits
    JobSequencing,
    /// n, n coins, amount (greedy)
    MinimumCoins,
    /// n, n integers, then ranks; or --generate
    KthSmallest {
        /// Generate this many distinct values instead of reading stdin
        #[arg(long)]
        generate: Option<usize>,
        /// Seed for --generate
        #[arg(long, requires = "generate")]
        seed: Option<u64>,
    },
    /// 2x2 matrix A then 2x2 matrix B, row-major
    Strassen,
    /// Print every program with its kernel module
    List,
}

impl Command {
    /// The program this command runs; `None` for `list`.
    pub fn program(&self) -> Option<Program> {
        let program = match self {
            Command::BubbleSort => Program::Sort(SortAlgorithm::Bubble),
            Command::InsertionSort => Program::Sort(SortAlgorithm::Insertion),
            Command::SelectionSort => Program::Sort(SortAlgorithm::Selection),
            Command::MergeSort => Program::Sort(SortAlgorithm::Merge),
            Command::QuickSort => Program::Sort(SortAlgorithm::Quick),
            Command::HeapSort => Program::Sort(SortAlgorithm::Heap),
            Command::MatrixChain => Program::MatrixChain,
            Command::Knapsack => Program::Knapsack,
            Command::CoinChange => Program::CoinChange,
            Command::RodCut => Program::RodCut,
            Command::Fibonacci => Program::Fibonacci,
            Command::Lcs => Program::Lcs,
            Command::Dijkstra => Program::Dijkstra,
            Command::BellmanFord => Program::BellmanFord,
            Command::ActivitySelection => Program::ActivitySelection,
            Command::FractionalKnapsack => Program::FractionalKnapsack,
            Command::JobSequencing => Program::JobSequencing,
            Command::MinimumCoins => Program::MinimumCoins,
            Command::KthSmallest { generate, seed } => Program::KthSmallest(match generate {
                Some(len) => KthSource::Generate {
                    len: *len,
                    seed: *seed,
                },
                None => KthSource::Stdin,
            }),
            Command::Strassen => Program::Strassen,
            Command::List => return None,
        };
        Some(program)
    }
}
