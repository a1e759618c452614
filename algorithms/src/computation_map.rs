/// Mapping of every harness program to the module implementing its kernel,
/// the type of computation and whether the kernel is deterministic.
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str, &str)] = &[
    // Sorting
    ("bubble-sort", "sorting/bubble_sort.rs", "Sorting", "Deterministic"),
    ("insertion-sort", "sorting/insertion_sort.rs", "Sorting", "Deterministic"),
    ("selection-sort", "sorting/selection_sort.rs", "Sorting", "Deterministic"),
    ("merge-sort", "sorting/merge_sort.rs", "Sorting", "Deterministic"),
    ("quick-sort", "sorting/quick_sort.rs", "Sorting", "Deterministic"),
    ("heap-sort", "sorting/heap_sort.rs", "Sorting", "Deterministic"),
    // Dynamic programming
    (
        "matrix-chain",
        "dynamic_programming/matrix_chain.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "knapsack",
        "dynamic_programming/knapsack.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "coin-change",
        "dynamic_programming/coin_change.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "rod-cut",
        "dynamic_programming/rod_cutting.rs",
        "DP computation",
        "Deterministic",
    ),
    (
        "fibonacci",
        "dynamic_programming/fibonacci.rs",
        "DP computation",
        "Deterministic",
    ),
    ("lcs", "dynamic_programming/lcs.rs", "DP computation", "Deterministic"),
    // Graph algorithms
    ("dijkstra", "graph/dijkstra.rs", "Shortest path", "Deterministic"),
    ("bellman-ford", "graph/bellman_ford.rs", "Shortest path", "Deterministic"),
    // Greedy
    (
        "activity-selection",
        "greedy/activity_selection.rs",
        "Greedy scheduling",
        "Deterministic",
    ),
    (
        "fractional-knapsack",
        "greedy/fractional_knapsack.rs",
        "Greedy optimization",
        "Deterministic",
    ),
    (
        "job-sequencing",
        "greedy/job_sequencing.rs",
        "Greedy scheduling",
        "Deterministic",
    ),
    (
        "minimum-coins",
        "greedy/minimum_coins.rs",
        "Greedy approximation",
        "Deterministic",
    ),
    // Selection
    (
        "kth-smallest",
        "selection/quickselect.rs",
        "Order statistic",
        "Deterministic",
    ),
    // Numerical
    (
        "strassen",
        "numerical/strassen.rs",
        "Numerical computation",
        "Deterministic",
    ),
];

/// Looks up the `(module, computation, determinism)` entry for a program.
pub fn lookup(program: &str) -> Option<(&'static str, &'static str, &'static str)> {
    ALGORITHMS_COMPUTATION_MAP
        .iter()
        .find(|(name, ..)| *name == program)
        .map(|&(_, module, kind, determinism)| (module, kind, determinism))
}
