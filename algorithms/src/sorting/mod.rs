pub mod bubble_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;

/// The comparison sorts, addressable by name from the harness.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble-sort",
            SortAlgorithm::Insertion => "insertion-sort",
            SortAlgorithm::Selection => "selection-sort",
            SortAlgorithm::Merge => "merge-sort",
            SortAlgorithm::Quick => "quick-sort",
            SortAlgorithm::Heap => "heap-sort",
        }
    }

    /// Sorts `arr` in place. Merge sort goes through its auxiliary buffer
    /// and copies the result back.
    pub fn apply<T: Ord + Clone>(self, arr: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort::bubble_sort(arr),
            SortAlgorithm::Insertion => insertion_sort::insertion_sort(arr),
            SortAlgorithm::Selection => selection_sort::selection_sort(arr),
            SortAlgorithm::Merge => {
                let sorted = merge_sort::merge_sort(arr);
                arr.clone_from_slice(&sorted);
            }
            SortAlgorithm::Quick => quick_sort::quick_sort(arr),
            SortAlgorithm::Heap => heap_sort::heap_sort(arr),
        }
    }
}
