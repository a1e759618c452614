//! In-place heap sort over a binary max-heap.
//!
//! Variables:
//!   heap = arr[..end], children of k at 2k+1 and 2k+2
//!
//! Equations:
//!   build:   sift_down(k) for k = end/2 - 1 down to 0
//!   extract: swap(0, end-1), end -= 1, sift_down(0)
//!   sift_down moves to the larger child only when it is strictly greater,
//!   the left child winning ties.

pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    for root in (0..arr.len() / 2).rev() {
        sift_down(arr, root);
    }
    for end in (1..arr.len()).rev() {
        arr.swap(0, end);
        sift_down(&mut arr[..end], 0);
    }
}

fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < heap.len() && heap[left] > heap[largest] {
            largest = left;
        }
        if right < heap.len() && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}
