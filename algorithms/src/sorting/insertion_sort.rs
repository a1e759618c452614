//! Insertion sort.
//!
//! Invariant after step i: arr[0..=i] is sorted. Elements strictly greater
//! than the key shift right, so equal keys keep their relative order.

pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
