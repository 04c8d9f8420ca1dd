use std::cmp::Ordering;

use crate::ship::Ship;

/// In-place insertion sort, ascending by year.
///
/// O(n^2) worst and average case, O(n) on already sorted input. Stable.
pub fn insertion_sort(ships: &mut [Ship]) {
    for i in 1..ships.len() {
        let mut j = i;
        while j > 0 && ships[j - 1].cmp_by_year(&ships[j]) == Ordering::Greater {
            ships.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// In-place heap sort, ascending by year.
///
/// Builds a max-heap bottom-up, then repeatedly swaps the root with the last
/// unsorted element and restores the reduced heap. O(n log n) in all cases.
/// Not stable.
pub fn heap_sort(ships: &mut [Ship]) {
    let n = ships.len();
    for root in (0..n / 2).rev() {
        sift_down(ships, root, n);
    }
    for end in (1..n).rev() {
        ships.swap(0, end);
        sift_down(ships, 0, end);
    }
}

// Restore the max-heap property for the subtree at `root`, considering only
// indices below `end`.
fn sift_down(ships: &mut [Ship], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        let mut largest = root;
        if left < end && ships[left].cmp_by_year(&ships[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < end && ships[right].cmp_by_year(&ships[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            break;
        }
        ships.swap(root, largest);
        root = largest;
    }
}

/// Recursive merge sort, ascending by year.
///
/// Divides at the midpoint, sorts each half, then merges the two sorted runs
/// through auxiliary buffers sized to each half. O(n log n) in all cases.
/// Stable: on equal years the front element of the left run is copied first.
pub fn merge_sort(ships: &mut [Ship]) {
    if ships.len() > 1 {
        let mid = ships.len() / 2;
        merge_sort(&mut ships[..mid]);
        merge_sort(&mut ships[mid..]);
        merge(ships, mid);
    }
}

fn merge(ships: &mut [Ship], mid: usize) {
    let left_run = ships[..mid].to_vec();
    let right_run = ships[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left_run.len() && j < right_run.len() {
        if left_run[i].cmp_by_year(&right_run[j]) != Ordering::Greater {
            ships[k] = left_run[i].clone();
            i += 1;
        } else {
            ships[k] = right_run[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left_run.len() {
        ships[k] = left_run[i].clone();
        i += 1;
        k += 1;
    }
    while j < right_run.len() {
        ships[k] = right_run[j].clone();
        j += 1;
        k += 1;
    }
}
