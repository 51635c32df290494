// Linear and binary scans over slices. Both return the index of a match, with
// `None` as the not-found sentinel.

use std::cmp::Ordering;

/// Scans from the first element and returns the position of the first match.
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|item| item == target)
}

/// Binary search over a slice sorted in ascending order.
///
/// Precondition: `data` must be sorted; the result is unspecified otherwise.
/// When duplicates are present, the returned index is any index holding the
/// target value, not necessarily the first.
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let mut left = 0;
    let mut right = data.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match data[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    None
}

pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
