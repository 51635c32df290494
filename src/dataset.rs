// Randomized dataset generation and target selection.

use rand::Rng;

/// A dataset of bounded random integers, sorted once at construction and
/// read-only afterwards. One instance lives per requested size and is dropped
/// after its measurement round.
pub struct Dataset {
    data: Vec<i64>,
    bound: i64,
}

impl Dataset {
    /// Generates `size` values uniformly drawn from `0..=size * 10` and sorts
    /// them ascending.
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(size: usize, rng: &mut R) -> Self {
        let bound = size as i64 * 10;
        let mut data: Vec<i64> = (0..size).map(|_| rng.gen_range(0..=bound)).collect();
        data.sort_unstable();
        Dataset { data, bound }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.data
    }

    /// A value known to exist in the dataset, selected by a uniformly random
    /// index. `None` for an empty dataset.
    pub fn present_target<R: Rng>(&self, rng: &mut R) -> Option<i64> {
        if self.data.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.data.len());
        Some(self.data[index])
    }

    /// A value guaranteed absent: one past the generation bound, so it cannot
    /// collide with any generated value.
    pub fn absent_target(&self) -> i64 {
        self.bound + 1
    }

    /// The first `n` elements of the sorted data, for console previews.
    pub fn preview(&self, n: usize) -> &[i64] {
        &self.data[..self.data.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::is_sorted;

    #[test]
    fn test_generated_data_is_sorted_and_bounded() {
        let mut rng = rand::thread_rng();
        let dataset = Dataset::with_rng(500, &mut rng);
        assert_eq!(dataset.len(), 500);
        assert!(is_sorted(dataset.values()));
        assert!(dataset.values().iter().all(|&v| (0..=5000).contains(&v)));
    }

    #[test]
    fn test_present_target_is_contained() {
        let mut rng = rand::thread_rng();
        let dataset = Dataset::with_rng(200, &mut rng);
        for _ in 0..20 {
            let target = dataset.present_target(&mut rng).unwrap();
            assert!(dataset.values().contains(&target));
        }
    }

    #[test]
    fn test_absent_target_never_collides() {
        let mut rng = rand::thread_rng();
        for &size in &[1, 10, 1000] {
            let dataset = Dataset::with_rng(size, &mut rng);
            assert!(!dataset.values().contains(&dataset.absent_target()));
        }
    }

    #[test]
    fn test_empty_dataset() {
        let mut rng = rand::thread_rng();
        let dataset = Dataset::with_rng(0, &mut rng);
        assert!(dataset.is_empty());
        assert_eq!(dataset.present_target(&mut rng), None);
        assert_eq!(dataset.absent_target(), 1);
    }

    #[test]
    fn test_preview_truncates() {
        let mut rng = rand::thread_rng();
        let dataset = Dataset::with_rng(50, &mut rng);
        assert_eq!(dataset.preview(10).len(), 10);
        assert_eq!(dataset.preview(100).len(), 50);
        assert_eq!(dataset.preview(10), &dataset.values()[..10]);
    }
}
