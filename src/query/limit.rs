//! Result capping

use std::iter::Take;

/// Caps a sequence at `n` elements.
///
/// `None` and `Some(0)` mean unlimited. The returned iterator stops
/// pulling from `iter` once the cap is reached.
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Take<I::IntoIter> {
    let cap = match n {
        None | Some(0) => usize::MAX,
        Some(n) => n,
    };
    iter.into_iter().take(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited() {
        let all: Vec<_> = limit(1..=5, None).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);

        let all: Vec<_> = limit(1..=5, Some(0)).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_first_k() {
        let first: Vec<_> = limit(1..=5, Some(2)).collect();
        assert_eq!(first, vec![1, 2]);
    }

    #[test]
    fn test_cap_beyond_length() {
        let all: Vec<_> = limit(1..=3, Some(10)).collect();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn test_does_not_pull_past_cap() {
        let mut pulled = 0;
        let source = (0..100).inspect(|_| pulled += 1);
        let taken: Vec<_> = limit(source, Some(3)).collect();

        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(pulled, 3);
    }
}
