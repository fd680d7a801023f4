//! Splitting the pending queue into pages.

/// Number of pages needed for `len` drawers at `capacity` drawers per page.
pub fn chunk_count(len: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    len.div_ceil(capacity)
}

/// Split `keys` into consecutive pages of at most `capacity` keys.
///
/// Request order is preserved; only the last page may be short. A zero
/// capacity yields no pages.
pub fn chunk_keys<T: Clone>(keys: &[T], capacity: usize) -> Vec<Vec<T>> {
    if capacity == 0 {
        return Vec::new();
    }
    keys.chunks(capacity).map(|chunk| chunk.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("k{}", i)).collect()
    }

    #[test]
    fn test_empty_queue() {
        assert!(chunk_keys::<String>(&[], 5).is_empty());
        assert_eq!(chunk_count(0, 5), 0);
    }

    #[test]
    fn test_exact_capacity_is_one_page() {
        let chunks = chunk_keys(&keys(5), 5);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], keys(5));
    }

    #[test]
    fn test_capacity_plus_one_is_two_pages() {
        let chunks = chunk_keys(&keys(6), 5);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], vec!["k5".to_string()]);
    }

    #[test]
    fn test_chunk_sizes_and_order() {
        for capacity in 1..=7 {
            for n in 0..=20 {
                let input = keys(n);
                let chunks = chunk_keys(&input, capacity);
                assert_eq!(chunks.len(), chunk_count(n, capacity));
                if let Some((last, full)) = chunks.split_last() {
                    assert!(full.iter().all(|c| c.len() == capacity));
                    assert!(!last.is_empty() && last.len() <= capacity);
                }
                let flat: Vec<String> = chunks.into_iter().flatten().collect();
                assert_eq!(flat, input);
            }
        }
    }

    #[test]
    fn test_zero_capacity() {
        assert!(chunk_keys(&keys(3), 0).is_empty());
        assert_eq!(chunk_count(3, 0), 0);
    }
}
