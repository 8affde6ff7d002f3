//! Sorted-vec discipline shared by every id-keyed collection.
//!
//! Banks, customers, accounts, and transactions all live in vectors
//! kept sorted by id: insertion happens at the sorted position (never
//! sort-after-append) and lookup is a binary search.

/// Insert `item` at its sorted position and return the index it landed at.
pub(crate) fn insert_by_key<T, K, F>(items: &mut Vec<T>, item: T, key: F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let target = key(&item);
    let index = match items.binary_search_by(|probe| key(probe).cmp(&target)) {
        Ok(index) | Err(index) => index,
    };
    items.insert(index, item);
    index
}

/// Binary search for the item whose key equals `target`.
pub(crate) fn find_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items
        .binary_search_by(|probe| key(probe).cmp(target))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(items: &[u32]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn insert_keeps_order() {
        let mut items = Vec::new();
        for value in [42u32, 7, 99, 1, 55, 55, 3] {
            insert_by_key(&mut items, value, |v| *v);
            assert!(is_sorted(&items));
        }
        assert_eq!(items.len(), 7);
    }

    #[test]
    fn insert_returns_landing_index() {
        let mut items = vec![10u32, 30];
        let index = insert_by_key(&mut items, 20, |v| *v);
        assert_eq!(index, 1);
        assert_eq!(items, vec![10, 20, 30]);
    }

    #[test]
    fn find_hits_and_misses() {
        let mut items = Vec::new();
        for value in [5u32, 1, 9] {
            insert_by_key(&mut items, value, |v| *v);
        }
        assert_eq!(find_by_key(&items, &5, |v| *v), Some(1));
        assert_eq!(find_by_key(&items, &9, |v| *v), Some(2));
        assert_eq!(find_by_key(&items, &4, |v| *v), None);
    }
}
