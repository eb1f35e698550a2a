//! Purpose: Order-preserving slice helpers.
//! Exports: `chunk`, `reverse`.
//! Role: Small, pure functions over borrowed slices; inputs are never mutated.
//! Invariants: Element order within and across groups matches the input.
//! Invariants: A zero chunk size is rejected, never looped on.

use crate::error::{Error, ErrorKind};

/// Split `items` into consecutive groups of at most `chunk_size` elements.
///
/// The final group may be shorter. An empty input yields a single empty
/// group. `chunk_size` must be positive.
pub fn chunk<T: Clone>(items: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>, Error> {
    if chunk_size == 0 {
        return Err(Error::new(ErrorKind::Usage).with_message("chunk size must be positive"));
    }
    if items.is_empty() {
        return Ok(vec![Vec::new()]);
    }
    Ok(items
        .chunks(chunk_size)
        .map(|group| group.to_vec())
        .collect())
}

/// Return a new vector with the elements of `items` in opposite order.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{chunk, reverse};
    use crate::error::ErrorKind;

    #[test]
    fn chunk_splits_evenly() {
        let groups = chunk(&[1, 2, 3, 4], 2).expect("chunks");
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn chunk_leaves_short_tail() {
        let groups = chunk(&[1, 2, 3, 4], 3).expect("chunks");
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn chunk_of_structs_preserves_order() {
        #[derive(Clone, Debug, PartialEq)]
        struct Item {
            label: String,
        }
        let items: Vec<Item> = ["1", "2", "3", "4"]
            .iter()
            .map(|label| Item {
                label: label.to_string(),
            })
            .collect();

        let groups = chunk(&items, 2).expect("chunks");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][1].label, "4");
    }

    #[test]
    fn chunk_empty_input_yields_one_empty_group() {
        let groups = chunk::<i32>(&[], 2).expect("chunks");
        assert_eq!(groups, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn chunk_rejects_zero_size() {
        let err = chunk(&[1, 2, 3], 0).expect_err("usage error");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn chunk_size_larger_than_input_is_one_group() {
        let groups = chunk(&[1, 2], 10).expect("chunks");
        assert_eq!(groups, vec![vec![1, 2]]);
    }

    #[test]
    fn reverse_flips_order_without_mutating() {
        let items = vec![1, 2, 3];
        let flipped = reverse(&items);
        assert_eq!(flipped, vec![3, 2, 1]);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(reverse(&reverse(&items)), items);
    }

    #[test]
    fn reverse_empty_is_empty() {
        assert_eq!(reverse::<i32>(&[]), Vec::<i32>::new());
    }
}
