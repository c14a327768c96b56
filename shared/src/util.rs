/// Next sequential id for a collection: `max(ids) + 1`, or `1` when empty.
///
/// Deleting the highest id makes it available again. `None` once the
/// highest id is `i64::MAX`.
pub fn next_id(ids: impl IntoIterator<Item = i64>) -> Option<i64> {
    ids.into_iter().max().map_or(Some(1), |max| max.checked_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(std::iter::empty()), Some(1));
        assert_eq!(next_id([1, 2, 3]), Some(4));
        assert_eq!(next_id([7, 2]), Some(8));
    }

    #[test]
    fn test_next_id_exhausted() {
        assert_eq!(next_id([i64::MAX - 1]), Some(i64::MAX));
        assert_eq!(next_id([3, i64::MAX]), None);
    }
}
