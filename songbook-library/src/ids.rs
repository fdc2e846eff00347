/// Derive the next identifier for a collection.
///
/// Returns `max + 1` over the ids currently in use, or 1 for an empty
/// collection. Working from the maximum rather than the last element
/// keeps ids collision-free regardless of element order.
pub fn next_id<I>(ids: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    ids.into_iter().max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_starts_at_one() {
        assert_eq!(next_id([]), 1);
    }

    #[test]
    fn increments_past_the_maximum() {
        assert_eq!(next_id([1, 2, 3]), 4);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(next_id([3, 1, 2]), 4);
    }

    #[test]
    fn gaps_do_not_cause_collisions() {
        assert_eq!(next_id([1, 5]), 6);
    }
}
