//! Slide index arithmetic.

/// Index of the slide `offset` positions away from `current`, wrapping in both
/// directions. `None` when there are no slides.
#[inline]
pub fn wrap_index(current: usize, offset: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let n = count as i64;
    let target = (current as i64 + offset as i64).rem_euclid(n);
    Some(target as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn forward_wraps_to_start() {
        assert_eq!(wrap_index(2, 1, 3), Some(0));
        assert_eq!(wrap_index(0, 7, 3), Some(1));
    }

    #[test]
    fn backward_wraps_to_end() {
        assert_eq!(wrap_index(0, -1, 3), Some(2));
        assert_eq!(wrap_index(1, -5, 3), Some(2));
    }

    proptest! {
        #[test]
        fn offset_then_inverse_is_identity(
            (count, current) in (1usize..64).prop_flat_map(|n| (Just(n), 0..n)),
            k in -10_000isize..10_000,
        ) {
            let there = wrap_index(current, k, count).expect("non-empty");
            prop_assert!(there < count);
            prop_assert_eq!(wrap_index(there, -k, count), Some(current));
        }
    }

    #[test]
    fn empty_has_no_slide() {
        assert_eq!(wrap_index(0, 1, 0), None);
    }
}
