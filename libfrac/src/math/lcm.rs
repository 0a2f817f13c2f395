use num_traits::PrimInt;

/// Calculates the least common multiple of two positive integers by brute-force search.
///
/// With `n1 = max(a, b)` and `n2 = min(a, b)`, the multiples `n1 * i` for `i ∈ [1, n2)` are
/// scanned in order and the first one divisible by `n2` is returned. If there is none,
/// `n1 * n2` is returned.
///
/// For non-positive inputs the scan range is empty and `n1 * n2` is returned as-is.
///
/// ## Examples
///
/// ```
/// use libfrac::lowest_common_multiple;
///
/// assert_eq!(lowest_common_multiple(4, 6), 12);
/// assert_eq!(lowest_common_multiple(2, 4), 4);
/// assert_eq!(lowest_common_multiple(7, 1), 7);
/// ```
pub fn lowest_common_multiple<N: PrimInt>(a: N, b: N) -> N {
    let (n1, n2) = if a > b { (a, b) } else { (b, a) };

    let mut i = N::one();
    while i < n2 {
        let mult = n1 * i;
        if (mult % n2).is_zero() {
            return mult;
        }
        i = i + N::one();
    }

    tracing::trace!("no multiple found below n2, falling back to n1 * n2");
    n1 * n2
}

/// Like [lowest_common_multiple], but returns [None](Option::None) if a scanned multiple or the
/// fallback product overflows `N`.
pub fn checked_lowest_common_multiple<N: PrimInt>(a: N, b: N) -> Option<N> {
    let (n1, n2) = if a > b { (a, b) } else { (b, a) };

    let mut i = N::one();
    while i < n2 {
        let mult = n1.checked_mul(&i)?;
        if (mult % n2).is_zero() {
            return Some(mult);
        }
        i = i + N::one();
    }

    n1.checked_mul(&n2)
}
