//! Sales-volume discount tiers.
//!
//! The list query computes the same tiers in SQL; [`discount_for_quantity`] is the
//! reference both are tested against.

/// Breakpoints in descending order: total quantity strictly above `threshold` earns `percent`.
pub const DISCOUNT_TIERS: &[(i64, i64)] = &[(300_000, 15), (50_000, 10), (10_000, 5)];

/// Discount percentage for a partner's summed sale quantity.
/// A total exactly at a breakpoint stays in the lower tier.
pub fn discount_for_quantity(total_quantity: i64) -> i64 {
    DISCOUNT_TIERS
        .iter()
        .find(|(threshold, _)| total_quantity > *threshold)
        .map(|(_, percent)| *percent)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_at_and_around_breakpoints() {
        let cases = [
            (0, 0),
            (10_000, 0),
            (10_001, 5),
            (50_000, 5),
            (50_001, 10),
            (300_000, 10),
            (300_001, 15),
            (5_000_000, 15),
        ];
        for (qty, expected) in cases {
            assert_eq!(discount_for_quantity(qty), expected, "quantity {}", qty);
        }
    }

    #[test]
    fn tiers_are_descending() {
        assert!(DISCOUNT_TIERS.windows(2).all(|w| w[0].0 > w[1].0 && w[0].1 > w[1].1));
    }
}
