//! Order summary rules: coupon discount and shipping.
//!
//! Pure decimal arithmetic over a cart subtotal. The rules match the
//! storefront checkout card: one 10% coupon code, free shipping above
//! ₹1499, flat ₹5.99 otherwise.

use rust_decimal::{Decimal, dec};

const DISCOUNT_RATE: Decimal = dec!(0.10);
const FREE_SHIPPING_THRESHOLD: Decimal = dec!(1499);
const FLAT_SHIPPING: Decimal = dec!(5.99);

/// A validated coupon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupon {
    /// `NIMMAAROGYA10`: 10% off the subtotal.
    TenPercent,
}

impl Coupon {
    /// Parse a user-entered code. Case-insensitive; unknown codes are
    /// rejected.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        if code.trim().eq_ignore_ascii_case("NIMMAAROGYA10") {
            Some(Self::TenPercent)
        } else {
            None
        }
    }

    /// Fraction of the subtotal this coupon removes.
    #[must_use]
    pub const fn discount_rate(self) -> Decimal {
        match self {
            Self::TenPercent => DISCOUNT_RATE,
        }
    }
}

/// Breakdown of an order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for a subtotal and an optional coupon.
    ///
    /// Shipping is free strictly above the ₹1499 threshold; the threshold
    /// itself still pays the flat rate. The discount applies before the
    /// shipping comparison is made on the undiscounted subtotal, matching
    /// the storefront.
    #[must_use]
    pub fn compute(subtotal: Decimal, coupon: Option<Coupon>) -> Self {
        let discount = coupon.map_or(Decimal::ZERO, |coupon| {
            (subtotal * coupon.discount_rate()).round_dp(2)
        });
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING
        };

        Self {
            subtotal,
            discount,
            shipping,
            total: subtotal - discount + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_parse() {
        assert_eq!(Coupon::parse("NIMMAAROGYA10"), Some(Coupon::TenPercent));
        assert_eq!(Coupon::parse("nimmaarogya10"), Some(Coupon::TenPercent));
        assert_eq!(Coupon::parse("  NimmaArogya10 "), Some(Coupon::TenPercent));
        assert_eq!(Coupon::parse("SAVE20"), None);
        assert_eq!(Coupon::parse(""), None);
    }

    #[test]
    fn test_summary_without_coupon() {
        let summary = OrderSummary::compute(dec!(100), None);
        assert_eq!(summary.discount, Decimal::ZERO);
        assert_eq!(summary.shipping, dec!(5.99));
        assert_eq!(summary.total, dec!(105.99));
    }

    #[test]
    fn test_summary_with_coupon() {
        let summary = OrderSummary::compute(dec!(200), Some(Coupon::TenPercent));
        assert_eq!(summary.discount, dec!(20.00));
        assert_eq!(summary.total, dec!(185.99));
    }

    #[test]
    fn test_free_shipping_strictly_above_threshold() {
        assert_eq!(OrderSummary::compute(dec!(1499), None).shipping, dec!(5.99));
        assert_eq!(
            OrderSummary::compute(dec!(1499.01), None).shipping,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_discount_rounds_to_paise() {
        let summary = OrderSummary::compute(dec!(33.33), Some(Coupon::TenPercent));
        assert_eq!(summary.discount, dec!(3.33));
    }
}
