//! # Pricing Module
//!
//! Derives presentation-ready totals from the current cart.
//!
//! ## Delivery Fee Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Delivery Fee Decision                               │
//! │                                                                         │
//! │   subtotal == ₹0      ──►  fee = ₹0    (empty cart, nothing to ship)   │
//! │   subtotal  > ₹500    ──►  fee = ₹0    (free-delivery threshold)       │
//! │   otherwise           ──►  fee = ₹40   (flat fee)                      │
//! │                                                                         │
//! │   total = subtotal + fee                                               │
//! │                                                                         │
//! │   The threshold is strict: a ₹500.00 cart still pays the fee.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and stateless: recomputed on every read, no caching, no invalidation
//! concerns, total-defined for every cart including the empty one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;

// =============================================================================
// Policy Constants
// =============================================================================

/// Flat delivery fee charged below the free-delivery threshold.
pub const DELIVERY_FEE: Money = Money::from_rupees(40);

/// Subtotal above which delivery is free (strictly greater than).
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_rupees(500);

// =============================================================================
// Pricing Summary
// =============================================================================

/// The totals block rendered at the bottom of the cart screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingSummary {
    /// Σ (unit price × quantity) over all line items.
    pub subtotal: Money,

    /// ₹0 or the flat fee, per the rule above.
    pub delivery_fee: Money,

    /// subtotal + delivery fee.
    pub total: Money,
}

/// Computes the pricing summary for a cart.
pub fn quote(cart: &Cart) -> PricingSummary {
    let subtotal = cart.subtotal();

    let delivery_fee = if subtotal.is_zero() || subtotal > FREE_DELIVERY_THRESHOLD {
        Money::zero()
    } else {
        DELIVERY_FEE
    };

    PricingSummary {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineItem;

    fn payload(id: &str, price_rupees: i64, quantity: i64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            image_url: None,
            category: None,
            unit_price: Money::from_rupees(price_rupees),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let quote = quote(&Cart::new());
        assert!(quote.subtotal.is_zero());
        assert!(quote.delivery_fee.is_zero());
        assert!(quote.total.is_zero());
    }

    #[test]
    fn test_single_item_below_threshold_pays_fee() {
        // Add item A (₹100) once → quantity 1, subtotal 100, fee 40, total 140
        let mut cart = Cart::new();
        cart.add_item(payload("a", 100, 1));

        let quote = quote(&cart);
        assert_eq!(quote.subtotal, Money::from_rupees(100));
        assert_eq!(quote.delivery_fee, Money::from_rupees(40));
        assert_eq!(quote.total, Money::from_rupees(140));
    }

    #[test]
    fn test_merged_item_below_threshold() {
        // Add item A (₹100) twice → quantity 2, subtotal 200, total 240
        let mut cart = Cart::new();
        cart.add_item(payload("a", 100, 1));
        cart.add_item(payload("a", 100, 1));

        let quote = quote(&cart);
        assert_eq!(quote.subtotal, Money::from_rupees(200));
        assert_eq!(quote.delivery_fee, Money::from_rupees(40));
        assert_eq!(quote.total, Money::from_rupees(240));
    }

    #[test]
    fn test_above_threshold_is_free_delivery() {
        let mut cart = Cart::new();
        cart.load(vec![payload("a", 200, 3)]); // subtotal ₹600

        let quote = quote(&cart);
        assert_eq!(quote.subtotal, Money::from_rupees(600));
        assert!(quote.delivery_fee.is_zero());
        assert_eq!(quote.total, Money::from_rupees(600));
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly ₹500 still pays the fee
        let mut cart = Cart::new();
        cart.load(vec![payload("a", 500, 1)]);

        let quote = quote(&cart);
        assert_eq!(quote.delivery_fee, DELIVERY_FEE);
        assert_eq!(quote.total, Money::from_rupees(540));

        // One paisa over tips it to free
        let mut cart = Cart::new();
        cart.load(vec![LineItem {
            unit_price: Money::from_paise(50001),
            ..payload("b", 0, 1)
        }]);
        assert!(quote_fee(&cart).is_zero());
    }

    #[test]
    fn test_fee_is_binary_and_total_is_identity() {
        // For any cart: fee ∈ {0, 40} and total == subtotal + fee
        let carts = [
            Cart::new(),
            {
                let mut c = Cart::new();
                c.load(vec![payload("a", 1, 1)]);
                c
            },
            {
                let mut c = Cart::new();
                c.load(vec![payload("a", 499, 1), payload("b", 2, 7)]);
                c
            },
            {
                let mut c = Cart::new();
                c.load(vec![payload("a", 1000, 9)]);
                c
            },
        ];

        for cart in &carts {
            let q = quote(cart);
            assert!(q.delivery_fee == Money::zero() || q.delivery_fee == DELIVERY_FEE);
            assert_eq!(q.total, q.subtotal + q.delivery_fee);
        }
    }

    #[test]
    fn test_zero_quantity_line_keeps_quote_defined() {
        // The quantity-0 gap must not break pricing
        let mut cart = Cart::new();
        cart.add_item(payload("a", 100, 1));
        cart.update_quantity("a", 0);

        let quote = quote(&cart);
        assert!(quote.subtotal.is_zero());
        assert!(quote.delivery_fee.is_zero());
        assert!(quote.total.is_zero());
    }

    fn quote_fee(cart: &Cart) -> Money {
        quote(cart).delivery_fee
    }
}
