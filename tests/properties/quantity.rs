//! Property tests for the quantity algebra.

use proptest::prelude::*;
use rust_decimal::Decimal;

use cookmate::domain::value_objects::{Quantity, Unit};

fn amount() -> impl Strategy<Value = Decimal> {
    // Up to 6 integer digits and 3 decimals keeps every value inside the
    // 9 significant digits a quantity holds.
    (0i64..1_000_000_000).prop_map(|n| Decimal::new(n, 3))
}

/// Small enough that sums and small multiples still fit in 9 digits
fn small_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|n| Decimal::new(n, 3))
}

/// At most 6 significant digits
fn kitchen_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|n| Decimal::new(n, 3))
}

/// Positive scale factors with at most 3 significant digits, whole or not
fn scale_factor() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i64..10).prop_map(Decimal::from),
        Just(Decimal::new(5, 1)),
        Just(Decimal::new(25, 1)),
        (1i64..=975).prop_map(|n| Decimal::new(n, 2)),
    ]
}

fn mass_or_volume() -> impl Strategy<Value = (Unit, Unit)> {
    prop_oneof![
        Just((Unit::Gram, Unit::Kilogram)),
        Just((Unit::Kilogram, Unit::Gram)),
        Just((Unit::Milliliter, Unit::Liter)),
        Just((Unit::Liter, Unit::Milliliter)),
    ]
}

fn any_unit() -> impl Strategy<Value = Unit> {
    prop_oneof![
        Just(Unit::Gram),
        Just(Unit::Kilogram),
        Just(Unit::Milliliter),
        Just(Unit::Liter),
        Just(Unit::Piece),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: converting to a compatible unit and back preserves the amount.
    #[test]
    fn property_conversion_round_trips(a in amount(), (from, to) in mass_or_volume()) {
        let q = Quantity::new(a, from);
        let back = q.to(to).unwrap().to(from).unwrap();
        prop_assert_eq!(back.amount(), q.amount());
    }

    /// PROPERTY: converted quantities compare equal to the original.
    #[test]
    fn property_conversion_preserves_equality(a in amount(), (from, to) in mass_or_volume()) {
        let q = Quantity::new(a, from);
        prop_assert_eq!(q.to(to).unwrap(), q);
    }

    /// PROPERTY: (q * k) / k == q for positive k.
    #[test]
    fn property_multiply_then_divide_is_identity(a in kitchen_amount(), k in scale_factor(), unit in any_unit()) {
        let q = Quantity::new(a, unit);
        let back = q.multiply(k).unwrap().divide(k).unwrap();
        prop_assert_eq!(back.amount(), q.amount());
        prop_assert_eq!(back.unit(), unit);
    }

    /// PROPERTY: (a + b) - b == a in a's unit.
    #[test]
    fn property_add_then_sub_is_identity(a in small_amount(), b in small_amount(), unit in any_unit()) {
        let qa = Quantity::new(a, unit);
        let qb = Quantity::new(b, unit);
        let back = qa.checked_add(&qb).unwrap().checked_sub(&qb).unwrap();
        prop_assert_eq!(back.amount(), qa.amount());
        prop_assert_eq!(back.unit(), unit);
    }

    /// PROPERTY: addition is commutative up to unit normalization.
    #[test]
    fn property_add_commutes(a in small_amount(), b in small_amount(), (u1, u2) in mass_or_volume()) {
        let qa = Quantity::new(a, u1);
        let qb = Quantity::new(b, u2);
        prop_assert_eq!(qa.checked_add(&qb).unwrap(), qb.checked_add(&qa).unwrap());
    }

    /// PROPERTY: subtraction never yields a negative quantity.
    #[test]
    fn property_sub_never_negative(a in amount(), b in amount(), unit in any_unit()) {
        let qa = Quantity::new(a, unit);
        let qb = Quantity::new(b, unit);
        match qa.checked_sub(&qb) {
            Ok(rest) => {
                prop_assert!(a >= b);
                prop_assert!(!rest.is_negative());
            }
            Err(_) => prop_assert!(a < b),
        }
    }

    /// PROPERTY: scaling by servings matches repeated addition.
    #[test]
    fn property_times_matches_repeated_add(a in small_amount(), n in 1u32..8, unit in any_unit()) {
        let q = Quantity::new(a, unit);
        let mut sum = Quantity::zero(unit);
        for _ in 0..n {
            sum = sum.checked_add(&q).unwrap();
        }
        prop_assert_eq!(q.times(n).unwrap(), sum);
    }

    /// PROPERTY: parsing the display form gives the same quantity back.
    #[test]
    fn property_display_parses_back(a in amount(), unit in any_unit()) {
        let q = Quantity::new(a, unit);
        let parsed: Quantity = q.to_string().parse().unwrap();
        prop_assert_eq!(parsed, q);
    }
}
