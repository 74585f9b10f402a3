//! Ordered numeric rules that pick a message category for a result.

use super::category::Category;
use super::table::MessageTable;

/// Above this, every `f64` integer is even, so none are prime.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Pick the first matching category that `table` has messages for.
///
/// Returns `None` only when neither a matching category nor
/// [`Category::Any`] is populated.
pub fn classify(value: f64, table: &MessageTable) -> Option<Category> {
    candidates(value)
        .into_iter()
        .find(|category| table.has(*category))
}

/// Every category whose rule matches `value`, most specific first,
/// ending with [`Category::Any`].
pub fn candidates(value: f64) -> Vec<Category> {
    let mut matched = Vec::new();

    if !value.is_finite() {
        matched.push(Category::Silly);
        matched.push(Category::Any);
        return matched;
    }

    let integer = value.fract() == 0.0;

    let rules = [
        (Category::Zero, value == 0.0),
        (Category::One, value == 1.0),
        (Category::Negative, value < 0.0),
        (Category::Decimal, !integer),
        (Category::SpecificPun, (1.0..=10.0).contains(&value)),
        (Category::Large, value > 1000.0),
        (Category::Prime, is_prime(value)),
        (Category::PerfectSquare, is_perfect_square(value)),
        (Category::Double, is_double_number(value)),
        (Category::Even, integer && value % 2.0 == 0.0),
        (Category::Odd, integer && value % 2.0 != 0.0),
    ];

    matched.extend(
        rules
            .into_iter()
            .filter_map(|(category, hit)| hit.then_some(category)),
    );
    matched.push(Category::Any);
    matched
}

/// Trial division up to the square root. Only integers ≥ 2 qualify.
pub fn is_prime(value: f64) -> bool {
    if value < 2.0 || value.fract() != 0.0 || value >= MAX_EXACT_INTEGER {
        return false;
    }

    let n = value as u64;
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Non-negative with an integer square root.
pub fn is_perfect_square(value: f64) -> bool {
    if value < 0.0 || !value.is_finite() {
        return false;
    }
    let root = value.sqrt();
    root == root.floor()
}

/// Exactly two identical digits: 11, 22, ... 99.
pub fn is_double_number(value: f64) -> bool {
    if value.fract() != 0.0 || !(10.0..100.0).contains(&value) {
        return false;
    }
    let n = value as u32;
    n / 10 == n % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> MessageTable {
        Category::ALL
            .into_iter()
            .fold(MessageTable::empty(), |table, category| {
                table.with(category, category.header())
            })
    }

    #[test]
    fn test_prime() {
        let primes: Vec<u32> = (0..50).filter(|n| is_prime(f64::from(*n))).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        assert!(is_prime(7919.0));
        assert!(!is_prime(7921.0));
        assert!(!is_prime(2.5));
        assert!(!is_prime(-7.0));
        assert!(!is_prime(1e20));
    }

    #[test]
    fn test_perfect_square() {
        assert!(is_perfect_square(0.0));
        assert!(is_perfect_square(16.0));
        assert!(is_perfect_square(144.0));
        assert!(!is_perfect_square(15.0));
        assert!(!is_perfect_square(-4.0));
    }

    #[test]
    fn test_double_number() {
        assert!(is_double_number(11.0));
        assert!(is_double_number(99.0));
        assert!(!is_double_number(12.0));
        assert!(!is_double_number(111.0));
        assert!(!is_double_number(1.0));
        assert!(!is_double_number(-11.0));
    }

    #[test]
    fn test_rule_order_with_full_table() {
        let table = full_table();
        let cases = [
            (0.0, Category::Zero),
            (1.0, Category::One),
            (-3.0, Category::Negative),
            (-0.5, Category::Negative),
            (2.5, Category::Decimal),
            (4.0, Category::SpecificPun),
            (10.0, Category::SpecificPun),
            (1024.0, Category::Large),
            (13.0, Category::Prime),
            (49.0, Category::PerfectSquare),
            (11.0, Category::Prime),
            (33.0, Category::Double),
            (12.0, Category::Even),
            (15.0, Category::Odd),
            (f64::INFINITY, Category::Silly),
            (f64::NAN, Category::Silly),
        ];
        for (value, expected) in cases {
            assert_eq!(classify(value, &table), Some(expected), "value {value}");
        }
    }

    #[test]
    fn test_perfect_square_before_even() {
        let table = MessageTable::empty()
            .with(Category::PerfectSquare, "square")
            .with(Category::Even, "even")
            .with(Category::Any, "any");
        assert_eq!(classify(4.0, &table), Some(Category::PerfectSquare));
        assert_eq!(classify(6.0, &table), Some(Category::Even));
    }

    #[test]
    fn test_double_before_odd() {
        let table = MessageTable::empty()
            .with(Category::Double, "double")
            .with(Category::Odd, "odd");
        assert_eq!(classify(11.0, &table), Some(Category::Double));
        assert_eq!(classify(13.0, &table), Some(Category::Odd));
    }

    #[test]
    fn test_empty_categories_fall_through() {
        let table = MessageTable::empty().with(Category::Any, "any");
        assert_eq!(classify(0.0, &table), Some(Category::Any));
        assert_eq!(classify(f64::NAN, &table), Some(Category::Any));
        assert_eq!(classify(7.0, &MessageTable::empty()), None);
    }

    #[test]
    fn test_candidates_end_with_any() {
        assert_eq!(
            candidates(4.0),
            vec![
                Category::SpecificPun,
                Category::PerfectSquare,
                Category::Even,
                Category::Any
            ]
        );
    }
}
