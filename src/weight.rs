/*!
# Edge Weights

Shortest-path searches need a distinguished value meaning *unreachable* that takes part in
comparisons and in a restricted form of addition. Integer types have no infinity, so every
supported weight type maps to a pair of sentinels through the [`Weight`] trait:

| Type               | `positive_infinity()` | `negative_infinity()` |
|--------------------|-----------------------|-----------------------|
| signed integers    | `MAX`                 | `MIN`                 |
| unsigned integers  | `MAX - 1`             | `MAX`                 |
| floating point     | `INFINITY`            | `NEG_INFINITY`        |
| [`NoWeight`]       | never infinite        | never infinite        |

Unsigned types reserve `MAX` for negative infinity so both sentinels stay distinguishable.

[`Weight::infinite_sum`] is the only addition used by the search algorithms:
`x + (+inf) = +inf` unless `x = -inf` and vice versa. The undefined case `(+inf) + (-inf)`
is a logic error and panics, as does a finite sum that leaves the finite range of the type.
A finite sum never yields a sentinel: for `u8`, `200 + 54 = 254` is rejected just like
`200 + 56`. [`Weight::checked_infinite_sum`] reports such sums as `None` instead.

Since the unsigned `-inf` is numerically the largest value, comparisons between weights go
through [`Weight::is_less_than`] rather than `<`.
*/

use std::fmt::Debug;

use num::{Bounded, CheckedAdd};

/// A numeric type usable as edge weight and as (weighted) distance.
pub trait Weight: Copy + PartialOrd + Debug {
    /// Additive identity
    fn zero() -> Self;

    /// Sentinel for *unreachable*
    fn positive_infinity() -> Self;

    /// Sentinel for *unbounded below*
    fn negative_infinity() -> Self;

    /// Adds two finite values; `None` if the sum is not a finite value of the type
    fn checked_finite_add(self, rhs: Self) -> Option<Self>;

    /// Adds two finite values.
    /// ** Panics if the sum is not a finite value of the type **
    fn finite_add(self, rhs: Self) -> Self {
        match self.checked_finite_add(rhs) {
            Some(sum) => sum,
            None => panic!("weight overflow: {self:?} + {rhs:?}"),
        }
    }

    /// Returns *true* if `self` is the positive-infinity sentinel
    #[inline]
    fn is_positive_infinity(&self) -> bool {
        *self == Self::positive_infinity()
    }

    /// Returns *true* if `self` is the negative-infinity sentinel
    #[inline]
    fn is_negative_infinity(&self) -> bool {
        *self == Self::negative_infinity()
    }

    /// Returns *true* if `self` is neither infinity sentinel
    #[inline]
    fn is_finite(&self) -> bool {
        !self.is_positive_infinity() && !self.is_negative_infinity()
    }

    /// Returns *true* if `self` is strictly smaller than `other`, ordering `-inf` below and
    /// `+inf` above every finite value
    fn is_less_than(&self, other: &Self) -> bool {
        if self.is_positive_infinity() || other.is_negative_infinity() {
            return false;
        }
        if self.is_negative_infinity() || other.is_positive_infinity() {
            return true;
        }
        self < other
    }

    /// Like [`Weight::infinite_sum`], but returns `None` if two finite operands have no finite
    /// sum in this type.
    /// ** Panics if one operand is `+inf` and the other is `-inf` **
    fn checked_infinite_sum(self, rhs: Self) -> Option<Self> {
        let positive = self.is_positive_infinity() || rhs.is_positive_infinity();
        let negative = self.is_negative_infinity() || rhs.is_negative_infinity();

        match (positive, negative) {
            (true, true) => {
                panic!("undefined weight sum of opposite infinities: {self:?} + {rhs:?}")
            }
            (true, false) => Some(Self::positive_infinity()),
            (false, true) => Some(Self::negative_infinity()),
            (false, false) => self.checked_finite_add(rhs),
        }
    }

    /// Signed-infinity-aware sum.
    ///
    /// Returns `+inf` if either operand is `+inf` and neither is `-inf`, `-inf` symmetrically,
    /// and the plain sum otherwise.
    /// ** Panics if one operand is `+inf` and the other is `-inf`, or if the finite sum is
    /// not a finite value of the type **
    fn infinite_sum(self, rhs: Self) -> Self {
        match self.checked_infinite_sum(rhs) {
            Some(sum) => sum,
            None => panic!("weight overflow: {self:?} + {rhs:?}"),
        }
    }
}

/// Placeholder weight for graphs whose edges carry no weight.
///
/// All values compare equal, sums are `NoWeight`, and no value is ever infinite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoWeight;

impl Weight for NoWeight {
    fn zero() -> Self {
        NoWeight
    }

    fn positive_infinity() -> Self {
        NoWeight
    }

    fn negative_infinity() -> Self {
        NoWeight
    }

    fn checked_finite_add(self, _rhs: Self) -> Option<Self> {
        Some(NoWeight)
    }

    fn is_positive_infinity(&self) -> bool {
        false
    }

    fn is_negative_infinity(&self) -> bool {
        false
    }
}

#[inline]
fn checked_integer_add<T: Weight + CheckedAdd>(a: T, b: T) -> Option<T> {
    a.checked_add(&b).filter(Weight::is_finite)
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn positive_infinity() -> Self {
                    <$t as Bounded>::max_value()
                }

                #[inline]
                fn negative_infinity() -> Self {
                    <$t as Bounded>::min_value()
                }

                #[inline]
                fn checked_finite_add(self, rhs: Self) -> Option<Self> {
                    checked_integer_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn positive_infinity() -> Self {
                    <$t as Bounded>::max_value() - 1
                }

                #[inline]
                fn negative_infinity() -> Self {
                    <$t as Bounded>::max_value()
                }

                #[inline]
                fn checked_finite_add(self, rhs: Self) -> Option<Self> {
                    checked_integer_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ident),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn positive_infinity() -> Self {
                    $t::INFINITY
                }

                #[inline]
                fn negative_infinity() -> Self {
                    $t::NEG_INFINITY
                }

                #[inline]
                fn checked_finite_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs).filter(<$t as Weight>::is_finite)
                }
            }
        )*
    };
}

impl_signed_weight!(i8, i16, i32, i64, isize);
impl_unsigned_weight!(u8, u16, u32, u64, usize);
impl_float_weight!(f32, f64);

/// Minimum of two weights where `+inf` is neutral and `-inf` absorbs.
///
/// Sentinels are checked explicitly since the unsigned `-inf` is numerically the largest value.
pub fn min_weight<W: Weight>(a: W, b: W) -> W {
    if a.is_positive_infinity() {
        return b;
    }
    if b.is_positive_infinity() {
        return a;
    }
    if a.is_negative_infinity() || b.is_negative_infinity() {
        return W::negative_infinity();
    }
    if b < a { b } else { a }
}

/// Maximum of two weights where `-inf` is neutral and `+inf` absorbs.
pub fn max_weight<W: Weight>(a: W, b: W) -> W {
    if a.is_negative_infinity() {
        return b;
    }
    if b.is_negative_infinity() {
        return a;
    }
    if a.is_positive_infinity() || b.is_positive_infinity() {
        return W::positive_infinity();
    }
    if b > a { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels() {
        assert_eq!(i32::positive_infinity(), i32::MAX);
        assert_eq!(i32::negative_infinity(), i32::MIN);
        assert_eq!(u8::positive_infinity(), 254);
        assert_eq!(u8::negative_infinity(), 255);
        assert_eq!(f64::positive_infinity(), f64::INFINITY);
        assert!(f32::negative_infinity().is_negative_infinity());

        assert!(5i64.is_finite());
        assert!(!u16::MAX.is_finite());
        assert!(!(u16::MAX - 1).is_finite());
        assert!(NoWeight.is_finite());
    }

    #[test]
    fn infinite_sum() {
        let inf = i32::positive_infinity();
        let neg = i32::negative_infinity();

        assert_eq!(3i32.infinite_sum(4), 7);
        assert_eq!(inf.infinite_sum(-5), inf);
        assert_eq!((-5i32).infinite_sum(inf), inf);
        assert_eq!(inf.infinite_sum(inf), inf);
        assert_eq!(neg.infinite_sum(100), neg);
        assert_eq!(neg.infinite_sum(neg), neg);

        assert_eq!(u32::positive_infinity().infinite_sum(1), u32::positive_infinity());
        assert_eq!(2.5f64.infinite_sum(f64::INFINITY), f64::INFINITY);
        assert_eq!(NoWeight.infinite_sum(NoWeight), NoWeight);
    }

    #[test]
    #[should_panic]
    fn opposite_infinities() {
        i64::positive_infinity().infinite_sum(i64::negative_infinity());
    }

    #[test]
    #[should_panic]
    fn opposite_float_infinities() {
        f64::NEG_INFINITY.infinite_sum(f64::INFINITY);
    }

    #[test]
    #[should_panic]
    fn finite_overflow() {
        100i8.infinite_sum(100);
    }

    #[test]
    fn finite_sums_avoid_sentinels() {
        assert_eq!(200u8.checked_finite_add(53), Some(253));
        assert_eq!(200u8.checked_finite_add(54), None);
        assert_eq!(200u8.checked_finite_add(55), None);
        assert_eq!(100i8.checked_finite_add(27), None);
        assert_eq!((-100i8).checked_finite_add(-28), None);
        assert_eq!((-100i8).checked_finite_add(-27), Some(-127));
        assert_eq!(f32::MAX.checked_finite_add(f32::MAX), None);

        assert_eq!((-100i8).checked_infinite_sum(-100), None);
        assert_eq!(i8::MIN.checked_infinite_sum(-100), Some(i8::MIN));
    }

    #[test]
    #[should_panic]
    fn finite_sum_hits_sentinel() {
        200u8.infinite_sum(54);
    }

    #[test]
    fn ordering_with_sentinels() {
        assert!(3u8.is_less_than(&7));
        assert!(u8::negative_infinity().is_less_than(&0));
        assert!(!0u8.is_less_than(&u8::negative_infinity()));
        assert!(200u8.is_less_than(&u8::positive_infinity()));
        assert!(!u8::positive_infinity().is_less_than(&u8::positive_infinity()));
        assert!(!i32::negative_infinity().is_less_than(&i32::negative_infinity()));
        assert!((-1.5f64).is_less_than(&2.0));
        assert!(!NoWeight.is_less_than(&NoWeight));
    }

    #[test]
    fn min_max() {
        assert_eq!(min_weight(3, 7), 3);
        assert_eq!(min_weight(i32::positive_infinity(), 7), 7);
        assert_eq!(min_weight(7, i32::positive_infinity()), 7);
        assert_eq!(min_weight(u8::negative_infinity(), 7), u8::negative_infinity());
        assert_eq!(min_weight(7u8, u8::positive_infinity()), 7);

        assert_eq!(max_weight(3, 7), 7);
        assert_eq!(max_weight(i32::negative_infinity(), 7), 7);
        assert_eq!(max_weight(u8::negative_infinity(), 7), 7);
        assert_eq!(max_weight(7u8, u8::positive_infinity()), u8::positive_infinity());
        assert_eq!(max_weight(1.5f32, -2.0), 1.5);
    }
}
