// A high-precision fraction lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! 浮点数与分数的混合运算与比较
//!
//! 浮点数可以出现在任意一侧，先按 [`Fraction::try_from`] 转换（保留三位小数），之后与分数运算完全一致，
//! 同样带溢出检查。无法转换的浮点数（NaN、无穷、超出范围）在运算中 panic，
//! 在比较中既不相等也无序。

use std::{
    cmp::Ordering, ops::{Add, Div, Mul, Sub}
};

use super::{or_panic, Fraction};

macro_rules! impl_float_ops {
    ($($t:ty),*) => {
        $(
            impl Add<Fraction> for $t {
                type Output = Fraction;

                fn add(self, rhs: Fraction) -> Self::Output {
                    or_panic(Fraction::try_from(self).and_then(|lhs| lhs.try_add(rhs)), "addition")
                }
            }

            impl Sub<Fraction> for $t {
                type Output = Fraction;

                fn sub(self, rhs: Fraction) -> Self::Output {
                    or_panic(Fraction::try_from(self).and_then(|lhs| lhs.try_sub(rhs)), "subtraction")
                }
            }

            impl Mul<Fraction> for $t {
                type Output = Fraction;

                fn mul(self, rhs: Fraction) -> Self::Output {
                    or_panic(Fraction::try_from(self).and_then(|lhs| lhs.try_mul(rhs)), "multiplication")
                }
            }

            impl Div<Fraction> for $t {
                type Output = Fraction;

                fn div(self, rhs: Fraction) -> Self::Output {
                    or_panic(Fraction::try_from(self).and_then(|lhs| lhs.try_div(rhs)), "division")
                }
            }

            impl Add<$t> for Fraction {
                type Output = Fraction;

                fn add(self, rhs: $t) -> Self::Output {
                    or_panic(Fraction::try_from(rhs).and_then(|rhs| self.try_add(rhs)), "addition")
                }
            }

            impl Sub<$t> for Fraction {
                type Output = Fraction;

                fn sub(self, rhs: $t) -> Self::Output {
                    or_panic(Fraction::try_from(rhs).and_then(|rhs| self.try_sub(rhs)), "subtraction")
                }
            }

            impl Mul<$t> for Fraction {
                type Output = Fraction;

                fn mul(self, rhs: $t) -> Self::Output {
                    or_panic(Fraction::try_from(rhs).and_then(|rhs| self.try_mul(rhs)), "multiplication")
                }
            }

            impl Div<$t> for Fraction {
                type Output = Fraction;

                fn div(self, rhs: $t) -> Self::Output {
                    or_panic(Fraction::try_from(rhs).and_then(|rhs| self.try_div(rhs)), "division")
                }
            }

            impl PartialEq<Fraction> for $t {
                fn eq(&self, other: &Fraction) -> bool {
                    Fraction::try_from(*self).is_ok_and(|lhs| lhs == *other)
                }
            }

            impl PartialEq<$t> for Fraction {
                fn eq(&self, other: &$t) -> bool {
                    <$t as PartialEq<Fraction>>::eq(other, self)
                }
            }

            impl PartialOrd<Fraction> for $t {
                fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                    Fraction::try_from(*self).ok().map(|lhs| lhs.cmp(other))
                }
            }

            impl PartialOrd<$t> for Fraction {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    <$t as PartialOrd<Fraction>>::partial_cmp(other, self).map(Ordering::reverse)
                }
            }
        )*
    };
}

impl_float_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(nume: i32, deno: i32) -> Fraction {
        Fraction::new(nume, deno).unwrap()
    }

    #[test]
    fn float_lhs_arithmetic() {
        let half = frac(1, 2);
        assert_eq!(2.0f32 + half, frac(5, 2));
        assert_eq!(1.25f32 - half, frac(3, 4));
        assert_eq!(1.25f64 * half, frac(5, 8));
        assert_eq!(0.5f64 / half, Fraction::ONE);
    }

    #[test]
    fn float_lhs_comparisons() {
        let f = frac(3, 4);
        assert!(0.75f32 == f);
        assert!(f == 0.75f64);
        assert!(1.0f32 != f);
        assert!(1.0f64 > f);
        assert!(0.5f32 < f);
        assert!(0.75f64 >= f);
        assert!(0.5f32 <= f);
        assert!(f < 1.0f32);
    }

    #[test]
    fn unconvertible_floats_are_unordered() {
        let f = frac(3, 4);
        assert!(f64::NAN != f);
        assert_eq!(<f64 as PartialOrd<Fraction>>::partial_cmp(&f64::NAN, &f), None);
        assert!(!(f32::INFINITY > f));
        assert!(!(f32::INFINITY <= f));
    }

    #[test]
    fn float_rhs_arithmetic() {
        let half = frac(1, 2);
        assert_eq!(half + 0.5f64, Fraction::ONE);
        assert_eq!(half - 1.25f32, frac(-3, 4));
        assert_eq!(half * 1.25f64, frac(5, 8));
        assert_eq!(half / 0.25f32, frac(2, 1));
    }

    #[test]
    fn float_rhs_matches_float_lhs() {
        let f = frac(-7, 3);
        for x in [0.5f64, -1.25, 3.0, 0.125] {
            assert_eq!(f + x, x + f);
            assert_eq!(f * x, x * f);
            assert_eq!(f - x, -(x - f));
        }
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn float_lhs_multiplication_overflow_panics() {
        let _ = 0.001f64 * Fraction::MIN_POSITIVE;
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn float_rhs_multiplication_overflow_panics() {
        let _ = Fraction::MIN_POSITIVE * 0.001f32;
    }

    #[test]
    #[should_panic(expected = "cannot divide by zero")]
    fn float_rhs_zero_divisor_panics() {
        let _ = Fraction::ONE / 0.0f64;
    }

    #[test]
    #[should_panic(expected = "cannot divide by zero")]
    fn float_lhs_division_by_zero_panics() {
        let _ = 1.5f64 / Fraction::ZERO;
    }
}
