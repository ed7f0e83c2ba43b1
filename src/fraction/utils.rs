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

use std::ops::Rem;

use crate::error::FractionError;

/// 最大公约数，只接受无符号（绝对值）输入，避免负数取模的符号问题
pub(crate) fn gcd<T>(a: T, b: T) -> T
where
    T: Rem<Output = T> + From<u8> + Eq + Copy
{
    let (mut a, mut b) = (a, b);
    while b != T::from(0u8) {
        (a, b) = (b, a % b);
    };
    a
}

/// 化简为最简分数，符号归到分子上，分母恒为正
///
/// 输入可以超出 `i32`，只要化简后的结果落在范围内即可
pub(crate) fn normalize(nume: i64, deno: i64) -> Result<(i32, i32), FractionError> {
    if deno == 0 {
        tracing::debug!(nume, "rejected zero denominator");
        return Err(FractionError::ZeroDenominator);
    }
    if nume == 0 {
        return Ok((0, 1));
    }

    let negative = (nume < 0) ^ (deno < 0);
    let (nume_abs, deno_abs) = (nume.unsigned_abs(), deno.unsigned_abs());
    let gcd_val = gcd(nume_abs, deno_abs);
    let (nume_abs, deno_abs) = (nume_abs / gcd_val, deno_abs / gcd_val);

    // -2^31 is representable, +2^31 is not
    let signed = if negative { -(nume_abs as i128) } else { nume_abs as i128 };
    match (i32::try_from(signed), i32::try_from(deno_abs)) {
        (Ok(nume), Ok(deno)) => Ok((nume, deno)),
        _ => {
            tracing::debug!(nume, deno, "normalized fraction does not fit in i32");
            Err(FractionError::Overflow)
        }
    }
}

pub(crate) fn checked_mul(op: &'static str, lhs: i32, rhs: i32) -> Result<i32, FractionError> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow(op, lhs, rhs))
}

pub(crate) fn checked_add(op: &'static str, lhs: i32, rhs: i32) -> Result<i32, FractionError> {
    lhs.checked_add(rhs).ok_or_else(|| overflow(op, lhs, rhs))
}

pub(crate) fn checked_sub(op: &'static str, lhs: i32, rhs: i32) -> Result<i32, FractionError> {
    lhs.checked_sub(rhs).ok_or_else(|| overflow(op, lhs, rhs))
}

fn overflow(op: &'static str, lhs: i32, rhs: i32) -> FractionError {
    tracing::debug!(op, lhs, rhs, "overflow guard rejected operation");
    FractionError::Overflow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_zero_is_other_operand() {
        assert_eq!(gcd(0u64, 7), 7);
        assert_eq!(gcd(7u64, 0), 7);
        assert_eq!(gcd(12u64, 18), 6);
    }

    #[test]
    fn normalize_moves_sign_to_numerator() {
        assert_eq!(normalize(3, -6), Ok((-1, 2)));
        assert_eq!(normalize(-3, -6), Ok((1, 2)));
        assert_eq!(normalize(0, -5), Ok((0, 1)));
    }

    #[test]
    fn normalize_range_edges() {
        assert_eq!(normalize(i32::MIN as i64, 1), Ok((i32::MIN, 1)));
        assert_eq!(normalize(i32::MIN as i64, -1), Err(FractionError::Overflow));
        assert_eq!(normalize(1, i32::MIN as i64), Err(FractionError::Overflow));
        assert_eq!(normalize(2, i32::MIN as i64), Ok((-1, 1 << 30)));
        assert_eq!(normalize(1, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn guards_report_overflow() {
        assert_eq!(checked_mul("mul", i32::MAX, 2), Err(FractionError::Overflow));
        assert_eq!(checked_mul("mul", i32::MAX, 0), Ok(0));
        assert_eq!(checked_add("add", i32::MAX, 1), Err(FractionError::Overflow));
        assert_eq!(checked_sub("sub", i32::MIN, 1), Err(FractionError::Overflow));
        assert_eq!(checked_sub("sub", -5, -7), Ok(2));
    }
}
