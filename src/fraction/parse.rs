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

//! 文本输入：`分子/分母`，整数前允许有空白

use std::str::FromStr;

use super::Fraction;
use crate::error::{FormatError, FractionError};

impl Fraction {
    /// 从输入开头读取一个分数，返回分数和剩余的输入
    ///
    /// 读取规则：跳过空白读取整数分子；分子后紧跟 `.` 视为浮点输入并拒绝；
    /// 随后必须是 `/`；再跳过空白读取整数分母。结果经过化简。
    ///
    /// # 错误
    /// - 格式不符时返回 [`FractionError::Format`]
    /// - 分母为零时返回 [`FractionError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError, FormatError};
    /// let (f, rest) = Fraction::parse_prefix("  6/8 and more")?;
    /// assert_eq!(f, Fraction::new(3, 4)?);
    /// assert_eq!(rest, " and more");
    ///
    /// assert_eq!(
    ///     Fraction::parse_prefix("1.5/2"),
    ///     Err(FractionError::Format(FormatError::FloatingPoint)),
    /// );
    /// assert_eq!(Fraction::parse_prefix("3/0"), Err(FractionError::DivisionByZero));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn parse_prefix(input: &str) -> Result<(Self, &str), FractionError> {
        read_fraction(input).inspect_err(|err| {
            tracing::debug!(%err, input, "rejected fraction input");
        })
    }

    /// 依次读取以空白分隔的多个分数
    ///
    /// 遇到第一个错误后停止。
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let all: Result<Vec<_>, _> = Fraction::parse_all("1/2 -3/4\n5/1").collect();
    /// assert_eq!(all?, vec![Fraction::new(1, 2)?, Fraction::new(-3, 4)?, Fraction::from(5)]);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn parse_all(input: &str) -> ParseAll<'_> {
        ParseAll { rest: input, failed: false }
    }
}

fn read_fraction(input: &str) -> Result<(Fraction, &str), FractionError> {
    let (nume, rest) = read_integer(input)?.ok_or(FormatError::MissingNumerator)?;
    reject_decimal_point(rest)?;

    let rest = rest.strip_prefix('/').ok_or(FormatError::MissingSeparator)?;

    let (deno, rest) = read_integer(rest)?.ok_or(FormatError::MissingDenominator)?;
    reject_decimal_point(rest)?;
    if deno == 0 {
        return Err(FractionError::DivisionByZero);
    }

    Ok((Fraction::new(nume, deno)?, rest))
}

/// 跳过空白后读取一个可带符号的整数；没有数字时返回 `None`
fn read_integer(input: &str) -> Result<Option<(i32, &str)>, FormatError> {
    let input = input.trim_start();
    let sign_len = match input.as_bytes().first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let digits_len = input[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Ok(None);
    }

    let (token, rest) = input.split_at(sign_len + digits_len);
    let value = token.parse::<i32>().map_err(|_| FormatError::IntegerOutOfRange)?;
    Ok(Some((value, rest)))
}

fn reject_decimal_point(rest: &str) -> Result<(), FormatError> {
    if rest.starts_with('.') { Err(FormatError::FloatingPoint) } else { Ok(()) }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// 解析完整的字符串，末尾只允许空白
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError, FormatError};
    /// let f: Fraction = "3/4".parse()?;
    /// assert_eq!(f, Fraction::new(3, 4)?);
    ///
    /// assert_eq!(
    ///     "3/4/5".parse::<Fraction>(),
    ///     Err(FractionError::Format(FormatError::TrailingInput)),
    /// );
    /// # Ok::<(), FractionError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (fraction, rest) = Self::parse_prefix(s)?;
        if !rest.trim_start().is_empty() {
            tracing::debug!(input = s, "trailing input after fraction");
            return Err(FormatError::TrailingInput.into());
        }
        Ok(fraction)
    }
}

/// [`Fraction::parse_all`] 返回的迭代器
#[derive(Debug, Clone)]
pub struct ParseAll<'a> {
    rest: &'a str,
    failed: bool,
}

impl Iterator for ParseAll<'_> {
    type Item = Result<Fraction, FractionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.trim_start().is_empty() {
            return None;
        }
        match Fraction::parse_prefix(self.rest) {
            Ok((fraction, rest)) => {
                self.rest = rest;
                Some(Ok(fraction))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_signed_tokens_with_whitespace() {
        assert_eq!("-3/4".parse::<Fraction>(), Fraction::new(-3, 4));
        assert_eq!("+3/ -4".parse::<Fraction>(), Fraction::new(-3, 4));
        assert_eq!("  10/4  ".parse::<Fraction>(), Fraction::new(5, 2));
    }

    #[test]
    fn rejects_malformed_input() {
        let format = |e: FormatError| Err(FractionError::Format(e));

        assert_eq!("".parse::<Fraction>(), format(FormatError::MissingNumerator));
        assert_eq!("/4".parse::<Fraction>(), format(FormatError::MissingNumerator));
        assert_eq!("3".parse::<Fraction>(), format(FormatError::MissingSeparator));
        assert_eq!("3 4".parse::<Fraction>(), format(FormatError::MissingSeparator));
        assert_eq!("3 /4".parse::<Fraction>(), format(FormatError::MissingSeparator));
        assert_eq!("3/".parse::<Fraction>(), format(FormatError::MissingDenominator));
        assert_eq!("3/x".parse::<Fraction>(), format(FormatError::MissingDenominator));
        assert_eq!("3.0/4".parse::<Fraction>(), format(FormatError::FloatingPoint));
        assert_eq!("3/4.0".parse::<Fraction>(), format(FormatError::FloatingPoint));
        assert_eq!("99999999999/4".parse::<Fraction>(), format(FormatError::IntegerOutOfRange));
        assert_eq!("3/4 x".parse::<Fraction>(), format(FormatError::TrailingInput));
    }

    #[test]
    fn zero_denominator_is_division_by_zero() {
        assert_eq!("3/0".parse::<Fraction>(), Err(FractionError::DivisionByZero));
        assert_eq!("0/-0".parse::<Fraction>(), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn input_is_normalized() {
        let f: Fraction = "4/-8".parse().unwrap();
        assert_eq!((f.numerator(), f.denominator()), (-1, 2));
    }

    #[test]
    fn parse_all_stops_after_first_error() {
        let mut iter = Fraction::parse_all("1/2 3/0 5/6");
        assert_eq!(iter.next(), Some(Fraction::new(1, 2)));
        assert_eq!(iter.next(), Some(Err(FractionError::DivisionByZero)));
        assert_eq!(iter.next(), None);

        assert_eq!(Fraction::parse_all("   ").count(), 0);
    }
}
