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

//! 错误类型

use thiserror::Error;

/// 分数运算中所有可能的失败
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("arithmetic overflow: result does not fit in i32")]
    Overflow,

    #[error("invalid fraction format: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// 文本输入的格式错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("floating-point input is not accepted")]
    FloatingPoint,

    #[error("expected an integer numerator")]
    MissingNumerator,

    #[error("expected '/' after the numerator")]
    MissingSeparator,

    #[error("expected an integer denominator")]
    MissingDenominator,

    #[error("integer does not fit in i32")]
    IntegerOutOfRange,

    #[error("unexpected trailing input")]
    TrailingInput,
}

/// 与原生数值类型之间的转换错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("value is out of range")]
    OutOfRangeError,

    #[error("cannot convert NaN")]
    NaNConversion,

    #[error("cannot convert an infinite value")]
    InfiniteConversion,
}
