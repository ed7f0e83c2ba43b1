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


//! # fraction
//!
//! 提供 `i32` 精确分数运算，所有运算都带溢出检查并保持最简形式
//!
//! # 核心功能
//! - 基本四则运算 (`+`, `-`, `*`, `/` 等)，以及返回 `Result` 的 `try_*` 版本
//! - 自增自减
//! - 与浮点数的互操作（按三位小数截断）
//! - 文本输入输出，格式为 `分子/分母`

pub(crate) mod utils;
mod mixed;
mod parse;

pub use parse::ParseAll;

use std::{
    cmp::Ordering, fmt::{self, Display, Formatter}, ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign
    }
};

use crate::error::{ConversionError, FractionError};

/// 分数类型，使用 `i32` 存储分子分母
///
/// 任何构造或修改之后都满足：分母为正，且分子分母互素（零统一为 `0/1`）。
/// 因此相等比较直接比较分子分母即可。
///
/// # 示例 - 基础使用
/// ```
/// use fraction32::Fraction;
///
/// let a = Fraction::new(3, 4)?;  // 3/4
/// let b = Fraction::from(2);     // 2/1
/// assert_eq!(a + b, Fraction::new(11, 4)?);
/// assert_eq!(Fraction::new(6, -8)?, Fraction::new(-3, 4)?);
/// # Ok::<(), fraction32::FractionError>(())
/// ```
///
/// # 溢出处理
/// ```
/// # use fraction32::{Fraction, FractionError};
/// let big = Fraction::new(1, 65536)?;
/// assert_eq!(big.try_add(big), Err(FractionError::Overflow));
/// # Ok::<(), FractionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    nume: i32,
    deno: i32,
}

impl Default for Fraction {
    /// `0/1`
    fn default() -> Self {
        Self::ZERO
    }
}

impl Fraction {
    pub const ZERO: Self = Self { nume: 0, deno: 1 };
    pub const ONE: Self = Self { nume: 1, deno: 1 };

    pub const MAX: Self = Self { nume: i32::MAX, deno: 1 };
    pub const MIN: Self = Self { nume: i32::MIN, deno: 1 };
    pub const MIN_POSITIVE: Self = Self { nume: 1, deno: i32::MAX };

    /// 浮点数转换时保留三位小数
    pub const FLOAT_SCALE: i32 = 1000;

    /// [`Fraction::approx_eq`] 使用的容差
    pub const TOLERANCE: f64 = 0.001;

    /// 创建新分数，自动化简为最简形式
    ///
    /// # 参数
    /// - `nume`: 分子
    /// - `deno`: 分母 (非零)
    ///
    /// # 错误
    /// - 分母为零时返回 [`FractionError::ZeroDenominator`]
    /// - 化简后无法用 `i32` 表示时返回 [`FractionError::Overflow`]，例如 `i32::MIN / -1`
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    ///
    /// let normal = Fraction::new(4, -2)?; // -2/1
    /// assert_eq!(normal, Fraction::from(-2));
    ///
    /// assert_eq!(Fraction::new(1, 0), Err(FractionError::ZeroDenominator));
    /// assert_eq!(Fraction::new(i32::MIN, -1), Err(FractionError::Overflow));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn new(nume: i32, deno: i32) -> Result<Self, FractionError> {
        let (nume, deno) = utils::normalize(nume as i64, deno as i64)?;
        Ok(Self { nume, deno })
    }

    pub fn numerator(&self) -> i32 {
        self.nume
    }

    /// 分母，恒为正
    pub fn denominator(&self) -> i32 {
        self.deno
    }

    /// 替换分子，并重新化简
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let mut f = Fraction::new(1, 4)?;
    /// f.set_numerator(2)?;
    /// assert_eq!((f.numerator(), f.denominator()), (1, 2));
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn set_numerator(&mut self, nume: i32) -> Result<(), FractionError> {
        *self = self.with_numerator(nume)?;
        Ok(())
    }

    /// 替换分母，并重新化简
    ///
    /// # 错误
    /// 新分母为零时返回 [`FractionError::ZeroDenominator`]，原值保持不变
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let mut f = Fraction::new(3, 4)?;
    /// f.set_denominator(-6)?;
    /// assert_eq!((f.numerator(), f.denominator()), (-1, 2));
    ///
    /// assert_eq!(f.set_denominator(0), Err(FractionError::ZeroDenominator));
    /// assert_eq!(f, Fraction::new(-1, 2)?);
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn set_denominator(&mut self, deno: i32) -> Result<(), FractionError> {
        *self = self.with_denominator(deno)?;
        Ok(())
    }

    pub fn with_numerator(&self, nume: i32) -> Result<Self, FractionError> {
        Self::new(nume, self.deno)
    }

    pub fn with_denominator(&self, deno: i32) -> Result<Self, FractionError> {
        Self::new(self.nume, deno)
    }

    /// 符号：`-1`、`0` 或 `1`
    pub fn signum(&self) -> i32 {
        self.nume.signum()
    }

    pub fn is_positive(&self) -> bool {
        self.nume > 0
    }

    pub fn is_negative(&self) -> bool {
        self.nume < 0
    }

    pub fn is_zero(&self) -> bool {
        self.nume == 0
    }

    pub fn is_integer(&self) -> bool {
        self.deno == 1
    }

    /// 向零截断取整
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// assert_eq!(Fraction::new(7, 2)?.trunc(), 3);
    /// assert_eq!(Fraction::new(-7, 2)?.trunc(), -3);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn trunc(&self) -> i32 {
        self.nume / self.deno
    }

    /// 获取绝对值
    ///
    /// # 错误
    /// 分子为 `i32::MIN` 时返回 [`FractionError::Overflow`]
    pub fn abs(&self) -> Result<Self, FractionError> {
        if self.is_negative() { self.try_neg() } else { Ok(*self) }
    }

    /// 获取倒数
    ///
    /// # 错误
    /// 零没有倒数，返回 [`FractionError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// assert_eq!(Fraction::new(-2, 3)?.reciprocal()?, Fraction::new(-3, 2)?);
    /// assert_eq!(Fraction::ZERO.reciprocal(), Err(FractionError::DivisionByZero));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn reciprocal(&self) -> Result<Self, FractionError> {
        Self::ONE.try_div(*self)
    }

    /// 按浮点值比较，差值小于 [`Fraction::TOLERANCE`] 即视为相等
    ///
    /// `==` 是精确比较；需要近似比较时使用此方法。
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 3)?;
    /// let b = Fraction::new(333, 1000)?;
    /// assert!(a != b);
    /// assert!(a.approx_eq(&b));
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn approx_eq(&self, other: &Self) -> bool {
        (f64::from(*self) - f64::from(*other)).abs() < Self::TOLERANCE
    }

    // operations
    /// 带溢出检查的加法
    ///
    /// 交叉相乘的每一步都做检查，任何一步超出 `i32` 即返回 [`FractionError::Overflow`]，
    /// 即使最终化简后的结果可以表示。
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let a = Fraction::new(3, 4)?;
    /// let b = Fraction::new(1, 4)?;
    /// assert_eq!(a.try_add(b)?, Fraction::ONE);
    ///
    /// assert_eq!(Fraction::MAX.try_add(Fraction::ONE), Err(FractionError::Overflow));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn try_add(self, rhs: Self) -> Result<Self, FractionError> {
        let nume_1 = utils::checked_mul("add", self.nume, rhs.deno)?;
        let nume_2 = utils::checked_mul("add", rhs.nume, self.deno)?;
        let deno = utils::checked_mul("add", self.deno, rhs.deno)?;
        let nume = utils::checked_add("add", nume_1, nume_2)?;
        Self::new(nume, deno)
    }

    /// 带溢出检查的减法
    pub fn try_sub(self, rhs: Self) -> Result<Self, FractionError> {
        let nume_1 = utils::checked_mul("sub", self.nume, rhs.deno)?;
        let nume_2 = utils::checked_mul("sub", rhs.nume, self.deno)?;
        let deno = utils::checked_mul("sub", self.deno, rhs.deno)?;
        let nume = utils::checked_sub("sub", nume_1, nume_2)?;
        Self::new(nume, deno)
    }

    /// 带溢出检查的乘法
    pub fn try_mul(self, rhs: Self) -> Result<Self, FractionError> {
        let nume = utils::checked_mul("mul", self.nume, rhs.nume)?;
        let deno = utils::checked_mul("mul", self.deno, rhs.deno)?;
        Self::new(nume, deno)
    }

    /// 带溢出检查的除法
    ///
    /// # 错误
    /// - 除数为零时返回 [`FractionError::DivisionByZero`]
    /// - 交叉相乘溢出时返回 [`FractionError::Overflow`]
    ///
    /// 检查的是化简前的交叉乘积，所以分子分母较大时连 `f / f` 也会溢出：
    /// `65536/65537` 除以自身需要计算 `65536 * 65537`，超出 `i32`。
    ///
    /// # 示例
    /// ```
    /// # use fraction32::{Fraction, FractionError};
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(a.try_div(Fraction::new(1, 4)?)?, Fraction::from(2));
    /// assert_eq!(a.try_div(Fraction::ZERO), Err(FractionError::DivisionByZero));
    ///
    /// let big = Fraction::new(65536, 65537)?;
    /// assert_eq!(big.try_div(big), Err(FractionError::Overflow));
    /// # Ok::<(), FractionError>(())
    /// ```
    pub fn try_div(self, rhs: Self) -> Result<Self, FractionError> {
        if rhs.is_zero() {
            tracing::debug!(lhs = %self, "rejected division by zero");
            return Err(FractionError::DivisionByZero);
        }
        let nume = utils::checked_mul("div", self.nume, rhs.deno)?;
        let deno = utils::checked_mul("div", self.deno, rhs.nume)?;
        Self::new(nume, deno)
    }

    /// 带溢出检查的取反
    pub fn try_neg(self) -> Result<Self, FractionError> {
        let nume = utils::checked_sub("neg", 0, self.nume)?;
        Ok(Self { nume, deno: self.deno })
    }

    /// 前置自增：加一后返回新值
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let mut f = Fraction::new(3, 4)?;
    /// let g = f.increment()?;
    /// assert_eq!(f, Fraction::new(7, 4)?);
    /// assert_eq!(g, f);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn increment(&mut self) -> Result<Self, FractionError> {
        let nume = utils::checked_add("increment", self.nume, self.deno)?;
        *self = Self::new(nume, self.deno)?;
        Ok(*self)
    }

    /// 后置自增：加一后返回原值
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let mut f = Fraction::new(1, 2)?;
    /// let g = f.post_increment()?;
    /// assert_eq!(f, Fraction::new(3, 2)?);
    /// assert_eq!(g, Fraction::new(1, 2)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    pub fn post_increment(&mut self) -> Result<Self, FractionError> {
        let prior = *self;
        self.increment()?;
        Ok(prior)
    }

    /// 前置自减：减一后返回新值
    pub fn decrement(&mut self) -> Result<Self, FractionError> {
        let nume = utils::checked_sub("decrement", self.nume, self.deno)?;
        *self = Self::new(nume, self.deno)?;
        Ok(*self)
    }

    /// 后置自减：减一后返回原值
    pub fn post_decrement(&mut self) -> Result<Self, FractionError> {
        let prior = *self;
        self.decrement()?;
        Ok(prior)
    }
}

/// 运算符版本在失败时 panic，和整数除零的行为一致
#[track_caller]
fn or_panic(result: Result<Fraction, FractionError>, op: &str) -> Fraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("fraction {op} failed: {err}"),
    }
}

impl<T: Into<Fraction>> Add<T> for Fraction {
    type Output = Self;

    /// 分数加法
    ///
    /// # Panics
    /// 溢出时 panic，需要处理错误时使用 [`Fraction::try_add`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// let b = Fraction::new(1, 3)?;
    /// assert_eq!(a + b, Fraction::new(5, 6)?);
    /// assert_eq!(a + 1, Fraction::new(3, 2)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn add(self, rhs: T) -> Self::Output {
        or_panic(self.try_add(rhs.into()), "addition")
    }
}

impl<T: Into<Fraction>> Sub<T> for Fraction {
    type Output = Self;

    /// 分数减法
    ///
    /// # Panics
    /// 溢出时 panic，需要处理错误时使用 [`Fraction::try_sub`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// let b = Fraction::new(1, 3)?;
    /// assert_eq!(a - b, Fraction::new(1, 6)?);
    /// assert_eq!(a - 1, Fraction::new(-1, 2)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn sub(self, rhs: T) -> Self::Output {
        or_panic(self.try_sub(rhs.into()), "subtraction")
    }
}

impl<T: Into<Fraction>> Mul<T> for Fraction {
    type Output = Self;

    /// 分数乘法
    ///
    /// # Panics
    /// 溢出时 panic，需要处理错误时使用 [`Fraction::try_mul`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// assert_eq!(a * Fraction::from(2), Fraction::ONE);
    /// assert_eq!(a * 3, Fraction::new(3, 2)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn mul(self, rhs: T) -> Self::Output {
        or_panic(self.try_mul(rhs.into()), "multiplication")
    }
}

impl<T: Into<Fraction>> Div<T> for Fraction {
    type Output = Self;

    /// 分数除法
    ///
    /// # Panics
    /// 除数为零或溢出时 panic，需要处理错误时使用 [`Fraction::try_div`]
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(1, 2)?;
    /// let b = Fraction::new(1, 3)?;
    /// assert_eq!(a / b, Fraction::new(3, 2)?);
    /// assert_eq!(a / 3, Fraction::new(1, 6)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn div(self, rhs: T) -> Self::Output {
        or_panic(self.try_div(rhs.into()), "division")
    }
}

impl<T: Into<Fraction>> AddAssign<T> for Fraction {
    /// 实现 `+=` 操作
    ///
    /// 在数值上与 `+` 的行为相同
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Into<Fraction>> SubAssign<T> for Fraction {
    /// 实现 `-=` 操作
    ///
    /// 在数值上与 `-` 的行为相同
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Into<Fraction>> MulAssign<T> for Fraction {
    /// 实现 `*=` 操作
    ///
    /// 在数值上与 `*` 的行为相同
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Into<Fraction>> DivAssign<T> for Fraction {
    /// 实现 `/=` 操作
    ///
    /// 在数值上与 `/` 的行为相同
    ///
    /// # 示例
    /// ```rust
    /// # use fraction32::Fraction;
    /// let mut a = Fraction::new(1, 2)?;
    /// let mut b = Fraction::new(1, 3)?;
    /// a /= b;
    /// b /= 3;
    /// assert_eq!(a, Fraction::new(3, 2)?);
    /// assert_eq!(b, Fraction::new(1, 9)?);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl Neg for Fraction {
    type Output = Self;

    /// 取反
    ///
    /// # Panics
    /// 分子为 `i32::MIN` 时 panic
    fn neg(self) -> Self::Output {
        or_panic(self.try_neg(), "negation")
    }
}

impl Display for Fraction {
    /// 格式化输出，始终为 `分子/分母`
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// assert_eq!(Fraction::new(1, -2)?.to_string(), "-1/2");
    /// assert_eq!(Fraction::from(5).to_string(), "5/1");
    /// assert_eq!(Fraction::ZERO.to_string(), "0/1");
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.nume, self.deno)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// 交叉相乘比较，放宽到 `i64` 计算不会溢出
    ///
    /// # 示例
    /// ```
    /// # use fraction32::Fraction;
    /// let a = Fraction::new(3, 4)?;
    /// let b = Fraction::new(1, 2)?;
    /// assert!(a > b);
    /// assert!(b < a);
    /// assert!(a >= Fraction::new(6, 8)?);
    /// assert!(Fraction::MIN < Fraction::MAX);
    /// # Ok::<(), fraction32::FractionError>(())
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.nume as i64, self.deno as i64);
        let (c, d) = (other.nume as i64, other.deno as i64);
        (a * d).cmp(&(c * b))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    Self { nume: i32::from(value), deno: 1 }
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, u8, u16);

macro_rules! impl_try_from_float {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Fraction {
                type Error = FractionError;

                /// 浮点数转分数，乘以 1000 后向零截断，只保留三位小数
                ///
                /// # 错误
                /// NaN、无穷或乘以 1000 后超出 `i32` 时返回 [`FractionError::Conversion`]
                ///
                /// # 示例
                /// ```
                /// # use fraction32::Fraction;
                #[doc = concat!(" let f = Fraction::try_from(1.25", stringify!($t), ")?;")]
                /// assert_eq!(f, Fraction::new(5, 4)?);
                #[doc = concat!(" let g = Fraction::try_from(0.33339", stringify!($t), ")?;")]
                /// assert_eq!(g, Fraction::new(333, 1000)?);
                /// # Ok::<(), fraction32::FractionError>(())
                /// ```
                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    if value.is_nan() {
                        return Err(ConversionError::NaNConversion.into());
                    }
                    if value.is_infinite() {
                        return Err(ConversionError::InfiniteConversion.into());
                    }
                    if value == 0.0 {
                        return Ok(Self::ZERO);
                    }

                    let scaled = (value * Self::FLOAT_SCALE as $t).trunc();
                    if scaled < -2147483648.0 || scaled >= 2147483648.0 {
                        tracing::debug!(value = value as f64, "float out of range for fraction");
                        return Err(ConversionError::OutOfRangeError.into());
                    }

                    let (nume, deno) = utils::normalize(scaled as i64, Self::FLOAT_SCALE as i64)?;
                    Ok(Self { nume, deno })
                }
            }

            impl From<Fraction> for $t {
                fn from(value: Fraction) -> Self {
                    (value.nume as f64 / value.deno as f64) as $t
                }
            }
        )*
    };
}

impl_try_from_float!(f32, f64);

macro_rules! impl_try_from_for_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<Fraction> for $t {
                type Error = ConversionError;

                /// 向零截断取整后转换，超出目标类型范围时返回 [`ConversionError::OutOfRangeError`]
                ///
                /// # 示例
                /// ```
                /// # use fraction32::Fraction;
                #[doc = concat!(" assert_eq!(", stringify!($t), "::try_from(Fraction::new(7, 2)?), Ok(3));")]
                /// # Ok::<(), fraction32::FractionError>(())
                /// ```
                fn try_from(value: Fraction) -> Result<Self, Self::Error> {
                    <$t>::try_from(value.trunc()).map_err(|_| ConversionError::OutOfRangeError)
                }
            }
        )*
    };
}

impl_try_from_for_integer!(i8, i16, i32, i64, u8, u16, u32);
