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

//! `i32` 分数库
//!
//! ```
//! use fraction32::Fraction;
//!
//! let a = Fraction::new(3, 4)?;
//! let b: Fraction = "1/4".parse()?;
//! assert_eq!(a + b, Fraction::ONE);
//! assert_eq!(2.0f32 + Fraction::new(1, 2)?, Fraction::new(5, 2)?);
//! # Ok::<(), fraction32::FractionError>(())
//! ```

mod error;
mod fraction;

pub use error::{ConversionError, FormatError, FractionError};
pub use fraction::{Fraction, ParseAll};
