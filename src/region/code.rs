use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SeriesError, SeriesResult};

pub const REGION_CODE_LEN: usize = 6;

/// Anything a map component may hand over as an adcode.
///
/// Strings are taken verbatim; integers use their decimal rendering, so
/// `440000u32` and `"440000"` normalize to the same code.
pub trait AdcodeInput {
    fn normalized_code(&self) -> Cow<'_, str>;
}

impl AdcodeInput for str {
    fn normalized_code(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl AdcodeInput for String {
    fn normalized_code(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl AdcodeInput for RegionCode {
    fn normalized_code(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: AdcodeInput + ?Sized> AdcodeInput for &T {
    fn normalized_code(&self) -> Cow<'_, str> {
        (**self).normalized_code()
    }
}

macro_rules! impl_integer_adcode_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AdcodeInput for $ty {
                fn normalized_code(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_integer_adcode_input!(u16, u32, u64, usize, i32, i64);

/// Exactly six ASCII digits. Unicode digits are rejected.
#[must_use]
pub fn is_six_digit_code(code: &str) -> bool {
    code.len() == REGION_CODE_LEN && code.bytes().all(|byte| byte.is_ascii_digit())
}

/// A code that is known to match the six-digit pattern.
///
/// Table membership is not implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    pub fn parse(input: impl AdcodeInput) -> SeriesResult<Self> {
        let code = input.normalized_code();
        if !is_six_digit_code(&code) {
            return Err(SeriesError::MalformedCode {
                code: code.into_owned(),
            });
        }
        Ok(Self(code.into_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegionCode {
    type Error = SeriesError;

    fn try_from(value: String) -> SeriesResult<Self> {
        Self::parse(value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
