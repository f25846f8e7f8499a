use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::national_id::errors::NationalIdError;
use crate::national_id::errors::NationalIdError::{NonexistentDate, UndeterminedCentury};
use crate::national_id::utils::{get_century, is_d_number, normalize_day, two_digits};
use crate::national_id::NationalIdentityNumber;

#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Gender is carried by the parity of the last individual number digit.
    pub fn from_digit(digit: u8) -> Gender {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Century {
    Eighteen,
    Nineteen,
    Twenty,
}

impl Century {
    pub fn as_prefix(&self) -> u8 {
        match self {
            Century::Eighteen => 18,
            Century::Nineteen => 19,
            Century::Twenty => 20,
        }
    }

    pub fn full_year(&self, two_digit_year: u8) -> i32 {
        i32::from(self.as_prefix()) * 100 + i32::from(two_digit_year)
    }
}

/// An 11-digit Norwegian birth number or D-number that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber {
    digits: String,
}

impl IdentityNumber {
    /// Callers must have validated `digits` already.
    pub(crate) fn new_unchecked(digits: &str) -> IdentityNumber {
        IdentityNumber {
            digits: digits.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn individual_number(&self) -> u16 {
        self.digits[6..9].parse().unwrap_or_default()
    }

    pub fn gender(&self) -> Gender {
        Gender::from_digit(self.digits.as_bytes()[8] - b'0')
    }

    pub fn is_d_number(&self) -> bool {
        is_d_number(&self.digits[..6])
    }

    pub fn century(&self) -> Option<Century> {
        get_century(self.individual_number(), self.birth_year())
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.try_birth_date().ok()
    }

    /// Like [`IdentityNumber::birth_date`], but says why no date could be built.
    pub fn try_birth_date(&self) -> Result<NaiveDate, NationalIdError> {
        let birth_year = self.birth_year();
        let century = self.century().ok_or(UndeterminedCentury {
            individual_number: self.individual_number(),
            birth_year,
        })?;

        let ddmmyy = normalize_day(&self.digits[..6]);
        let day = two_digits(&ddmmyy, 0).unwrap_or_default();
        let month = two_digits(&ddmmyy, 2).unwrap_or_default();

        NaiveDate::from_ymd_opt(century.full_year(birth_year), month, day)
            .ok_or_else(|| NonexistentDate(self.digits.clone()))
    }

    /// Whole years from the birth date to `today`. `None` if the birth date is
    /// unknown or lies after `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        today.years_since(self.birth_date()?)
    }

    fn birth_year(&self) -> u8 {
        self.digits[4..6].parse().unwrap_or_default()
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

impl FromStr for IdentityNumber {
    type Err = NationalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NationalIdentityNumber::parse(s)
    }
}

impl TryFrom<&str> for IdentityNumber {
    type Error = NationalIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NationalIdentityNumber::parse(value)
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = NationalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NationalIdentityNumber::parse(&value)
    }
}

impl From<IdentityNumber> for String {
    fn from(value: IdentityNumber) -> Self {
        value.digits
    }
}
