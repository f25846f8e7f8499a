pub mod checksum;
pub mod errors;
pub mod models;
pub mod utils;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::national_id::checksum::{calculate_first_checksum, calculate_second_checksum};
use crate::national_id::errors::NationalIdError;
use crate::national_id::errors::NationalIdError::{InvalidChecksum, InvalidDate, InvalidFormat};
use crate::national_id::models::{Gender, IdentityNumber};
use crate::national_id::utils::{is_date_valid, normalize_day};

const IDENTITY_NUMBER_LENGTH: usize = 11;

/// Validation and decoding of Norwegian birth numbers and D-numbers.
///
/// The boolean and `Option` returning functions treat every failure the same
/// way. Use [`NationalIdentityNumber::parse`] to learn which check failed.
pub struct NationalIdentityNumber;

impl NationalIdentityNumber {
    pub fn is_valid(number: &str) -> bool {
        Self::parse(number).is_ok()
    }

    /// Validates `number` and returns it as an [`IdentityNumber`].
    pub fn parse(number: &str) -> Result<IdentityNumber, NationalIdError> {
        let result = Self::validate(number);
        if let Err(error) = &result {
            debug!(%error, "rejected identity number");
        }
        result
    }

    fn validate(number: &str) -> Result<IdentityNumber, NationalIdError> {
        if number.len() != IDENTITY_NUMBER_LENGTH || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidFormat(number.to_string()));
        }

        if !is_date_valid(&normalize_day(&number[..6])) {
            return Err(InvalidDate(number.to_string()));
        }

        for (position, expected) in [
            (9, calculate_first_checksum(&number[..9])),
            (10, calculate_second_checksum(&number[..10])),
        ] {
            if expected != Some(number.as_bytes()[position] - b'0') {
                return Err(InvalidChecksum {
                    position,
                    number: number.to_string(),
                });
            }
        }

        Ok(IdentityNumber::new_unchecked(number))
    }

    pub fn get_birth_date(number: &str) -> Option<NaiveDate> {
        Self::parse(number).ok()?.birth_date()
    }

    /// Age in whole years as of today (UTC).
    pub fn get_age(number: &str) -> Option<u32> {
        Self::age_on(number, Utc::now().date_naive())
    }

    pub fn age_on(number: &str, today: NaiveDate) -> Option<u32> {
        Self::parse(number).ok()?.age_on(today)
    }

    pub fn get_gender(number: &str) -> Option<Gender> {
        Self::parse(number).ok().map(|number| number.gender())
    }
}
