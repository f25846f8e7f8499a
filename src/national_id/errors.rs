use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NationalIdError {
    #[error("Identity number must be 11 digits: {0}")]
    InvalidFormat(String),
    #[error("Identity number does not start with a valid date: {0}")]
    InvalidDate(String),
    #[error("Checksum digit at position {position} does not match: {number}")]
    InvalidChecksum { position: usize, number: String },
    #[error("Century cannot be determined from individual number {individual_number} and year {birth_year}")]
    UndeterminedCentury { individual_number: u16, birth_year: u8 },
    #[error("Birth date is not a calendar date: {0}")]
    NonexistentDate(String),
}
