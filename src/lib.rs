//! Validation and decoding of Norwegian national identity numbers.
//!
//! ```
//! use e_norge::national_id::NationalIdentityNumber;
//! use e_norge::national_id::models::Gender;
//!
//! assert!(NationalIdentityNumber::is_valid("11021599915"));
//! assert_eq!(Some(Gender::Male), NationalIdentityNumber::get_gender("11021599915"));
//! ```

pub mod national_id;
