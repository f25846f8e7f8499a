use crate::national_id::models::Century;

/// Upper bound for the day of each month. February is always allowed 29 days.
const MONTH_LENGTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day offset marking a D-number.
pub const D_NUMBER_DAY_OFFSET: u32 = 40;

/// Checks the `ddmm` part of a `ddmmyy` string against the static month table.
/// The year digits are not looked at.
pub fn is_date_valid(ddmmyy: &str) -> bool {
    let (Some(day), Some(month)) = (day_field(ddmmyy), two_digits(ddmmyy, 2)) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= MONTH_LENGTHS[month as usize - 1]
}

/// A D-number stores the day of birth plus 40, so its day field is 41 to 71.
pub fn is_d_number(ddmmyy: &str) -> bool {
    day_field(ddmmyy)
        .is_some_and(|day| (D_NUMBER_DAY_OFFSET + 1..=D_NUMBER_DAY_OFFSET + 31).contains(&day))
}

/// Replaces a D-number day with the real day of birth. Other input is returned as is.
pub fn normalize_day(ddmmyy: &str) -> String {
    match day_field(ddmmyy) {
        Some(day) if is_d_number(ddmmyy) => {
            format!("{:02}{}", day - D_NUMBER_DAY_OFFSET, &ddmmyy[2..])
        }
        _ => ddmmyy.to_string(),
    }
}

pub fn get_century(individual_number: u16, birth_year: u8) -> Option<Century> {
    if birth_year > 99 {
        return None;
    }
    match individual_number {
        0..=499 => Some(Century::Nineteen),
        500..=749 if birth_year >= 55 => Some(Century::Eighteen),
        500..=999 if birth_year <= 39 => Some(Century::Twenty),
        900..=999 => Some(Century::Nineteen),
        _ => None,
    }
}

fn day_field(ddmmyy: &str) -> Option<u32> {
    if ddmmyy.len() != 6 || !ddmmyy.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    two_digits(ddmmyy, 0)
}

pub(crate) fn two_digits(digits: &str, start: usize) -> Option<u32> {
    digits.get(start..start + 2)?.parse().ok()
}

#[cfg(test)]
mod date_tests {
    use super::*;

    #[test]
    fn rejects_day_above_month_length() {
        let too_late = [
            "320100", "300200", "320300", "310400", "320500", "310600", "320700", "320800",
            "310900", "321000", "311100", "321200",
        ];
        for ddmmyy in too_late {
            assert!(!is_date_valid(ddmmyy), "{}", ddmmyy);
        }
    }

    #[test]
    fn accepts_last_day_of_each_month() {
        for (index, length) in MONTH_LENGTHS.iter().enumerate() {
            let ddmmyy = format!("{:02}{:02}00", length, index + 1);
            assert!(is_date_valid(&ddmmyy), "{}", ddmmyy);
        }
    }

    #[test]
    fn rejects_day_zero() {
        assert!(!is_date_valid("000100"));
    }

    #[test]
    fn rejects_month_outside_year() {
        assert!(!is_date_valid("010000"));
        assert!(!is_date_valid("011300"));
        assert!(!is_date_valid("019900"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_date_valid(""));
        assert!(!is_date_valid("0101"));
        assert!(!is_date_valid("01a100"));
        assert!(!is_date_valid("0101000"));
    }

    #[test]
    fn accepts_valid_date() {
        assert!(is_date_valid("010101"));
        assert!(is_date_valid("290200"));
    }

    #[test]
    fn d_number_day_range() {
        assert!(!is_d_number("201185"));
        assert!(!is_d_number("401185"));
        assert!(is_d_number("411185"));
        assert!(is_d_number("711185"));
        assert!(!is_d_number("721185"));
        assert!(!is_d_number("41118"));
    }

    #[test]
    fn normalizes_d_number_day() {
        assert_eq!("051180", normalize_day("451180"));
        assert_eq!("311299", normalize_day("711299"));
        assert_eq!("051180", normalize_day("051180"));
    }
}
