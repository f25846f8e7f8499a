//! Mod-11 control digits at positions 9 and 10 of an identity number.

const FIRST_CHECKSUM_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
const SECOND_CHECKSUM_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Control digit for the first nine digits of an identity number.
///
/// Returns `None` for input that is not exactly nine ASCII digits, and for
/// digit sequences whose weighted sum leaves remainder 1, which have no valid
/// control digit.
pub fn calculate_first_checksum(nine_digits: &str) -> Option<u8> {
    weighted_checksum(nine_digits, &FIRST_CHECKSUM_WEIGHTS)
}

/// Control digit for the first ten digits, the tenth being the first checksum.
pub fn calculate_second_checksum(ten_digits: &str) -> Option<u8> {
    weighted_checksum(ten_digits, &SECOND_CHECKSUM_WEIGHTS)
}

fn weighted_checksum(digits: &str, weights: &[u32]) -> Option<u8> {
    if digits.len() != weights.len() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let weighted: u32 = digits
        .bytes()
        .zip(weights)
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    match 11 - weighted % 11 {
        11 => Some(0),
        10 => None,
        checksum => Some(checksum as u8),
    }
}
