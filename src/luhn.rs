// Luhn Checksum Engine
// Mod-10 weighted checksum: check digit computation + full number validation

// ============================================================================
// CHECK DIGIT
// ============================================================================

/// Compute the Luhn check digit for a partial card number (every digit
/// except the final check position).
///
/// Traverses right-to-left with the doubling flag initially set, so the
/// digit adjacent to the (future) check position is doubled. The returned
/// digit is whatever makes the full number's weighted sum a multiple of 10.
///
/// Expects a clean digit string; any non-digit characters are skipped.
pub fn check_digit(partial: &str) -> u32 {
    let mut sum = 0u32;
    let mut double = true;

    for digit in partial.chars().rev().filter_map(|c| c.to_digit(10)) {
        let mut value = digit;
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }

    (10 - (sum % 10)) % 10
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check whether a full card number satisfies the Luhn relation.
///
/// Formatting separators (spaces, dashes) are stripped before validation.
/// The traversal starts at the actual check digit with the doubling flag
/// off, so the check digit itself is never doubled. An input with no digits
/// at all is rejected.
pub fn is_valid(card_number: &str) -> bool {
    let digits: Vec<u32> = card_number.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;

    for &digit in digits.iter().rev() {
        let mut value = digit;
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }

    sum % 10 == 0
}

// ============================================================================
// TESTS
// ============================================================================
