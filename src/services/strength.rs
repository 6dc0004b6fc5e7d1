use crate::models::StrengthRating;

/// Length thresholds that each add one point
const LENGTH_STEPS: [usize; 3] = [8, 12, 16];

/// Score a password from 0 to 7.
///
/// One point each for an uppercase letter, a lowercase letter, a digit and a
/// character that is neither letter nor digit, plus one point per length
/// threshold reached (8, 12, 16 characters).
pub fn score(password: &str) -> u8 {
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_symbol = false;
    let mut length = 0usize;

    for c in password.chars() {
        length += 1;
        if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() {
            has_lower = true;
        } else if c.is_numeric() {
            has_digit = true;
        } else if !c.is_alphanumeric() {
            has_symbol = true;
        }
    }

    let classes = [has_upper, has_lower, has_digit, has_symbol]
        .into_iter()
        .filter(|present| *present)
        .count();
    let steps = LENGTH_STEPS.iter().filter(|step| length >= **step).count();

    (classes + steps) as u8
}

/// Rate a password as weak, medium or strong
pub fn evaluate(password: &str) -> StrengthRating {
    StrengthRating::from_score(score(password))
}
