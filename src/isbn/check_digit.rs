//! Check-Digit Arithmetic
//!
//! Both algorithms read digits at fixed offsets of the hyphen-stripped
//! form. A candidate without enough leading ASCII digits yields `None`.

/// Remove every `-` from the candidate, keeping all other characters in order
pub fn strip_hyphens(raw: &str) -> String {
    raw.chars().filter(|&c| c != '-').collect()
}

/// Read the first `N` characters of `stripped` as decimal digits
fn leading_digits<const N: usize>(stripped: &str) -> Option<[u32; N]> {
    let mut digits = [0; N];
    let mut chars = stripped.chars();
    for slot in digits.iter_mut() {
        *slot = chars.next()?.to_digit(10)?;
    }
    Some(digits)
}

/// Compute the ISBN-13 check character from the first 12 digits
///
/// Weights alternate 1 and 3. A weighted sum divisible by 10 gives `'0'`.
pub fn isbn13_check_character(stripped: &str) -> Option<char> {
    let digits = leading_digits::<12>(stripped)?;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();

    let check = match 10 - sum % 10 {
        10 => '0',
        n => char::from_digit(n, 10)?,
    };
    log::trace!("ISBN-13 weighted sum {} -> check {}", sum, check);
    Some(check)
}

/// Compute the ISBN-10 check character from the first 9 digits
///
/// Weights run 10 down to 2. A raw check of 10 is `'X'`, 11 is `'0'`.
pub fn isbn10_check_character(stripped: &str) -> Option<char> {
    let digits = leading_digits::<9>(stripped)?;
    let sum: u32 = digits
        .iter()
        .zip((2..=10).rev())
        .map(|(d, weight)| d * weight)
        .sum();

    let check = match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        n => char::from_digit(n, 10)?,
    };
    log::trace!("ISBN-10 weighted sum {} -> check {}", sum, check);
    Some(check)
}
