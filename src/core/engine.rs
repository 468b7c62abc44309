use chrono::{Datelike, NaiveDate};

/// Master numbers are exempt from further digit-sum reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapses `n` by repeated digit-summing until it is a single digit or a
/// master number. `reduce(0)` returns 0 unchanged; no valid input reaches it.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

/// Pythagorean letter table: A-I map to 1-9, J-R to 1-9, S-Z to 1-8.
/// Anything that is not an ASCII letter contributes 0.
pub fn letter_value(c: char) -> u32 {
    match c.to_ascii_uppercase() {
        'A' | 'J' | 'S' => 1,
        'B' | 'K' | 'T' => 2,
        'C' | 'L' | 'U' => 3,
        'D' | 'M' | 'V' => 4,
        'E' | 'N' | 'W' => 5,
        'F' | 'O' | 'X' => 6,
        'G' | 'P' | 'Y' => 7,
        'H' | 'Q' | 'Z' => 8,
        'I' | 'R' => 9,
        _ => 0,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Digit-sum of the full birthdate in YYYYMMDD form, reduced.
pub fn life_path_number(birthdate: NaiveDate) -> u32 {
    let total = digit_sum(birthdate.year() as u32)
        + digit_sum(birthdate.month())
        + digit_sum(birthdate.day());
    reduce(total)
}

pub fn birth_day_number(day: u32) -> u32 {
    reduce(day)
}

/// Sum of letter values over every alphabetic character, reduced. Spaces,
/// digits and punctuation are skipped.
pub fn expression_number(name: &str) -> u32 {
    reduce(
        name.chars()
            .filter(|c| c.is_alphabetic())
            .map(letter_value)
            .sum(),
    )
}

/// Same as [`expression_number`] but counting vowels (A, E, I, O, U) only.
pub fn soul_urge_number(name: &str) -> u32 {
    reduce(name.chars().filter(|c| is_vowel(*c)).map(letter_value).sum())
}
