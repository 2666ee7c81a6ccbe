//! Spelling non-negative integers in English words, e.g. `1005` becomes
//! `"one thousand and five"`.

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
/// Suffix for each group of three digits, counting from the right.  Seven groups is enough for
/// every `u64`.
const SCALES: [&str; 7] = [
    "",
    " thousand",
    " million",
    " billion",
    " trillion",
    " quadrillion",
    " quintillion",
];

/// Spells `n` in English words.
///
/// ```
/// assert_eq!(wordcaptcha::spell(0), "zero");
/// assert_eq!(wordcaptcha::spell(1005), "one thousand and five");
/// assert_eq!(wordcaptcha::spell(42_100), "forty-two thousand, one hundred");
/// ```
pub fn spell(n: u64) -> String {
    if n == 0 {
        return "zero".to_owned();
    }
    let digits = n.to_string().bytes().map(|b| b - b'0').collect::<Vec<u8>>();
    spell_digits(&digits)
}

/// Spells a signed integer, writing negative numbers as `"negative <magnitude>"`
pub fn spell_signed(n: i64) -> String {
    if n < 0 {
        format!("negative {}", spell(n.unsigned_abs()))
    } else {
        spell(n as u64)
    }
}

/// Spells a digit string (most significant first) which has no leading zeros.  One 'unit' is
/// consumed from the front (a hundreds digit and the two digits after it, a tens pair, or a
/// single digit, depending on how many digits remain), and then the rest is spelled
/// recursively.  Returns an empty string for an empty (or all-zero) digit string.
fn spell_digits(digits: &[u8]) -> String {
    let digits = strip_leading_zeros(digits);
    if digits.is_empty() {
        return String::new();
    }
    let scale = SCALES[(digits.len() - 1) / 3];

    // Spell the leading unit, and figure out how many digits it used
    let (mut segment, unit_len) = match digits.len() % 3 {
        // Hundreds position: 'N hundred', followed by the next two digits inside the same
        // thousands group (if they aren't both zero)
        0 => {
            let mut s = format!("{} hundred", ONES[digits[0] as usize]);
            let rest_of_group = spell_digits(&digits[1..3]);
            if !rest_of_group.is_empty() {
                s.push_str(" and ");
                s.push_str(&rest_of_group);
            }
            (s, 3)
        }
        // Tens position: either an irregular teen or 'twenty'...'ninety' with an optional
        // hyphenated unit
        2 => {
            let (tens, units) = (digits[0] as usize, digits[1] as usize);
            let s = if tens == 1 {
                TEENS[units].to_owned()
            } else if units == 0 {
                TENS[tens].to_owned()
            } else {
                format!("{}-{}", TENS[tens], ONES[units])
            };
            (s, 2)
        }
        // Units position
        _ => (ONES[digits[0] as usize].to_owned(), 1),
    };
    segment.push_str(scale);

    // Spell whatever is left, skipping any zeros (so '1005' doesn't say 'zero hundred')
    let remainder = strip_leading_zeros(&digits[unit_len..]);
    if remainder.is_empty() {
        return segment;
    }
    // The final segment, if it's less than a hundred, is joined with 'and'.  Everything else is
    // separated by commas.
    let separator = if remainder.len() <= 2 { " and " } else { ", " };
    segment.push_str(separator);
    segment.push_str(&spell_digits(remainder));
    segment
}

fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let first_non_zero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    &digits[first_non_zero..]
}
