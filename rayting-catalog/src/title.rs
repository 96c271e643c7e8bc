//! Title display and ordering helpers.

use std::cmp::Ordering;
use std::iter::Peekable;

/// Move a trailing article back to the front: `"Godfather, The"` → `"The Godfather"`.
///
/// Only applies when the title has exactly one comma and the part after it
/// is a single word, so titles like `"Crouching Tiger, Hidden Dragon"` are
/// left alone.
pub fn display_title(raw: &str) -> String {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [head, suffix]
            if !head.is_empty() && !suffix.is_empty() && !suffix.contains(char::is_whitespace) =>
        {
            format!("{suffix} {head}")
        }
        _ => raw.to_string(),
    }
}

/// Case-insensitive comparison that orders digit runs by numeric value,
/// so `"Film 2"` sorts before `"Film 10"` and `"2001"` before `"Abyss"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().flat_map(char::to_lowercase).peekable();
    let mut b = b.chars().flat_map(char::to_lowercase).peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ord = cmp_digits(&take_digits(&mut a), &take_digits(&mut b));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits<I: Iterator<Item = char>>(it: &mut Peekable<I>) -> String {
    let mut out = String::new();
    while let Some(c) = it.next_if(char::is_ascii_digit) {
        out.push(c);
    }
    out
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
