//! Text helpers shared by the combinators and error rendering.

use std::fmt::Display;

/// Joins items into a human list, using `conj` before the last item.
///
/// `["a", "b", "c"]` with `"or"` becomes `"a, b or c"`.
#[must_use]
pub fn comma_list<T: Display>(items: &[T], conj: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {conj} {second}"),
        [first, rest @ ..] => format!("{first}, {}", comma_list(rest, conj)),
    }
}

/// Joins items with `"and"`.
#[must_use]
pub fn comma_list_and<T: Display>(items: &[T]) -> String {
    comma_list(items, "and")
}

/// Joins items with `"or"`.
#[must_use]
pub fn comma_list_or<T: Display>(items: &[T]) -> String {
    comma_list(items, "or")
}

/// Length of a case-insensitive common prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SharedPrefix {
    /// Matched characters.
    pub chars: usize,
    /// Matched bytes of the input side.
    pub bytes: usize,
}

/// Measures the case-insensitive common prefix of `input` and `target`.
pub(crate) fn shared_prefix(input: &str, target: &str) -> SharedPrefix {
    let mut shared = SharedPrefix::default();
    for (c, t) in input.chars().zip(target.chars()) {
        if !same_char(c, t) {
            break;
        }
        shared.chars += 1;
        shared.bytes += c.len_utf8();
    }
    shared
}

fn same_char(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
