use alloc::string::{String, ToString};

use crate::SanitizeOptions;

/// Colour escapes are this character followed by one selector, e.g. `\f3`.
const COLOR_ESCAPE: char = '\x0c';

/// Strips colour escapes and surrounding whitespace from `s`.
///
/// Equivalent to [`sanitize_string_with`] with default options.
///
/// ```rust
/// use cubecode::sanitize_string;
///
/// assert_eq!(sanitize_string("\x0c3Hello\x0c1World"), "HelloWorld");
/// assert_eq!(sanitize_string("  \x0c7pwnz0r \x0c"), "pwnz0r");
/// ```
#[must_use]
pub fn sanitize_string(s: &str) -> String {
    sanitize_string_with(s, SanitizeOptions::default())
}

/// Strips colour escapes, optionally NUL characters, then leading and
/// trailing whitespace.
///
/// Escapes are removed left to right and never overlap: in `"\f\fa"` the
/// second `\f` is the selector of the first, leaving `"a"`. A `\f` at the very
/// end has no selector and is only dropped by the final trim.
#[must_use]
pub fn sanitize_string_with(s: &str, options: SanitizeOptions) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == COLOR_ESCAPE {
            match chars.next() {
                Some(_) => continue,
                None => out.push(c),
            }
        } else if !(options.strip_nul && c == '\0') {
            out.push(c);
        }
    }

    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}
