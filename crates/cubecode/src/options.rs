/// Selects which sanitizer revision [`sanitize_string_with`] applies.
///
/// Older servers only ever embed colour escapes in display strings. Later
/// protocol revisions can also leave stray NUL characters behind, which the
/// newer sanitizer removes as well.
///
/// ```rust
/// use cubecode::{SanitizeOptions, sanitize_string_with};
///
/// assert_eq!(sanitize_string_with("a\0b", SanitizeOptions::default()), "a\0b");
/// assert_eq!(sanitize_string_with("a\0b", SanitizeOptions::STRIP_NUL), "ab");
/// ```
///
/// # Default
///
/// All options default to `false`.
///
/// [`sanitize_string_with`]: crate::sanitize_string_with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SanitizeOptions {
    /// Whether to remove embedded `'\0'` characters before trimming.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_nul: bool,
}

impl SanitizeOptions {
    /// Options for the later revision that also strips NUL characters.
    pub const STRIP_NUL: Self = Self { strip_nul: true };
}
