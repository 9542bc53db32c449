//! Splitting and editing argument lists around the `--` separator.
//!
//! Everything before the first `--` token is consumed by cargo itself, everything
//! after it is handed to the built program. Matching is done on whole tokens,
//! so `--release` or `--=x` never count as a separator.

/// The token separating cargo flags from positional program arguments.
pub const SEPARATOR: &str = "--";

/// Splits `arguments` at the first `--` token.
///
/// The separator itself is in neither half. Without a separator the whole list
/// is returned as the first half and the second half is empty.
///
/// # Examples
///
/// ```
/// use cargo_cmdline_core::arguments::split_on_double_dash;
///
/// let arguments = vec!["--release".to_string(), "--".to_string(), "foo".to_string()];
/// let (pre, post) = split_on_double_dash(&arguments);
/// assert_eq!(pre, ["--release"]);
/// assert_eq!(post, ["foo"]);
/// ```
#[must_use]
pub fn split_on_double_dash(arguments: &[String]) -> (&[String], &[String]) {
    match arguments.iter().position(|argument| argument == SEPARATOR) {
        Some(index) => (&arguments[..index], &arguments[index + 1..]),
        None => (arguments, &[]),
    }
}

/// Inserts `argument` as the first positional argument.
///
/// If `argument` is already positional the list is returned as is. Otherwise
/// the result is `pre ++ ["--", argument] ++ post`, adding a separator when
/// there was none.
#[must_use]
pub fn with_positional_argument(arguments: &[String], argument: &str) -> Vec<String> {
    let (pre, post) = split_on_double_dash(arguments);

    if post.iter().any(|existing| existing == argument) {
        return arguments.to_vec();
    }

    let mut result = Vec::with_capacity(arguments.len() + 2);
    result.extend_from_slice(pre);
    result.push(SEPARATOR.to_string());
    result.push(argument.to_string());
    result.extend_from_slice(post);
    result
}

/// Puts `argument` in front of everything else, separator included.
#[must_use]
pub fn prepend_argument(arguments: &[String], argument: &str) -> Vec<String> {
    let mut result = Vec::with_capacity(arguments.len() + 1);
    result.push(argument.to_string());
    result.extend_from_slice(arguments);
    result
}
