//! Content glob patterns
//!
//! The `content` field lists glob patterns selecting which source files the
//! consuming build tool scans for class names. The dialect allows brace
//! alternation (`./**/*.{html,hbs}`), which the `glob` crate does not speak,
//! so patterns are brace-expanded first and each alternative is checked
//! against `glob::Pattern`.

use glob::Pattern;
use thiserror::Error;

/// Error type for content pattern validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern string was empty
    #[error("empty pattern")]
    Empty,
    /// Unbalanced `{` / `}` in the pattern
    #[error("unbalanced braces in pattern '{0}'")]
    UnbalancedBraces(String),
    /// A brace-expanded alternative is not a valid glob
    #[error("invalid glob '{pattern}': {message}")]
    InvalidGlob {
        /// The expanded alternative that failed
        pattern: String,
        /// Error message from the glob parser
        message: String,
    },
}

/// Expand one level of brace alternation, recursing into the remainder.
///
/// `a.{x,y}` expands to `["a.x", "a.y"]`; nested groups expand in document
/// order. A pattern without braces expands to itself.
///
/// # Examples
///
/// ```
/// use windcfg::content::expand_braces;
///
/// let alts = expand_braces("./**/*.{html,hbs}").unwrap();
/// assert_eq!(alts, vec!["./**/*.html".to_string(), "./**/*.hbs".to_string()]);
/// ```
///
/// # Errors
///
/// Returns `PatternError::UnbalancedBraces` when a `{` has no matching `}`
/// or a `}` appears without an opener.
pub fn expand_braces(pattern: &str) -> Result<Vec<String>, PatternError> {
    let Some(open) = pattern.find('{') else {
        if pattern.contains('}') {
            return Err(PatternError::UnbalancedBraces(pattern.to_string()));
        }
        return Ok(vec![pattern.to_string()]);
    };

    // Find the matching close brace, honoring nesting.
    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in pattern[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }
    let close = close.ok_or_else(|| PatternError::UnbalancedBraces(pattern.to_string()))?;

    let prefix = &pattern[..open];
    let body = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];

    // Split the body on commas at nesting depth zero.
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return Err(PatternError::UnbalancedBraces(pattern.to_string()));
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                alternatives.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(PatternError::UnbalancedBraces(pattern.to_string()));
    }
    alternatives.push(&body[start..]);

    let mut expanded = Vec::new();
    for alt in alternatives {
        for rest in expand_braces(&format!("{}{}{}", prefix, alt, suffix))? {
            expanded.push(rest);
        }
    }
    Ok(expanded)
}

/// Check that a content pattern is syntactically valid.
///
/// A pattern is valid when it is non-empty, its braces are balanced, and
/// every brace-expanded alternative parses as a glob.
///
/// # Errors
///
/// Returns the first `PatternError` encountered.
pub fn check_pattern(pattern: &str) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    for alt in expand_braces(pattern)? {
        Pattern::new(&alt).map_err(|e| PatternError::InvalidGlob {
            pattern: alt.clone(),
            message: e.msg.to_string(),
        })?;
    }
    Ok(())
}
