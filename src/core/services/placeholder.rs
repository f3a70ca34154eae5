use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::core::errors::{Result, StackctxError};

/// `${name}` where `name` is an identifier. Anything else is literal text.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Replaces `${name}` tokens in string values with known variables.
///
/// Substitution is a single pass: text produced by a replacement is
/// never scanned again, so a variable whose value contains `${x}`
/// yields that text verbatim.
pub struct PlaceholderSubstitutor<'a> {
    variables: &'a BTreeMap<String, String>,
}

impl<'a> PlaceholderSubstitutor<'a> {
    pub fn new(variables: &'a BTreeMap<String, String>) -> Self {
        Self { variables }
    }

    /// Substitute every token in `input`.
    ///
    /// Returns the new string and the number of tokens replaced.
    /// `path` is only used to locate the value in error messages.
    ///
    /// # Errors
    ///
    /// `UnresolvedPlaceholder` for the first token with no variable.
    pub fn substitute_str(&self, input: &str, path: &str) -> Result<(String, usize)> {
        let mut output = String::with_capacity(input.len());
        let mut last = 0;
        let mut count = 0;

        for caps in TOKEN.captures_iter(input) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = self.variables.get(name.as_str()).ok_or_else(|| {
                StackctxError::UnresolvedPlaceholder {
                    token: name.as_str().to_string(),
                    path: path.to_string(),
                }
            })?;

            output.push_str(&input[last..whole.start()]);
            output.push_str(value);
            last = whole.end();
            count += 1;
        }

        output.push_str(&input[last..]);
        Ok((output, count))
    }

    /// Substitute tokens in every string leaf of `value`, in place.
    ///
    /// Object keys are left alone. On error `value` may be partially
    /// rewritten, so callers should work on a copy.
    pub fn substitute_tree(&self, value: &mut Value, path: &mut String) -> Result<usize> {
        match value {
            Value::String(s) => {
                if !s.contains("${") {
                    return Ok(0);
                }
                let (replaced, count) = self.substitute_str(s, path_or_root(path))?;
                *s = replaced;
                Ok(count)
            }
            Value::Array(items) => {
                let mut total = 0;
                for (i, item) in items.iter_mut().enumerate() {
                    let len = path.len();
                    path.push('/');
                    path.push_str(&i.to_string());
                    total += self.substitute_tree(item, path)?;
                    path.truncate(len);
                }
                Ok(total)
            }
            Value::Object(map) => {
                let mut total = 0;
                for (key, item) in map.iter_mut() {
                    let len = path.len();
                    path.push('/');
                    path.push_str(&escape_pointer_segment(key));
                    total += self.substitute_tree(item, path)?;
                    path.truncate(len);
                }
                Ok(total)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(0),
        }
    }
}

fn path_or_root(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// Escape a key for use in a JSON pointer (RFC 6901).
pub(crate) fn escape_pointer_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
