//! Message template rendering
//!
//! Templates use named placeholders: `"Cannot be shorter than {min} characters"`.
//! `{{` and `}}` render literal braces. A placeholder with no matching
//! parameter is kept verbatim so a missing argument stays visible.

use std::borrow::Cow;

/// A named template parameter, e.g. `("min", "3")`.
pub type Param = (Cow<'static, str>, Cow<'static, str>);

/// Builds a [`Param`] from anything string-like.
pub fn param(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Param {
    (key.into(), value.into())
}

/// Renders `template`, substituting `{name}` placeholders from `params`.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook_locale::{param, render};
///
/// let text = render("between {min} and {max}", &[param("min", "1"), param("max", "9")]);
/// assert_eq!(text, "between 1 and 9");
/// ```
pub fn render(template: &str, params: &[Param]) -> String {
    if !template.contains(['{', '}']) {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('}') {
            out.push('}');
            rest = after;
            continue;
        }

        match tail[1..].find('}') {
            Some(end) => {
                let name = &tail[1..=end];
                match lookup(params, name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&tail[..end + 2]),
                }
                rest = &tail[end + 2..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn lookup<'p>(params: &'p [Param], name: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(key, _)| key.as_ref() == name)
        .map(|(_, value)| value.as_ref())
}
