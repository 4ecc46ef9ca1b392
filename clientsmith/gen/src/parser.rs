//! Path template parsing.
//!
//! Endpoint paths use `{param}` placeholders (`users/{user_id}/posts/{id}`).
//! A placeholder name is any non-empty run of characters other than `{` and
//! `}`; an unmatched brace is literal text. Names are not validated as Ruby
//! identifiers.

/// One piece of a parsed path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Literal text copied as-is.
    Literal(&'a str),
    /// A `{name}` placeholder.
    Param(&'a str),
}

/// Splits a path template into literal and placeholder segments, in order.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::parser::{PathSegment, parse_path_template};
///
/// assert_eq!(
///     parse_path_template("users/{id}/posts"),
///     vec![
///         PathSegment::Literal("users/"),
///         PathSegment::Param("id"),
///         PathSegment::Literal("/posts"),
///     ]
/// );
/// ```
pub fn parse_path_template(path: &str) -> Vec<PathSegment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (idx, c) in path.char_indices() {
        match c {
            '{' => open = Some(idx),
            '}' => {
                if let Some(start) = open.take()
                    && idx > start + 1
                {
                    if start > literal_start {
                        segments.push(PathSegment::Literal(&path[literal_start..start]));
                    }
                    segments.push(PathSegment::Param(&path[start + 1..idx]));
                    literal_start = idx + 1;
                }
            }
            _ => {}
        }
    }

    if literal_start < path.len() {
        segments.push(PathSegment::Literal(&path[literal_start..]));
    }

    segments
}

/// Extracts placeholder names from a path template.
///
/// Names are returned in first-occurrence order; a name used twice is listed
/// once.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::parser::extract_path_params;
///
/// assert_eq!(extract_path_params("users"), Vec::<&str>::new());
/// assert_eq!(
///     extract_path_params("users/{user_id}/posts/{id}"),
///     vec!["user_id", "id"]
/// );
/// assert_eq!(extract_path_params("{id}/clone/{id}"), vec!["id"]);
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params: Vec<&str> = Vec::new();

    for segment in parse_path_template(path) {
        if let PathSegment::Param(name) = segment
            && !params.contains(&name)
        {
            params.push(name);
        }
    }

    params
}

/// Renders a path template as the body of a Ruby double-quoted string.
///
/// Each placeholder becomes `#{name}`; literal text is escaped so that it
/// cannot terminate the string or start an interpolation.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::parser::interpolate;
///
/// assert_eq!(interpolate("users/{id}"), "users/#{id}");
/// assert_eq!(interpolate("{id}/clone/{id}"), "#{id}/clone/#{id}");
/// ```
pub fn interpolate(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);

    for segment in parse_path_template(path) {
        match segment {
            PathSegment::Literal(text) => push_escaped(&mut out, text),
            PathSegment::Param(name) => {
                out.push_str("#{");
                out.push_str(name);
                out.push('}');
            }
        }
    }

    out
}

/// Substitutes placeholders with concrete values.
///
/// Placeholders without a matching value are left untouched.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::parser::substitute_path_params;
///
/// let path = substitute_path_params("users/{id}", &[("id", "123")]);
/// assert_eq!(path, "users/123");
/// ```
pub fn substitute_path_params(path: &str, params: &[(&str, &str)]) -> String {
    let mut result = path.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{}}}", name);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Appends `text` escaped for a Ruby double-quoted string.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '#') {
            out.push('\\');
        }
        out.push(c);
    }
}
