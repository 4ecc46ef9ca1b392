//! Response-shape resolution for generated resource methods.
//!
//! Decides whether an endpoint returns a collection and produces the Ruby
//! expression that turns the raw `response` body into a wrapper object.

use clientsmith_define::{ResourceSpec, ResponseFormat};

use crate::parser::push_escaped;

/// Endpoint names that return a collection unless overridden.
pub const COLLECTION_NAMES: &[&str] = &["all", "list", "index", "search"];

/// Resolves the collection flag for an endpoint.
///
/// An explicit `collection` setting wins; otherwise the endpoint is a
/// collection when its name is one of [`COLLECTION_NAMES`].
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::response::is_collection;
///
/// assert!(is_collection("list", None));
/// assert!(!is_collection("fetchOne", None));
/// assert!(is_collection("anything", Some(true)));
/// assert!(!is_collection("list", Some(false)));
/// ```
pub fn is_collection(name: &str, explicit: Option<bool>) -> bool {
    explicit.unwrap_or_else(|| COLLECTION_NAMES.contains(&name))
}

/// The response format in effect for a resource.
pub fn effective_format(resource: &ResourceSpec, global: &ResponseFormat) -> ResponseFormat {
    match &resource.response_format {
        Some(format) => format.merged_with(global),
        None => global.clone(),
    }
}

/// Builds the Ruby expression that wraps `response`.
///
/// ## Examples
///
/// ```
/// use clientsmith_define::ResponseFormat;
/// use clientsmith_gen::response::unwrap_expression;
///
/// let plain = ResponseFormat::default();
/// assert_eq!(
///     unwrap_expression("Shop", true, &plain),
///     "Shop::Collection.from_response(response, type: Shop::Object)"
/// );
/// assert_eq!(unwrap_expression("Shop", false, &plain), "Shop::Object.new(response)");
/// ```
pub fn unwrap_expression(module: &str, is_collection: bool, format: &ResponseFormat) -> String {
    if is_collection {
        collection_expression(module, format)
    } else {
        object_expression(module, format.item_root.as_deref())
    }
}

fn collection_expression(module: &str, format: &ResponseFormat) -> String {
    let mut args = vec![format!("type: {}::Object", module)];

    let keys = [
        ("data_key", format.collection_root.as_deref()),
        ("next_key", format.next_page_key()),
        ("total_key", format.total_count_key()),
        ("limit_key", format.limit_key()),
    ];
    for (arg, key) in keys {
        if let Some(key) = key {
            args.push(format!("{}: {}", arg, ruby_string(key)));
        }
    }

    format!(
        "{}::Collection.from_response(response, {})",
        module,
        args.join(", ")
    )
}

fn object_expression(module: &str, item_root: Option<&str>) -> String {
    match item_root {
        Some(root) => format!(
            "{module}::Object.new(response.is_a?(Hash) ? (response[{sym}] || response[{s}] || response) : response)",
            module = module,
            sym = ruby_symbol(root),
            s = ruby_string(root),
        ),
        None => format!("{}::Object.new(response)", module),
    }
}

/// Ruby double-quoted string literal.
pub(crate) fn ruby_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    push_escaped(&mut out, value);
    out.push('"');
    out
}

/// Ruby symbol literal, quoted when the key is not a plain identifier.
pub(crate) fn ruby_symbol(value: &str) -> String {
    let plain = value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        format!(":{}", value)
    } else {
        format!(":{}", ruby_string(value))
    }
}
