//! Identifier normalization for generated Ruby code.
//!
//! Every name that appears in more than one generated file (the module
//! constant, resource classes, file paths) is derived here so that
//! cross-file references always agree.
//!
//! ## Rules
//!
//! - Module name: split on `-` and `_`, uppercase the first character of each
//!   segment, concatenate (`payments-api` -> `PaymentsApi`)
//! - Resource class: uppercase the first character only (`users` -> `Users`)
//! - File stem: `-` becomes `_` (`payments-api` -> `payments_api`)
//! - Singular: drop one trailing `s` (`posts` -> `post`)
//!
//! The singular rule is intentionally naive: `categories` becomes
//! `categorie`. It only feeds block variable names in documentation.

/// Converts an API name to a PascalCase Ruby module name.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::naming::module_name;
///
/// assert_eq!(module_name("payments-api"), "PaymentsApi");
/// assert_eq!(module_name("my_cool-api"), "MyCoolApi");
/// assert_eq!(module_name("github"), "Github");
/// ```
pub fn module_name(api_name: &str) -> String {
    api_name
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Converts a resource key to its Ruby class name.
///
/// Only the first character changes; the remainder is used verbatim.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::naming::class_name_for_resource;
///
/// assert_eq!(class_name_for_resource("users"), "Users");
/// assert_eq!(class_name_for_resource("user-posts"), "User-posts");
/// ```
pub fn class_name_for_resource(resource: &str) -> String {
    capitalize_first(resource)
}

/// Naive singular form: strips one trailing `s`.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::naming::singular;
///
/// assert_eq!(singular("users"), "user");
/// assert_eq!(singular("data"), "data");
/// ```
pub fn singular(resource: &str) -> String {
    resource.strip_suffix('s').unwrap_or(resource).to_string()
}

/// Converts an API name to the file stem used for `lib/<stem>.rb`.
///
/// ## Examples
///
/// ```
/// use clientsmith_gen::naming::file_stem;
///
/// assert_eq!(file_stem("payments-api"), "payments_api");
/// ```
pub fn file_stem(api_name: &str) -> String {
    api_name.replace('-', "_")
}

/// Lowercased module name, used for cache file names and cache keys.
pub fn lower_identifier(module_name: &str) -> String {
    module_name.to_lowercase()
}

/// Heading text for a resource in generated documentation.
pub fn humanize(resource: &str) -> String {
    class_name_for_resource(resource)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
