//! Generates `README.md` for the client gem.

use clientsmith_define::{EndpointSpec, HttpMethod};

use crate::auth::readme_lines;
use crate::builder::GenerationContext;
use crate::naming::humanize;
use crate::parser::extract_path_params;

/// Renders the README.
///
/// Sections: Installation, Configuration, Usage, Available Resources and
/// Endpoints, Error Handling, API Documentation, Cache.
pub fn render(ctx: &GenerationContext<'_>) -> String {
    let sections = [
        intro(ctx),
        installation(ctx),
        configuration(ctx),
        usage(ctx),
        resources(ctx),
        error_handling(ctx),
        api_documentation(),
        cache(ctx),
    ];

    let mut readme = sections.join("\n\n");
    readme.push('\n');
    readme
}

fn intro(ctx: &GenerationContext<'_>) -> String {
    format!(
        "# {} API Client\n\nA Ruby API wrapper for {}.",
        ctx.module_name, ctx.api_name
    )
}

fn installation(ctx: &GenerationContext<'_>) -> String {
    [
        "## Installation".to_string(),
        String::new(),
        "Add this line to your Gemfile:".to_string(),
        String::new(),
        "```ruby".to_string(),
        format!("gem \"{}\"", ctx.api_name),
        "```".to_string(),
        String::new(),
        "And then execute:".to_string(),
        String::new(),
        "    $ bundle install".to_string(),
        String::new(),
        "Or install it yourself as:".to_string(),
        String::new(),
        format!("    $ gem install {}", ctx.api_name),
    ]
    .join("\n")
}

fn configuration(ctx: &GenerationContext<'_>) -> String {
    let mut lines = vec![
        "## Configuration".to_string(),
        String::new(),
        "```ruby".to_string(),
        format!("{}.configure do |config|", ctx.module_name),
        format!("  config.base_url = \"{}\"", ctx.config.base_url()),
        "  config.timeout = 30".to_string(),
    ];
    lines.extend(readme_lines(ctx.config).into_iter().map(|l| format!("  {}", l)));
    lines.push("end".to_string());
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Each client can also carry its own configuration: `{}::Client.new(my_configuration)`.",
        ctx.module_name
    ));
    lines.join("\n")
}

fn usage(ctx: &GenerationContext<'_>) -> String {
    let mut lines = vec![
        "## Usage".to_string(),
        String::new(),
        "```ruby".to_string(),
        format!("client = {}.client", ctx.module_name),
    ];

    for (name, resource) in &ctx.config.resources {
        let Some(endpoint) = resource.endpoints.first() else {
            continue;
        };
        lines.push(String::new());
        lines.push(format!("# {} - {}", humanize(name), endpoint.name));
        lines.push(format!("response = {}", example_call(name, endpoint)));
    }

    lines.push("```".to_string());
    lines.join("\n")
}

fn resources(ctx: &GenerationContext<'_>) -> String {
    let mut lines = vec!["## Available Resources and Endpoints".to_string()];

    if ctx.config.resources.is_empty() {
        lines.push(String::new());
        lines.push("No resources are configured.".to_string());
    }

    for (name, resource) in &ctx.config.resources {
        lines.push(String::new());
        lines.push(format!("### {}", humanize(name)));

        for endpoint in &resource.endpoints {
            let path = endpoint.path();
            let params = extract_path_params(path);

            lines.push(String::new());
            lines.push(format!("#### `{}`", endpoint.name));
            lines.push(String::new());
            lines.push(format!("- HTTP Method: `{}`", endpoint.method.upper()));
            lines.push(format!("- Path: `{}`", path));
            if !params.is_empty() {
                let names: Vec<String> = params.iter().map(|p| format!("`{}`", p)).collect();
                lines.push(format!("- Path Parameters: {}", names.join(", ")));
            }
            if endpoint.params {
                lines.push("- Accepts additional query parameters".to_string());
            }
            lines.push(String::new());
            lines.push("```ruby".to_string());
            lines.push(example_call(name, endpoint));
            lines.push("```".to_string());
        }
    }

    lines.join("\n")
}

fn error_handling(ctx: &GenerationContext<'_>) -> String {
    let example = ctx
        .config
        .resources
        .iter()
        .find_map(|(name, r)| r.endpoints.first().map(|e| example_call(name, e)))
        .unwrap_or_else(|| "client.some_resource.some_method".to_string());

    [
        "## Error Handling".to_string(),
        String::new(),
        "```ruby".to_string(),
        "begin".to_string(),
        format!("  response = {}", example),
        format!("rescue {}::Error => e", ctx.module_name),
        "  puts \"Error: #{e.message}\"".to_string(),
        "  puts \"Status: #{e.status}\"".to_string(),
        "  puts \"Details: #{e.body}\"".to_string(),
        "end".to_string(),
        "```".to_string(),
    ]
    .join("\n")
}

fn api_documentation() -> String {
    [
        "## API Documentation",
        "",
        "Detailed API documentation is available in the `docs/api.md` file, which includes:",
        "",
        "- All available endpoints",
        "- Required parameters",
        "- Example requests and responses",
        "- Authentication details",
    ]
    .join("\n")
}

fn cache(ctx: &GenerationContext<'_>) -> String {
    let module = &ctx.module_name;
    [
        "## Cache".to_string(),
        String::new(),
        format!(
            "{} caches values such as OAuth tokens. By default it uses an in-memory cache; set `{}.cache` (or `config.cache` on a single configuration) to change it.",
            module, module
        ),
        String::new(),
        "```ruby".to_string(),
        "# File-based cache".to_string(),
        format!("{}.cache = {}::FileCache.new", module, module),
        String::new(),
        "# Rails cache".to_string(),
        format!("{}.cache = Rails.cache", module),
        String::new(),
        "# Any object that responds to read/write/delete/clear".to_string(),
        format!("{}.cache = YourCustomCache.new", module),
        "```".to_string(),
    ]
    .join("\n")
}

/// Example invocation with placeholder arguments.
fn example_call(resource: &str, endpoint: &EndpointSpec) -> String {
    let mut args: Vec<String> = extract_path_params(endpoint.path())
        .iter()
        .map(|_| "123".to_string())
        .collect();
    if endpoint.params {
        args.push("{ page: 1 }".to_string());
    }
    if endpoint.method.has_body() {
        let body = if endpoint.method == HttpMethod::Post {
            "{ name: \"value\" }"
        } else {
            "{ name: \"new value\" }"
        };
        args.push(body.to_string());
    }

    if args.is_empty() {
        format!("client.{}.{}", resource, endpoint.name)
    } else {
        format!("client.{}.{}({})", resource, endpoint.name, args.join(", "))
    }
}
