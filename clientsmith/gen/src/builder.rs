//! Orchestrates one generation run.
//!
//! [`Builder`] derives the [`GenerationContext`] once, renders every file in
//! a fixed order and hands the results to a [`Sink`]. Rendering is pure; only
//! the sink touches the outside world.
//!
//! ## File Order
//!
//! 1. Base files under `lib/<stem>/`, then the entry file `lib/<stem>.rb`
//! 2. One file per resource under `lib/<stem>/resources/`, in declaration order
//! 3. `docs/api.md` and `README.md`
//! 4. `test/test_helper.rb` and `test/<stem>_test.rb`

use std::path::{Path, PathBuf};

use clientsmith_define::ApiConfig;
use tracing::{debug, info};

use crate::codegen::{
    ApiDocBuilder, cache, client, collection, configuration, error, main_file, object, readme,
    request, resource, test_suite, version,
};
use crate::errors::GeneratorError;
use crate::naming::{file_stem, lower_identifier, module_name};
use crate::output::Sink;

/// Names derived from the configuration, computed once per run.
///
/// Every template reads its identifiers from here, so the module constant
/// and file paths agree across all generated files.
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    pub config: &'a ApiConfig,
    /// Effective API name (gem name).
    pub api_name: String,
    /// `api_name` with `-` replaced by `_`.
    pub file_stem: String,
    /// PascalCase Ruby module constant.
    pub module_name: String,
    /// Lowercased module name, used for cache keys and file names.
    pub lower_name: String,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a ApiConfig) -> Self {
        let api_name = config.api_name().to_string();
        let module_name = module_name(&api_name);

        Self {
            config,
            file_stem: file_stem(&api_name),
            lower_name: lower_identifier(&module_name),
            module_name,
            api_name,
        }
    }

    /// Path of a file under `lib/<stem>/`.
    fn lib_file(&self, name: &str) -> PathBuf {
        Path::new("lib")
            .join(&self.file_stem)
            .join(format!("{}.rb", name))
    }
}

/// A rendered file, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// Paths written by a successful [`Builder::build`], in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub files: Vec<PathBuf>,
}

impl BuildReport {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Generates a Ruby client gem from an [`ApiConfig`].
///
/// ## Examples
///
/// ```
/// use clientsmith_define::ApiConfig;
/// use clientsmith_gen::builder::Builder;
/// use clientsmith_gen::output::MemorySink;
///
/// let config = ApiConfig::new("shop-api");
/// let mut sink = MemorySink::default();
/// let report = Builder::new(&config).build(&mut sink).unwrap();
///
/// assert_eq!(report.len(), sink.files().len());
/// assert!(sink.get("lib/shop_api.rb").is_some());
/// ```
pub struct Builder<'a> {
    ctx: GenerationContext<'a>,
}

impl<'a> Builder<'a> {
    pub fn new(config: &'a ApiConfig) -> Self {
        Self {
            ctx: GenerationContext::new(config),
        }
    }

    pub fn context(&self) -> &GenerationContext<'a> {
        &self.ctx
    }

    /// Renders every file in write order without writing anything.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigurationMissing` when the API name has no
    /// usable characters or a resource or endpoint has an empty name.
    pub fn render(&self) -> Result<Vec<GeneratedFile>, GeneratorError> {
        self.validate()?;

        let ctx = &self.ctx;
        let stem = &ctx.file_stem;
        debug!(
            api = %ctx.api_name,
            module = %ctx.module_name,
            resources = ctx.config.resources.len(),
            "rendering client"
        );

        let mut files = vec![
            GeneratedFile::new(ctx.lib_file("configuration"), configuration::render(ctx)),
            GeneratedFile::new(ctx.lib_file("client"), client::render(ctx)),
            GeneratedFile::new(ctx.lib_file("request"), request::render(ctx)),
            GeneratedFile::new(ctx.lib_file("error"), error::render(ctx)),
            GeneratedFile::new(ctx.lib_file("object"), object::render(ctx)),
            GeneratedFile::new(ctx.lib_file("collection"), collection::render(ctx)),
            GeneratedFile::new(ctx.lib_file("cache"), cache::render(ctx)),
            GeneratedFile::new(ctx.lib_file("version"), version::render(ctx)),
            GeneratedFile::new(
                Path::new("lib").join(format!("{}.rb", stem)),
                main_file::render(ctx),
            ),
        ];

        for (name, spec) in &ctx.config.resources {
            debug!(resource = %name, endpoints = spec.endpoints.len(), "rendering resource");
            files.push(GeneratedFile::new(
                ctx.lib_file(&format!("resources/{}", name)),
                resource::render(ctx, name, spec),
            ));
        }

        files.push(GeneratedFile::new(
            "docs/api.md",
            ApiDocBuilder::new(ctx).build(),
        ));
        files.push(GeneratedFile::new("README.md", readme::render(ctx)));
        files.push(GeneratedFile::new(
            "test/test_helper.rb",
            test_suite::render_helper(ctx),
        ));
        files.push(GeneratedFile::new(
            Path::new("test").join(format!("{}_test.rb", stem)),
            test_suite::render_tests(ctx),
        ));

        Ok(files)
    }

    /// Renders and writes every file through `sink`.
    ///
    /// Stops at the first write failure; files already written stay in place.
    pub fn build(&self, sink: &mut dyn Sink) -> Result<BuildReport, GeneratorError> {
        let mut report = BuildReport::default();

        for file in self.render()? {
            sink.write(&file.path, &file.content)?;
            info!(path = %file.path.display(), "file created");
            report.files.push(file.path);
        }

        Ok(report)
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.ctx.module_name.is_empty() {
            return Err(GeneratorError::ConfigurationMissing(format!(
                "api_name '{}' does not yield a module name",
                self.ctx.api_name
            )));
        }

        for (name, spec) in &self.ctx.config.resources {
            if name.trim().is_empty() {
                return Err(GeneratorError::ConfigurationMissing(
                    "resource name".to_string(),
                ));
            }
            if let Some(index) = spec.endpoints.iter().position(|e| e.name.trim().is_empty()) {
                return Err(GeneratorError::ConfigurationMissing(format!(
                    "name of endpoint #{} in resource '{}'",
                    index + 1,
                    name
                )));
            }
        }

        Ok(())
    }
}
