use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, info, warn};

use crate::error::ProtowrapError;
use crate::gen_scala::{render_registry_source, render_wrapper_source};
use crate::scanner::scan_file;
use crate::types::{DeserializerDescriptor, DeserializerRegistry, MessageDescriptor};
use crate::utils::normalize_separators;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the schema tree to discover files under.
    pub schema_dir: PathBuf,
    /// Glob applied beneath `schema_dir`.
    pub pattern: String,
    pub wrapper_out: PathBuf,
    pub registry_out: PathBuf,
    pub wrapper_package: String,
    pub registry_package: String,
    /// Package providing `Optional` / `OptionalStruct` / `optionally`.
    pub support_package: String,
    /// Namespace assumed until a file declares `java_package`.
    pub fallback_package: String,
    /// Packages imported wildcard-style into both artifacts.
    pub import_groups: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            schema_dir:       PathBuf::from("schema/proto"),
            pattern:          "**/*.proto".to_string(),
            wrapper_out:      PathBuf::from("OptionalProtos.scala"),
            registry_out:     PathBuf::from("Deserializers.scala"),
            wrapper_package:  "generated.optionals".to_string(),
            registry_package: "generated.deserializers".to_string(),
            support_package:  "generated.util".to_string(),
            fallback_package: "proto".to_string(),
            import_groups:    Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub files:        usize,
    pub messages:     usize,
    pub wrapper_out:  PathBuf,
    pub registry_out: PathBuf,
}

/// Collects every schema file under `schema_dir` matching `pattern`,
/// sorted by `/`-normalized path so the traversal order does not depend on
/// filesystem iteration order.
pub fn discover_schema_files(schema_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ProtowrapError> {
    let full_pattern = schema_dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    debug!(pattern = %full_pattern, "scanning for schema files");

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in glob(&full_pattern)? {
        paths.push(entry?);
    }
    paths.sort_by_key(|path| normalize_separators(&path.to_string_lossy()));
    Ok(paths)
}

/// Runs the whole pipeline: discover, scan each file in order, accumulate
/// messages and registry entries, render both artifacts, write both files.
/// A scan failure aborts the batch before either output is touched.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport, ProtowrapError> {
    let files = discover_schema_files(&config.schema_dir, &config.pattern)?;
    debug!(count = files.len(), dir = %config.schema_dir.display(), "discovered schema files");

    let mut messages: Vec<MessageDescriptor> = Vec::new();
    let mut registry = DeserializerRegistry::default();

    for path in &files {
        let scan = scan_file(path, &config.fallback_package)?;
        debug!(file = %scan.path, messages = scan.messages.len(), "scanned schema file");

        for message in &scan.messages {
            if let Some(previous) = registry.insert(DeserializerDescriptor::for_message(message)) {
                warn!(
                    key = %previous.key,
                    previous = %previous.full_name,
                    current = %message.full_name,
                    "duplicate message name, keeping the later binding"
                );
            }
        }
        messages.extend(scan.messages);
    }

    let wrapper_source = render_wrapper_source(
        &config.wrapper_package,
        &config.support_package,
        &config.import_groups,
        &messages,
    );
    let registry_source =
        render_registry_source(&config.registry_package, &config.import_groups, registry.entries());

    fs::write(&config.wrapper_out, wrapper_source)?;
    fs::write(&config.registry_out, registry_source)?;

    info!(files = files.len(), messages = messages.len(), "generation complete");

    Ok(GenerateReport {
        files:        files.len(),
        messages:     messages.len(),
        wrapper_out:  config.wrapper_out.clone(),
        registry_out: config.registry_out.clone(),
    })
}
