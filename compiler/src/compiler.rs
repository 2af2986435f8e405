use crate::{
    config::GeneratorConfig,
    error::GenError,
    gen_haskell::{generate_enum, generate_message},
    utils::module_segments,
};
use jsonpb_haskell_schema::SchemaFile;
use tracing::{debug, info, warn};

/// Module prefix of the record and `_Fields` modules proto-lens generates.
pub const COMPANION_PREFIX: &str = "Proto";

/// One generated artifact, destined for the plugin response.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub name:    String,
    pub content: String,
}

/// Generates one Haskell module per requested file.
/// Returns `Err(GenError::NoFilesToGenerate)` if nothing was requested.
pub fn generate(requested: &[String], files: &[SchemaFile], config: &GeneratorConfig) -> Result<Vec<GeneratedFile>, GenError> {
    if requested.is_empty() {
        return Err(GenError::NoFilesToGenerate);
    }

    let generated = select_files(requested, files)
        .into_iter()
        .map(|file| compile_file(file, config))
        .collect::<Result<Vec<_>, _>>()?;

    info!(requested = requested.len(), generated = generated.len(), "generation complete");
    Ok(generated)
}

/// Picks the files explicitly requested, in request order. `files` also
/// holds everything they import, which is not generated.
pub fn select_files<'a>(requested: &[String], files: &'a [SchemaFile]) -> Vec<&'a SchemaFile> {
    requested
        .iter()
        .filter_map(|name| {
            let found = files.iter().find(|f| &f.path == name);
            if found.is_none() {
                warn!(file = %name, "requested file not present in the schema set");
            }
            found
        })
        .collect()
}

/// Haskell module name for a proto path: `foo/bar_baz.proto` => `Foo.BarBaz`.
pub fn module_name(path: &str) -> String {
    module_segments(path).join(".")
}

/// Response path for a proto path: `foo/bar_baz.proto` => `Proto/Foo/BarBaz_JSON.hs`.
pub fn output_path(path: &str, config: &GeneratorConfig) -> String {
    let stem = module_segments(path).join("/");
    let dir = config.output_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{}{}.{}", stem, config.file_suffix, config.extension)
    } else {
        format!("{}/{}{}.{}", dir, stem, config.file_suffix, config.extension)
    }
}

/// Compiles a single schema file into its `_JSON` module.
pub fn compile_file(file: &SchemaFile, config: &GeneratorConfig) -> Result<GeneratedFile, GenError> {
    debug!(file = %file.path, package = %file.package, "compiling file");

    let mut out: Vec<String> = Vec::new();
    write_header(&mut out, file, config);

    for message in &file.messages {
        generate_message(&mut out, message, None)?;
    }
    for e in &file.enums {
        generate_enum(&mut out, e, None);
    }

    let mut content = out.join("\n");
    content.push('\n');

    Ok(GeneratedFile {
        name: output_path(&file.path, config),
        content,
    })
}

fn write_header(out: &mut Vec<String>, file: &SchemaFile, config: &GeneratorConfig) {
    let prefix = config.module_prefix();
    let module = if prefix.is_empty() {
        module_name(&file.path)
    } else {
        format!("{}.{}", prefix, module_name(&file.path))
    };

    out.push(format!(
        "-- Code generated by protoc-gen-jsonpb_haskell {}, DO NOT EDIT.",
        config.version
    ));
    out.push("{-# LANGUAGE OverloadedStrings #-}".to_string());
    out.push("{-# OPTIONS_GHC -Wno-orphans -Wno-unused-imports -Wno-missing-export-lists #-}".to_string());
    out.push(format!("module {}{} where", module, config.file_suffix));
    out.push(String::new());

    out.push("import           Prelude(($), (.), (<$>), pure, show, Maybe(..))".to_string());
    out.push(String::new());

    out.push("import           Data.ProtoLens.Runtime.Lens.Family2 ((^.), (.~), (&))".to_string());
    out.push("import           Data.Monoid (mconcat)".to_string());
    out.push("import           Control.Monad (msum)".to_string());
    out.push("import           Data.ProtoLens (defMessage)".to_string());
    out.push("import qualified Data.Aeson as A".to_string());
    out.push("import qualified Data.Aeson.Encoding as E".to_string());
    out.push("import           Data.ProtoLens.JSONPB as JSONPB".to_string());
    out.push("import qualified Data.Text as T".to_string());
    out.push(String::new());

    // proto-lens always places its modules under `Proto`, wherever ours go.
    let companion = format!("{}.{}", COMPANION_PREFIX, module_name(&file.path));
    out.push(format!("import           {} as P", companion));
    out.push(format!("import           {}_Fields as P", companion));
}
