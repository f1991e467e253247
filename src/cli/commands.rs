//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::backend::{ArtifactWriter, GenerationPass, GeneratorConfig, PassOutput};
use crate::frontend::diagnostics::{self, Severity};
use crate::frontend::{self, RawModel};

use super::{CliError, CliResult, ExitCode};

/// Default output directory of `generate`.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Maximum model file size (10 MB).
const MAX_MODEL_SIZE: u64 = 10 * 1024 * 1024;

/// Read and parse a model file.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_MODEL_SIZE`
/// - The file is not a valid model
pub fn read_model(path: &Path) -> CliResult<RawModel> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_MODEL_SIZE {
        return Err(CliError::failure(format!(
            "Model file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_MODEL_SIZE
        )));
    }

    frontend::load_model(path).map_err(|e| CliError::failure(format!("Error: {e}")))
}

/// Print every diagnostic of a pass and a one-line summary.
fn report(output: &PassOutput) {
    for diagnostic in &output.diagnostics {
        diagnostics::print_diagnostic(diagnostic);
    }
    let warnings = output
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    if !output.diagnostics.is_empty() {
        eprintln!(
            "{} class(es) generated, {} failed, {} warning(s)",
            output.units.len(),
            output.failures.len(),
            warnings
        );
    }
}

fn exit_code(output: &PassOutput) -> ExitCode {
    if output.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// `generate`: run a pass and write every unit below `output_dir`.
///
/// Units of successful classes are written even when other classes fail; the exit code reports failure.
pub fn generate(model_path: &Path, output_dir: Option<&Path>, config: GeneratorConfig) -> CliResult<ExitCode> {
    let output_dir = output_dir.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));
    let writer = ArtifactWriter::new(output_dir, config.file_suffix.clone())
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;

    if output_dir.is_absolute() {
        tracing::warn!("Using absolute output path: {}", output_dir.display());
    }

    let model = read_model(model_path)?;
    let output = GenerationPass::new(config).run(&model.classes);
    report(&output);

    let written = writer
        .write_all(&output.units)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;
    for path in &written {
        println!("wrote {}", path.display());
    }

    Ok(exit_code(&output))
}

/// `check`: run a pass and report diagnostics without writing.
pub fn check(model_path: &Path, config: GeneratorConfig) -> CliResult<ExitCode> {
    let model = read_model(model_path)?;
    let output = GenerationPass::new(config).run(&model.classes);
    report(&output);

    if !output.has_failures() {
        println!("✓ {} class(es) OK", output.units.len());
    }
    Ok(exit_code(&output))
}

/// `--emit`: print every generated unit to stdout.
pub fn emit(model_path: &Path, config: GeneratorConfig) -> CliResult<ExitCode> {
    let model = read_model(model_path)?;
    let output = GenerationPass::new(config).run(&model.classes);
    report(&output);

    for unit in &output.units {
        println!("{}", unit.text);
    }
    Ok(exit_code(&output))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_model_missing_file() {
        let err = read_model(Path::new("no/such/model.json")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Cannot access file"));
    }

    #[test]
    fn test_read_model_reports_invalid_json_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("broken_model.json");
        fs::write(&model, "{ not json").unwrap();

        let err = read_model(&model).unwrap_err();
        assert!(err.message.starts_with("Error: invalid model in"));
        assert!(err.message.contains("broken_model.json"));
    }

    #[test]
    fn test_generate_refuses_parent_dir() {
        let err = generate(
            Path::new("model.json"),
            Some(Path::new("../outside")),
            GeneratorConfig::default(),
        )
        .unwrap_err();
        assert!(err.message.contains(".."));
    }

    #[test]
    fn test_generate_writes_units() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.json");
        fs::write(
            &model,
            r#"{ "classes": [{ "namespace": "Demo", "name": "Entity",
                 "fields": [{ "name": "_name", "ty": "String", "annotations": [{ "persisted": { "set_on_insert": true } }] }] }] }"#,
        )
        .unwrap();
        let out = dir.path().join("out");

        let code = generate(&model, Some(&out), GeneratorConfig::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let text = fs::read_to_string(out.join("demo").join("entity_managed_entity.rs")).unwrap();
        assert!(text.contains("map_to_authority_insert"));
    }
}
