//! Writing generated files to disk.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use protoevents_schema::parse_schema_file;

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::generator::Generator;

/// Extension stripped from schema file names.
pub const SCHEMA_EXTENSION: &str = "proto";

/// Suffix of generated file names.
pub const GENERATED_SUFFIX: &str = ".gen.go";

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path of the written file.
    pub output: PathBuf,
    /// Number of events emitted.
    pub events: usize,
    /// Whether the formatter ran successfully.
    pub formatted: bool,
}

/// Derives the generated file path from a schema path.
///
/// The file stays in the schema's directory. A trailing `.proto` is replaced
/// by `.gen.go`; any other file name gets `.gen.go` appended. Directory
/// components are never rewritten.
///
/// ```
/// use std::path::Path;
/// use protoevents_codegen::output_path;
///
/// assert_eq!(
///     output_path(Path::new("pkg/api/events/events.proto")),
///     Path::new("pkg/api/events/events.gen.go"),
/// );
/// ```
#[must_use]
pub fn output_path(schema: &Path) -> PathBuf {
    let base = if schema.extension() == Some(OsStr::new(SCHEMA_EXTENSION)) {
        schema.file_stem()
    } else {
        schema.file_name()
    };
    let mut generated = base.unwrap_or_default().to_os_string();
    generated.push(GENERATED_SUFFIX);
    schema.with_file_name(generated)
}

/// Writes `contents` to `path`, replacing it atomically.
///
/// Content goes to a temporary file in the target directory which is then
/// renamed over `path`, so a failed write never leaves a truncated file.
/// An existing file keeps its permissions; a new one gets the mode a plain
/// create would give it under the process umask.
///
/// # Errors
/// Returns `CodegenError::Io` if the temporary file cannot be created or
/// written and `CodegenError::Persist` if the rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".protoevents").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        // Requested at open(2), so the umask still applies
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    if let Ok(meta) = fs::metadata(path) {
        file.as_file().set_permissions(meta.permissions())?;
    }

    file.persist(path)?;
    Ok(())
}

/// Generates the Go file for a schema file.
///
/// Scans `schema`, renders the Go source, writes it to `output` (or the
/// path derived by [`output_path`]) and runs the configured formatter. A
/// formatter failure is logged and reported through
/// [`GenerateReport::formatted`], never returned as an error.
///
/// # Errors
/// Returns `CodegenError` if reading, scanning, rendering or writing fails.
/// Nothing is written when reading, scanning or rendering fails.
pub fn generate_file(
    schema: &Path,
    output: Option<&Path>,
    config: &CodegenConfig,
) -> Result<GenerateReport, CodegenError> {
    let events = parse_schema_file(schema)?;
    tracing::debug!(
        "Found {} message declarations in {}",
        events.len(),
        schema.display()
    );

    let contents = Generator::new(&events, config).generate()?;
    let output = output.map_or_else(|| output_path(schema), Path::to_path_buf);

    write_atomic(&output, &contents)?;
    tracing::debug!("Wrote {} bytes to {}", contents.len(), output.display());

    let formatted = match &config.formatter {
        Some(formatter) => match formatter.run(&output) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Leaving {} unformatted: {}", output.display(), e);
                false
            }
        },
        None => false,
    };

    tracing::info!("Generated {} events into {}", events.len(), output.display());

    Ok(GenerateReport {
        output,
        events: events.len(),
        formatted,
    })
}
