//! File-level conversion: decode, compose, encode and write atomically.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::c_array::{array_name, write_c_array};
use crate::{convert, loader, CanvasSize, Error, OutputBuffer, Result};

/// Returns `input` with its extension replaced by `.h`.
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("h")
}

/// Returns the input file stem used to name the array.
pub fn array_base_name<P: AsRef<Path>>(input: P) -> String {
    input
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Options for [`convert_file`].
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Destination path. Defaults to the input with a `.h` extension.
    pub output: Option<PathBuf>,
    /// Array base name. Defaults to the input file stem.
    pub name: Option<String>,
    /// Target canvas.
    pub size: CanvasSize,
}

/// Converts the image at `input` and writes the C array, returning the path written.
///
/// The image is fully decoded and encoded before the destination is touched,
/// and the write goes through a temporary file that is renamed into place.
pub fn convert_file<P: AsRef<Path>>(input: P, options: &ConvertOptions) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let base = options
        .name
        .clone()
        .unwrap_or_else(|| array_base_name(input));

    let raster = loader::load(input)?;
    let buffer = convert(&raster, options.size);
    write_atomic(&output, &array_name(&base), &buffer)?;

    info!(
        "Wrote {} ({} bytes, {} canvas)",
        output.display(),
        buffer.len(),
        options.size
    );
    Ok(output)
}

/// Writes the C array for `buffer` to `path`, never leaving a partial file.
///
/// Output goes to a uniquely named temporary file in the destination
/// directory, which is renamed over `path` once fully written. The temporary
/// file is removed on every failure path.
pub fn write_atomic(path: &Path, name: &str, buffer: &OutputBuffer) -> Result<()> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = temp_file_for(path).map_err(write_err)?;
    debug!(tmp = %tmp.path().display(), "Writing to temporary file");

    write_file(tmp.as_file_mut(), name, buffer).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn write_file(file: &mut File, name: &str, buffer: &OutputBuffer) -> io::Result<()> {
    let mut writer = BufWriter::new(&mut *file);
    write_c_array(&mut writer, name, buffer)?;
    writer.flush()?;
    drop(writer);
    file.sync_all()
}

fn temp_file_for(path: &Path) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut prefix = OsString::from(".");
    prefix.push(path.file_name().unwrap_or_default());
    prefix.push(".");
    Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
}
