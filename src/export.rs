use crate::project::{ProjectFile, merge_files};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const ARCHIVE_EXTENSION: &str = "zip";
pub const DEFAULT_PROJECT_NAME: &str = "genify-project";

/// Import page of the hosting provider; an exported archive is uploaded there.
pub const DEPLOY_URL: &str = "https://vercel.com/new";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create ZIP file: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Where exports land unless configured otherwise.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Serialize the files into an in-memory zip archive.
///
/// Names are used as-is. A repeated name keeps the last content.
pub fn build_archive(files: &[ProjectFile]) -> Result<Vec<u8>, ExportError> {
    let mut entries = Vec::with_capacity(files.len());
    merge_files(&mut entries, files.to_vec());

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for file in &entries {
        writer.start_file(file.name(), options)?;
        writer.write_all(file.content().as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Write `{dir}/{project_name}.zip` and return its path.
///
/// The archive is staged in a temporary file and renamed into place, so a
/// failed export leaves no partial file behind.
pub async fn export_zip(
    files: Vec<ProjectFile>,
    dir: &Path,
    project_name: &str,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{project_name}.{ARCHIVE_EXTENSION}"));
    let target = path.clone();

    tokio::task::spawn_blocking(move || -> Result<(), ExportError> {
        let bytes = build_archive(&files)?;
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        // Staged in the target directory; persisting is a plain rename.
        let mut staged = tempfile::NamedTempFile::new_in(parent)?;
        staged.write_all(&bytes)?;
        staged.as_file().sync_all()?;
        staged.persist(&target).map_err(|err| err.error)?;
        Ok(())
    })
    .await??;

    tracing::info!("exported project to {}", path.display());
    Ok(path)
}
