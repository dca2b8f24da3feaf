use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::domain::OutputType;
use crate::output::pdf;

/// Path `<name>.<ext>` for the given output type.
pub fn output_path(name: impl AsRef<Path>, output_type: OutputType) -> PathBuf {
    let name = name.as_ref();
    let mut file_name = name.as_os_str().to_os_string();
    file_name.push(".");
    file_name.push(output_type.extension());
    PathBuf::from(file_name)
}

/// Writes `contents` to `<name>.<ext>`, creating missing parent directories.
///
/// PDF contents are laid out as pages; every other type is written as is.
pub async fn write_output(
    name: impl AsRef<Path>,
    contents: &str,
    output_type: OutputType,
) -> Result<PathBuf> {
    let path = output_path(name, output_type);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = match output_type {
        OutputType::Pdf => {
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            pdf::render_pdf(&title, contents)?
        }
        _ => contents.as_bytes().to_vec(),
    };
    tokio::fs::write(&path, &bytes).await?;

    tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
