use super::Quote;
use crate::engine::BuildStore;
use crate::error::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn export_json<P: AsRef<Path>>(store: &BuildStore, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let quote = Quote::from_store(store);
    let json = serde_json::to_string_pretty(&quote)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
