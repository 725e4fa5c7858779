use super::Quote;
use crate::engine::BuildStore;
use crate::error::ExportError;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(store: &BuildStore, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let quote = Quote::from_store(store);
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Category", "Id", "Name", "Unit Price", "Quantity", "Line Total"])?;

    for line in &quote.lines {
        writer.write_record([
            &line.category,
            &line.id,
            &line.name,
            &line.unit_price.to_string(),
            &line.quantity.to_string(),
            &line.line_total.to_string(),
        ])?;
    }

    let total = quote.total_price.to_string();
    writer.write_record(["Total", "", "", "", "", total.as_str()])?;

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
