//! Template filling: load the jumpers workbook, write item rows, serialize.

use std::io::Cursor;
use std::path::PathBuf;

use umya_spreadsheet::{Cell, Spreadsheet};

use excelgen_core::{ServiceError, ServiceResult};
use excelgen_inventory::{FieldValue, Item};

/// First worksheet row that receives item data (row 1 is the template header).
pub const FIRST_DATA_ROW: u32 = 2;

/// Fills the fixed jumpers template with item rows.
///
/// Column layout is a contract with the template file: columns 1..=4 hold
/// `id`, `name`, `location` and `status`.
#[derive(Debug, Clone)]
pub struct TemplateFiller {
    template_path: PathBuf,
}

impl TemplateFiller {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    /// Whether the template file is present on disk.
    pub fn template_exists(&self) -> std::io::Result<bool> {
        self.template_path.try_exists()
    }

    /// Write `items` into the template and return the serialized workbook.
    ///
    /// Items land on the active sheet in order, one per row, starting at
    /// [`FIRST_DATA_ROW`].
    pub fn fill(&self, items: &[Item]) -> ServiceResult<Vec<u8>> {
        if items.is_empty() {
            return Err(ServiceError::validation("items must be a non-empty list"));
        }

        let mut book = self.load_template()?;
        let sheet = book.get_active_sheet_mut();

        for (idx, item) in items.iter().enumerate() {
            let row = FIRST_DATA_ROW + idx as u32;
            for (col, value) in item.columns().into_iter().enumerate() {
                write_cell(sheet.get_cell_mut((col as u32 + 1, row)), value);
            }
        }

        let bytes = serialize(&book)?;
        if bytes.is_empty() {
            return Err(ServiceError::internal("Generated file is empty"));
        }

        tracing::info!(rows = items.len(), size = bytes.len(), "filled jumpers template");

        Ok(bytes)
    }

    fn load_template(&self) -> ServiceResult<Spreadsheet> {
        match self.template_exists() {
            Ok(true) => {}
            Ok(false) => {
                return Err(ServiceError::configuration(format!(
                    "Template not found: {}",
                    self.template_path.display()
                )));
            }
            Err(e) => {
                return Err(ServiceError::internal(format!(
                    "failed to probe template {}: {e}",
                    self.template_path.display()
                )));
            }
        }

        umya_spreadsheet::reader::xlsx::read(&self.template_path).map_err(|e| {
            ServiceError::internal(format!(
                "failed to load template {}: {e}",
                self.template_path.display()
            ))
        })
    }
}

/// Missing fields are written as empty strings; explicit `null` leaves the
/// template cell as it was.
fn write_cell(cell: &mut Cell, value: Option<&FieldValue>) {
    match value {
        None => {
            cell.set_value_string("");
        }
        Some(FieldValue::Null) => {}
        Some(FieldValue::Text(s)) => {
            cell.set_value_string(s.as_str());
        }
        Some(FieldValue::Number(n)) => {
            cell.set_value_number(*n);
        }
        Some(FieldValue::Bool(b)) => {
            cell.set_value_bool(*b);
        }
    }
}

fn serialize(book: &Spreadsheet) -> ServiceResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(book, &mut out)
        .map_err(|e| ServiceError::internal(format!("failed to serialize workbook: {e}")))?;
    Ok(out.into_inner())
}
