use std::path::Path;

use typeprobe_detect::FieldTypes;

use crate::commands::report_class;
use crate::error::CliError;
use crate::utils::{load_config, load_schema};

/// Resolves every field of every class in the schema.
pub fn handle_check(schema_path: &Path, config_path: Option<&Path>) -> Result<(), CliError> {
    let schema = load_schema(schema_path)?;
    let config = load_config(schema_path, config_path)?;
    let probe = FieldTypes::new(&schema, &config)?;

    let mut failures = 0;
    let mut fields = 0;
    for class in schema.classes().filter(|c| !c.fields.is_empty()) {
        fields += class.fields.len();
        failures += report_class(&probe, &class.name)?;
    }

    if failures > 0 {
        return Err(CliError::UnresolvedFields { count: failures });
    }
    println!("Checked {fields} fields in {}: all resolved.", schema_path.display());
    Ok(())
}
