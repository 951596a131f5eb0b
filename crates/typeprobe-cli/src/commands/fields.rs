use std::path::Path;

use typeprobe_detect::FieldTypes;
use typeprobe_meta::{name, MetadataProvider};

use crate::commands::report_class;
use crate::error::CliError;
use crate::utils::{format_types, load_config, load_schema};

pub fn handle_fields(
    schema_path: &Path,
    class: &str,
    field: Option<&str>,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let schema = load_schema(schema_path)?;
    let config = load_config(schema_path, config_path)?;
    let probe = FieldTypes::new(&schema, &config)?;
    let class = name::canonical(class);

    match field {
        Some(field_name) => {
            let descriptor = schema
                .class(&class)
                .and_then(|c| c.field(field_name))
                .ok_or_else(|| CliError::UnknownField {
                    class: class.clone(),
                    field: field_name.to_string(),
                })?;
            let types = probe.resolve_field(descriptor)?;
            println!("{class}::{field_name}: {}", format_types(&types));
            Ok(())
        }
        None => match report_class(&probe, &class)? {
            0 => Ok(()),
            count => Err(CliError::UnresolvedFields { count }),
        },
    }
}
