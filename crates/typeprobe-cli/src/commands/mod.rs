mod check;
mod fields;
mod resolve;

pub use check::handle_check;
pub use fields::handle_fields;
pub use resolve::handle_resolve;

use typeprobe_detect::FieldTypes;
use typeprobe_meta::Schema;

use crate::utils::format_types;

/// Prints one line per field of `class` and every failure as a diagnostic.
/// Returns the number of fields that failed to resolve.
fn report_class(probe: &FieldTypes<&Schema>, class: &str) -> Result<usize, crate::error::CliError> {
    let mut failures = 0;
    for report in probe.resolve_class(class)? {
        match report.types {
            Ok(types) => println!("{class}::{}: {}", report.field, format_types(&types)),
            Err(err) => {
                failures += 1;
                eprintln!("{:?}", miette::Report::new(err));
            }
        }
    }
    Ok(failures)
}
