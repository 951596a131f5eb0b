//! Field type detection for typeprobe.
//!
//! [`TypeDetector`] decides which type tokens describe a field, consulting
//! in priority order the field's native type, a type tag in its
//! documentation and a matching accessor method. [`FieldTypes`] chains
//! detection with [`typeprobe_resolve::TypeNameResolver`] to produce the
//! canonical type list a denormalizer needs.

mod accessor;
mod detector;
mod error;
mod pipeline;
mod tag;

pub use accessor::find_accessor;
pub use detector::{Detection, Strategy, TypeDetector};
pub use error::{DenormalizeError, DetectError};
pub use pipeline::{FieldReport, FieldTypes};
pub use tag::DocTagScanner;
