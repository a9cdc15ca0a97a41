//! Docker Engine API wire format and its translation into `dusage_domain`.

pub mod decode;
pub mod sentinel;
pub mod v1_45;

pub use decode::{decode, DecodeError, FieldPath, Normalize};
