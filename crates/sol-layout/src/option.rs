//! C-compatible optional fields.
//!
//! Token program accounts store an option as a 4-byte little-endian tag
//! followed by the value's full width, which is zeroed when absent.

use crate::{BufferLayout, LayoutError, Reader};

/// Read a tagged optional value
pub fn read_coption<T: BufferLayout>(
    reader: &mut Reader<'_>,
    field: &'static str,
) -> Result<Option<T>, LayoutError> {
    let tag = u32::read(reader)?;
    let value = T::read(reader)?;
    match tag {
        0 => Ok(None),
        1 => Ok(Some(value)),
        other => Err(LayoutError::InvalidTag { field, value: other }),
    }
}

/// Write a tagged optional value, zero-filling when absent
pub fn write_coption<T: BufferLayout + Default>(value: &Option<T>, out: &mut Vec<u8>) {
    match value {
        Some(v) => {
            1u32.write(out);
            v.write(out);
        }
        None => {
            0u32.write(out);
            T::default().write(out);
        }
    }
}
