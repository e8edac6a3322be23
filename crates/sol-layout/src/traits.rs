//! The decode capability and its primitive implementations

use sol_primitives::Pubkey;

use crate::{LayoutError, Reader};

/// A value with a fixed little-endian binary layout.
///
/// `decode` tolerates trailing bytes, since accounts are often allocated
/// larger than the structure stored in them.
pub trait BufferLayout: Sized {
    /// Read one value from the cursor
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError>;

    /// Append the binary form to `out`
    fn write(&self, out: &mut Vec<u8>);

    /// Decode a value from the start of `bytes`
    fn decode(bytes: &[u8]) -> Result<Self, LayoutError> {
        Self::read(&mut Reader::new(bytes))
    }

    /// Encode into a fresh buffer
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write(&mut out);
        out
    }
}

macro_rules! impl_int_layout {
    ($($ty:ty),*) => {
        $(
            impl BufferLayout for $ty {
                fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
                    Ok(<$ty>::from_le_bytes(reader.read_array()?))
                }

                fn write(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_int_layout!(u8, u16, u32, u64, u128, i8, i16, i32, i64);

impl BufferLayout for bool {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        match u8::read(reader)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(LayoutError::InvalidBool(other)),
        }
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
}

impl<const N: usize> BufferLayout for [u8; N] {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        reader.read_array()
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl BufferLayout for Pubkey {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        Ok(Pubkey::from_bytes(reader.read_array()?))
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

/// Raw account data: consumes every remaining byte.
impl BufferLayout for Vec<u8> {
    fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
        Ok(reader.read_rest().to_vec())
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}
