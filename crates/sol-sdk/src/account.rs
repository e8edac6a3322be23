//! Generic account decoding

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::Value;
use sol_layout::BufferLayout;
use sol_primitives::{Address, Epoch, Lamports, Pubkey};

use crate::types::AccountEncoding;
use crate::{DecodeError, SdkError};

/// Account as returned on the wire, data still encoded
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccount {
    /// `[payload, encoding]`, or another shape for non-base64 encodings
    pub data: Value,
    /// Owning program
    pub owner: Address,
    /// Balance
    pub lamports: Lamports,
    /// Whether the account holds a program
    pub executable: bool,
    /// Next epoch rent is due
    pub rent_epoch: Epoch,
}

/// Account with its data decoded into `T`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo<T> {
    /// Balance
    pub lamports: Lamports,
    /// Owning program
    pub owner: Address,
    /// Whether the account holds a program
    pub executable: bool,
    /// Next epoch rent is due
    pub rent_epoch: Epoch,
    /// Decoded account data
    pub data: T,
}

impl<T> AccountInfo<T> {
    /// Whether `program` owns this account
    pub fn is_owned_by(&self, program: &Pubkey) -> bool {
        self.owner.to_pubkey().map_or(false, |owner| owner == *program)
    }

    /// Replace the payload, keeping the account fields
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AccountInfo<U> {
        AccountInfo {
            lamports: self.lamports,
            owner: self.owner,
            executable: self.executable,
            rent_epoch: self.rent_epoch,
            data: f(self.data),
        }
    }
}

/// Decode a raw account's data into `T`.
///
/// Only `[payload, "base64"]` data is accepted; every other encoding is
/// rejected without looking at the payload.
pub fn decode_account<T: BufferLayout>(raw: RawAccount) -> Result<AccountInfo<T>, DecodeError> {
    let bytes = account_bytes(&raw.data)?;
    let data = T::decode(&bytes).map_err(|source| DecodeError::Malformed {
        type_name: std::any::type_name::<T>(),
        source,
    })?;
    Ok(AccountInfo {
        lamports: raw.lamports,
        owner: raw.owner,
        executable: raw.executable,
        rent_epoch: raw.rent_epoch,
        data,
    })
}

/// Parse the JSON form of an account and decode it
pub fn decode_account_value<T: BufferLayout>(value: Value) -> Result<AccountInfo<T>, SdkError> {
    let raw: RawAccount = serde_json::from_value(value)?;
    decode_account(raw).map_err(|e| {
        tracing::warn!(error = %e, "account data rejected");
        SdkError::from(e)
    })
}

/// Like [`decode_account_value`], mapping JSON `null` to `None`
pub fn decode_optional_account_value<T: BufferLayout>(
    value: Value,
) -> Result<Option<AccountInfo<T>>, SdkError> {
    if value.is_null() {
        return Ok(None);
    }
    decode_account_value(value).map(Some)
}

fn account_bytes(data: &Value) -> Result<Vec<u8>, DecodeError> {
    let expected = AccountEncoding::Base64.as_str();
    match data {
        Value::Array(items) => match items.as_slice() {
            [Value::String(payload), Value::String(encoding)] => {
                if encoding != expected {
                    return Err(DecodeError::UnsupportedEncoding(encoding.clone()));
                }
                Ok(STANDARD.decode(payload)?)
            }
            _ => Err(DecodeError::InvalidShape(format!(
                "expected [payload, encoding], got {} elements",
                items.len()
            ))),
        },
        // Legacy binary form is a bare base58 string
        Value::String(_) => Err(DecodeError::UnsupportedEncoding(
            AccountEncoding::Base58.as_str().to_string(),
        )),
        Value::Object(_) => Err(DecodeError::UnsupportedEncoding(
            AccountEncoding::JsonParsed.as_str().to_string(),
        )),
        other => Err(DecodeError::InvalidShape(other.to_string())),
    }
}
