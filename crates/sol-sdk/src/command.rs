//! Reified RPC calls.
//!
//! A [`Command`] describes one call: method, arguments, response shape,
//! null policy and the decoder for the success type. It holds no connection
//! state and can be executed any number of times against any [`Api`].
//!
//! Commands are built only by [`templates`](crate::templates), so the
//! success type of each method is fixed where the method is named.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::Api;
use crate::bridge::bridge;
use crate::params::Params;
use crate::types::Rpc;
use crate::SdkError;

/// How the node wraps the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The result is the value itself
    Bare,
    /// The result is a `{context, value}` envelope
    Enveloped,
}

/// What an absent value means for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Absent value is a [`SdkError::MissingValue`] failure
    #[default]
    Strict,
    /// Absent value is handed to the decoder as JSON `null`
    Permissive,
}

impl NullPolicy {
    /// `Permissive` when `allow_missing`, otherwise `Strict`
    pub fn allowing_missing(allow_missing: bool) -> Self {
        if allow_missing {
            NullPolicy::Permissive
        } else {
            NullPolicy::Strict
        }
    }
}

/// Decoder from the unwrapped JSON value to the success type
pub(crate) type DecodeFn<T> = fn(Value) -> Result<T, SdkError>;

/// Immutable description of one RPC call.
///
/// Obtained from [`templates`](crate::templates); there is no public
/// constructor that could pair a method with the wrong success type.
///
/// ```compile_fail
/// use sol_sdk::{Command, NullPolicy, Params, ResponseShape};
///
/// let _ = Command::<String>::json(
///     "getBalance",
///     Params::new(),
///     ResponseShape::Enveloped,
///     NullPolicy::Strict,
/// );
/// ```
pub struct Command<T> {
    method: &'static str,
    params: Params,
    shape: ResponseShape,
    policy: NullPolicy,
    decode: DecodeFn<T>,
}

impl<T> Clone for Command<T> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            params: self.params.clone(),
            shape: self.shape,
            policy: self.policy,
            decode: self.decode,
        }
    }
}

impl<T> std::fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("method", &self.method)
            .field("params", &self.params)
            .field("shape", &self.shape)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T> Command<T> {
    /// Describe a call with an explicit decoder
    pub(crate) fn new(
        method: &'static str,
        params: Params,
        shape: ResponseShape,
        policy: NullPolicy,
        decode: DecodeFn<T>,
    ) -> Self {
        Self {
            method,
            params,
            shape,
            policy,
            decode,
        }
    }

    /// RPC method name
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Call arguments
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Response shape
    pub fn shape(&self) -> ResponseShape {
        self.shape
    }

    /// Null policy
    pub fn policy(&self) -> NullPolicy {
        self.policy
    }

    /// Turn a raw transport result into the success value
    pub fn resolve(&self, raw: Value) -> Result<T, SdkError> {
        let value = match self.shape {
            ResponseShape::Bare => Some(raw).filter(|v| !v.is_null()),
            ResponseShape::Enveloped => {
                let rpc: Rpc<Value> = serde_json::from_value(raw)?;
                rpc.value.filter(|v| !v.is_null())
            }
        };
        match (value, self.policy) {
            (Some(value), _) => (self.decode)(value),
            (None, NullPolicy::Permissive) => (self.decode)(Value::Null),
            (None, NullPolicy::Strict) => Err(SdkError::MissingValue {
                method: self.method,
            }),
        }
    }
}

impl<T: DeserializeOwned> Command<T> {
    /// Call decoded with serde
    pub(crate) fn json(
        method: &'static str,
        params: Params,
        shape: ResponseShape,
        policy: NullPolicy,
    ) -> Self {
        Self::new(method, params, shape, policy, decode_json::<T>)
    }
}

impl<T: Send + 'static> Command<T> {
    /// Run against `api`, reporting through `on_complete`
    pub fn perform<F>(&self, api: &Api, on_complete: F)
    where
        F: FnOnce(Result<T, SdkError>) + Send + 'static,
    {
        api.perform(self, on_complete);
    }

    /// Run against `api` and wait for the result
    pub async fn execute(&self, api: &Api) -> Result<T, SdkError> {
        bridge(|completion| self.perform(api, completion.into_callback())).await
    }
}

/// Serde decoder usable as a [`DecodeFn`]
pub(crate) fn decode_json<T: DeserializeOwned>(value: Value) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn balance() -> Command<u64> {
        Command::json("getBalance", Params::new(), ResponseShape::Enveloped, NullPolicy::Strict)
    }

    fn block_time() -> Command<Option<i64>> {
        Command::json("getBlockTime", Params::new(), ResponseShape::Bare, NullPolicy::Permissive)
    }

    #[test]
    fn test_enveloped_value() {
        let raw = json!({"context": {"slot": 1}, "value": 5000});
        assert_eq!(balance().resolve(raw), Ok(5000));
    }

    #[test]
    fn test_strict_null_is_missing_value() {
        let raw = json!({"context": {"slot": 100}, "value": null});
        assert_eq!(
            balance().resolve(raw),
            Err(SdkError::MissingValue { method: "getBalance" })
        );
    }

    #[test]
    fn test_strict_absent_value_field_is_missing_value() {
        let raw = json!({"context": {"slot": 100}});
        assert!(balance().resolve(raw).unwrap_err().is_missing_value());
    }

    #[test]
    fn test_permissive_null_passes_through() {
        assert_eq!(block_time().resolve(Value::Null), Ok(None));
        assert_eq!(block_time().resolve(json!(1_700_000_000)), Ok(Some(1_700_000_000)));
    }

    #[test]
    fn test_strict_bare_null() {
        let slot: Command<u64> =
            Command::json("getSlot", Params::new(), ResponseShape::Bare, NullPolicy::Strict);
        assert_eq!(
            slot.resolve(Value::Null),
            Err(SdkError::MissingValue { method: "getSlot" })
        );
    }

    #[test]
    fn test_envelope_missing_context() {
        let err = balance().resolve(json!(5000)).unwrap_err();
        assert!(matches!(err, SdkError::Serialization(_)));
    }

    #[test]
    fn test_wrong_value_type() {
        let raw = json!({"context": {"slot": 1}, "value": "lots"});
        assert!(matches!(balance().resolve(raw), Err(SdkError::Serialization(_))));
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(NullPolicy::allowing_missing(true), NullPolicy::Permissive);
        assert_eq!(NullPolicy::allowing_missing(false), NullPolicy::Strict);
        assert_eq!(NullPolicy::default(), NullPolicy::Strict);
    }
}
