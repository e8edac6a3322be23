//! Positional parameter encoding

use serde_json::Value;

use crate::types::{Commitment, RequestConfiguration};
use crate::SdkError;

#[derive(Debug, Clone, PartialEq)]
enum Arg {
    Present(Value),
    Absent,
}

/// Ordered call arguments, encoded to the JSON array the node expects.
///
/// Rules:
/// - an absent optional argument becomes `null` when anything follows it,
///   so positional args keep their index;
/// - trailing absent optionals are dropped;
/// - the configuration object goes last, and only if at least one of its
///   fields is set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params {
    args: Vec<Arg>,
    config: Option<RequestConfiguration>,
}

impl Params {
    /// No arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(Arg::Present(value.into()));
        self
    }

    /// Append an optional argument
    pub fn optional<V: Into<Value>>(mut self, value: Option<V>) -> Self {
        self.args.push(match value {
            Some(v) => Arg::Present(v.into()),
            None => Arg::Absent,
        });
        self
    }

    /// Set the trailing configuration object
    pub fn config(mut self, config: RequestConfiguration) -> Self {
        self.config = Some(config);
        self
    }

    /// The configuration object, if this call takes one
    pub fn configuration(&self) -> Option<&RequestConfiguration> {
        self.config.as_ref()
    }

    /// Encode without client defaults
    pub fn encode(&self) -> Result<Vec<Value>, SdkError> {
        self.encode_with(None)
    }

    /// Encode, filling an unset commitment from `default_commitment`.
    ///
    /// The default only applies to calls that take a configuration object.
    pub fn encode_with(
        &self,
        default_commitment: Option<Commitment>,
    ) -> Result<Vec<Value>, SdkError> {
        let config = self.config.map(|mut config| {
            if config.commitment.is_none() {
                config.commitment = default_commitment;
            }
            config
        });
        let config = match config {
            Some(config) if !config.is_empty() => Some(serde_json::to_value(config)?),
            _ => None,
        };

        let keep = if config.is_some() {
            self.args.len()
        } else {
            self.args
                .iter()
                .rposition(|arg| matches!(arg, Arg::Present(_)))
                .map_or(0, |i| i + 1)
        };

        let mut out: Vec<Value> = self.args[..keep]
            .iter()
            .map(|arg| match arg {
                Arg::Present(v) => v.clone(),
                Arg::Absent => Value::Null,
            })
            .collect();
        out.extend(config);
        Ok(out)
    }
}
