//! One command constructor per endpoint.
//!
//! These are the single definition of each call. The facade methods on
//! [`Api`](crate::Api) build the same command and run it, so the three
//! calling conventions cannot drift apart.

use std::collections::HashMap;

use sol_layout::BufferLayout;
use sol_primitives::{Address, Epoch, Lamports, Slot, UnixTimestamp};

use crate::account::{decode_account_value, decode_optional_account_value, AccountInfo};
use crate::command::{Command, NullPolicy, ResponseShape};
use crate::params::Params;
use crate::types::{AccountEncoding, Commitment, EpochInfo, RequestConfiguration};
use crate::SdkError;

/// Leader schedule: validator identity to slot indices within the epoch
pub type LeaderSchedule = HashMap<Address, Vec<u64>>;

fn account_params(account: &Address) -> Params {
    Params::new()
        .arg(account.as_str())
        .config(RequestConfiguration::new().with_encoding(AccountEncoding::Base64))
}

fn commitment_only(commitment: Option<Commitment>) -> Params {
    Params::new().config(RequestConfiguration::new().with_commitment(commitment))
}

/// `getAccountInfo` decoded into `T`. Null policy: strict.
pub fn get_account_info<T: BufferLayout>(account: &Address) -> Command<AccountInfo<T>> {
    Command::new(
        "getAccountInfo",
        account_params(account),
        ResponseShape::Enveloped,
        NullPolicy::Strict,
        decode_account_value::<T>,
    )
}

/// `getAccountInfo` for an address that may not exist yet.
///
/// Null policy: caller-selectable. With `allow_unfunded_recipient` an
/// absent account yields `Ok(None)`; without it, `MissingValue`.
pub fn get_optional_account_info<T: BufferLayout>(
    account: &Address,
    allow_unfunded_recipient: bool,
) -> Command<Option<AccountInfo<T>>> {
    Command::new(
        "getAccountInfo",
        account_params(account),
        ResponseShape::Enveloped,
        NullPolicy::allowing_missing(allow_unfunded_recipient),
        decode_optional_account_value::<T>,
    )
}

fn decode_account_list<T: BufferLayout>(
    value: serde_json::Value,
) -> Result<Vec<Option<AccountInfo<T>>>, SdkError> {
    let items: Vec<serde_json::Value> = serde_json::from_value(value)?;
    items
        .into_iter()
        .map(decode_optional_account_value::<T>)
        .collect()
}

/// `getMultipleAccounts` decoded into `T`, one entry per address.
///
/// Null policy: strict for the envelope; individual missing accounts are
/// `None`.
pub fn get_multiple_accounts<T: BufferLayout>(
    accounts: &[Address],
) -> Command<Vec<Option<AccountInfo<T>>>> {
    let keys: Vec<&str> = accounts.iter().map(Address::as_str).collect();
    Command::new(
        "getMultipleAccounts",
        Params::new()
            .arg(keys)
            .config(RequestConfiguration::new().with_encoding(AccountEncoding::Base64)),
        ResponseShape::Enveloped,
        NullPolicy::Strict,
        decode_account_list::<T>,
    )
}

/// `getBalance`. Null policy: strict.
pub fn get_balance(account: &Address, commitment: Option<Commitment>) -> Command<Lamports> {
    Command::json(
        "getBalance",
        Params::new()
            .arg(account.as_str())
            .config(RequestConfiguration::new().with_commitment(commitment)),
        ResponseShape::Enveloped,
        NullPolicy::Strict,
    )
}

/// `getBlockTime`. Null policy: permissive; a slot without a recorded time
/// yields `Ok(None)`.
pub fn get_block_time(slot: Slot) -> Command<Option<UnixTimestamp>> {
    Command::json(
        "getBlockTime",
        Params::new().arg(slot),
        ResponseShape::Bare,
        NullPolicy::Permissive,
    )
}

/// `getEpochInfo`. Null policy: strict.
pub fn get_epoch_info(commitment: Option<Commitment>) -> Command<EpochInfo> {
    Command::json(
        "getEpochInfo",
        commitment_only(commitment),
        ResponseShape::Bare,
        NullPolicy::Strict,
    )
}

/// `getSlot`. Null policy: strict.
pub fn get_slot(commitment: Option<Commitment>) -> Command<Slot> {
    Command::json(
        "getSlot",
        commitment_only(commitment),
        ResponseShape::Bare,
        NullPolicy::Strict,
    )
}

/// `getSlotLeader`. Null policy: strict.
pub fn get_slot_leader(commitment: Option<Commitment>) -> Command<Address> {
    Command::json(
        "getSlotLeader",
        commitment_only(commitment),
        ResponseShape::Bare,
        NullPolicy::Strict,
    )
}

/// `getConfirmedBlocksWithLimit`. Null policy: strict.
pub fn get_confirmed_blocks_with_limit(start_slot: Slot, limit: u64) -> Command<Vec<Slot>> {
    Command::json(
        "getConfirmedBlocksWithLimit",
        Params::new().arg(start_slot).arg(limit),
        ResponseShape::Bare,
        NullPolicy::Strict,
    )
}

/// `getLeaderSchedule` for `epoch`, or the current epoch when `None`.
///
/// Null policy: permissive; an epoch with no schedule yet yields `Ok(None)`.
pub fn get_leader_schedule(
    epoch: Option<Epoch>,
    commitment: Option<Commitment>,
) -> Command<Option<LeaderSchedule>> {
    Command::json(
        "getLeaderSchedule",
        Params::new()
            .optional(epoch)
            .config(RequestConfiguration::new().with_commitment(commitment)),
        ResponseShape::Bare,
        NullPolicy::Permissive,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_account_info_params() {
        let cmd = get_account_info::<Vec<u8>>(&Address::new("Addr1"));
        assert_eq!(cmd.method(), "getAccountInfo");
        assert_eq!(
            cmd.params().encode().unwrap(),
            vec![json!("Addr1"), json!({"encoding": "base64"})]
        );
    }

    #[test]
    fn test_optional_account_policy_follows_flag() {
        let addr = Address::new("Addr1");
        assert_eq!(
            get_optional_account_info::<Vec<u8>>(&addr, true).policy(),
            NullPolicy::Permissive
        );
        assert_eq!(
            get_optional_account_info::<Vec<u8>>(&addr, false).policy(),
            NullPolicy::Strict
        );
    }

    #[test]
    fn test_epoch_info_without_commitment_has_no_params() {
        assert!(get_epoch_info(None).params().encode().unwrap().is_empty());
    }

    #[test]
    fn test_leader_schedule_params() {
        assert!(get_leader_schedule(None, None).params().encode().unwrap().is_empty());
        assert_eq!(
            get_leader_schedule(None, Some(Commitment::Finalized))
                .params()
                .encode()
                .unwrap(),
            vec![Value::Null, json!({"commitment": "finalized"})]
        );
        assert_eq!(
            get_leader_schedule(Some(12), None).params().encode().unwrap(),
            vec![json!(12)]
        );
    }

    #[test]
    fn test_confirmed_blocks_params() {
        assert_eq!(
            get_confirmed_blocks_with_limit(5, 3).params().encode().unwrap(),
            vec![json!(5), json!(3)]
        );
    }

    #[test]
    fn test_multiple_accounts_decode() {
        let cmd = get_multiple_accounts::<Vec<u8>>(&[Address::new("A"), Address::new("B")]);
        assert_eq!(
            cmd.params().encode().unwrap(),
            vec![json!(["A", "B"]), json!({"encoding": "base64"})]
        );
        let raw = json!({
            "context": {"slot": 3},
            "value": [
                null,
                {"data": ["AQI=", "base64"], "owner": "11111111111111111111111111111111",
                 "lamports": 1, "executable": false, "rentEpoch": 0}
            ]
        });
        let accounts = cmd.resolve(raw).unwrap();
        assert!(accounts[0].is_none());
        assert_eq!(accounts[1].as_ref().unwrap().data, vec![1, 2]);
    }

    #[test]
    fn test_leader_schedule_decode() {
        let raw = json!({"4Qkev8aNZcqFNSRhQzwyLMFSsi94jHqE8WNVTJzTP99F": [0, 1, 2]});
        let schedule = get_leader_schedule(None, None).resolve(raw).unwrap().unwrap();
        assert_eq!(
            schedule[&Address::new("4Qkev8aNZcqFNSRhQzwyLMFSsi94jHqE8WNVTJzTP99F")],
            vec![0, 1, 2]
        );
        assert_eq!(get_leader_schedule(None, None).resolve(Value::Null), Ok(None));
    }
}
