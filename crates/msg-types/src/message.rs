//! Kind-tagged union over every payload this crate knows.
//!
//! Type IDs alone cannot identify a payload (`0` is shared), so decoding is
//! always keyed by a caller-supplied [`MessageKind`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;
use warp_codec::{DecodeError, DecodeResult, EncodeResult};

use crate::{
    L1_VALIDATOR_REGISTRATION_LEN, L1_VALIDATOR_REGISTRATION_TYPE_ID, L1_VALIDATOR_WEIGHT_LEN,
    L1_VALIDATOR_WEIGHT_TYPE_ID, L1ValidatorRegistration, L1ValidatorWeight,
    REGISTER_L1_VALIDATOR_TYPE_ID, SUBNET_TO_L1_CONVERSION_LEN, SUBNET_TO_L1_CONVERSION_TYPE_ID,
    SubnetToL1Conversion, VALIDATION_UPTIME_LEN, VALIDATION_UPTIME_TYPE_ID, ValidationPeriod,
    ValidationUptime,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    SubnetToL1Conversion,
    RegisterL1Validator,
    L1ValidatorRegistration,
    L1ValidatorWeight,
    ValidationUptime,
}

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        MessageKind::SubnetToL1Conversion,
        MessageKind::RegisterL1Validator,
        MessageKind::L1ValidatorRegistration,
        MessageKind::L1ValidatorWeight,
        MessageKind::ValidationUptime,
    ];

    pub const fn type_id(self) -> u32 {
        match self {
            MessageKind::SubnetToL1Conversion => SUBNET_TO_L1_CONVERSION_TYPE_ID,
            MessageKind::RegisterL1Validator => REGISTER_L1_VALIDATOR_TYPE_ID,
            MessageKind::L1ValidatorRegistration => L1_VALIDATOR_REGISTRATION_TYPE_ID,
            MessageKind::L1ValidatorWeight => L1_VALIDATOR_WEIGHT_TYPE_ID,
            MessageKind::ValidationUptime => VALIDATION_UPTIME_TYPE_ID,
        }
    }

    /// Packed length, if the kind has a fixed one.
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            MessageKind::SubnetToL1Conversion => Some(SUBNET_TO_L1_CONVERSION_LEN),
            MessageKind::RegisterL1Validator => None,
            MessageKind::L1ValidatorRegistration => Some(L1_VALIDATOR_REGISTRATION_LEN),
            MessageKind::L1ValidatorWeight => Some(L1_VALIDATOR_WEIGHT_LEN),
            MessageKind::ValidationUptime => Some(VALIDATION_UPTIME_LEN),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MessageKind::SubnetToL1Conversion => "subnet_to_l1_conversion",
            MessageKind::RegisterL1Validator => "register_l1_validator",
            MessageKind::L1ValidatorRegistration => "l1_validator_registration",
            MessageKind::L1ValidatorWeight => "l1_validator_weight",
            MessageKind::ValidationUptime => "validation_uptime",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message kind '{0}'")]
pub struct UnknownMessageKind(pub String);

impl FromStr for MessageKind {
    type Err = UnknownMessageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_lowercase();
        MessageKind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| UnknownMessageKind(s.to_owned()))
    }
}

/// A decoded payload of any kind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    SubnetToL1Conversion(SubnetToL1Conversion),
    RegisterL1Validator(ValidationPeriod),
    L1ValidatorRegistration(L1ValidatorRegistration),
    L1ValidatorWeight(L1ValidatorWeight),
    ValidationUptime(ValidationUptime),
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::SubnetToL1Conversion(_) => MessageKind::SubnetToL1Conversion,
            Message::RegisterL1Validator(_) => MessageKind::RegisterL1Validator,
            Message::L1ValidatorRegistration(_) => MessageKind::L1ValidatorRegistration,
            Message::L1ValidatorWeight(_) => MessageKind::L1ValidatorWeight,
            Message::ValidationUptime(_) => MessageKind::ValidationUptime,
        }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        match self {
            Message::SubnetToL1Conversion(m) => m.pack(),
            Message::RegisterL1Validator(m) => m.pack(),
            Message::L1ValidatorRegistration(m) => m.pack(),
            Message::L1ValidatorWeight(m) => m.pack(),
            Message::ValidationUptime(m) => m.pack(),
        }
    }

    /// Unpacks `buf` as a payload of `kind`, with that kind's strict checks.
    pub fn unpack(kind: MessageKind, buf: &[u8]) -> DecodeResult<Self> {
        Ok(match kind {
            MessageKind::SubnetToL1Conversion => {
                Message::SubnetToL1Conversion(SubnetToL1Conversion::unpack(buf)?)
            }
            MessageKind::RegisterL1Validator => {
                Message::RegisterL1Validator(ValidationPeriod::unpack(buf)?)
            }
            MessageKind::L1ValidatorRegistration => {
                Message::L1ValidatorRegistration(L1ValidatorRegistration::unpack(buf)?)
            }
            MessageKind::L1ValidatorWeight => {
                Message::L1ValidatorWeight(L1ValidatorWeight::unpack(buf)?)
            }
            MessageKind::ValidationUptime => {
                Message::ValidationUptime(ValidationUptime::unpack(buf)?)
            }
        })
    }

    /// Tries each candidate kind in order and returns the first that decodes.
    ///
    /// Returns [`DecodeError::NotFound`] when none do.
    pub fn probe(buf: &[u8], candidates: &[MessageKind]) -> DecodeResult<Self> {
        for &kind in candidates {
            match Self::unpack(kind, buf) {
                Ok(msg) => return Ok(msg),
                Err(err) => trace!(%kind, len = buf.len(), %err, "probe rejected kind"),
            }
        }
        Err(DecodeError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use warp_identifiers::{ConversionId, ValidationId};

    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "l1-validator-weight".parse::<MessageKind>().unwrap(),
            MessageKind::L1ValidatorWeight
        );
        assert_eq!(
            "validation_uptime".parse::<MessageKind>().unwrap(),
            MessageKind::ValidationUptime
        );
        assert!("uptime".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_kind_lengths_match_packed_payloads() {
        let id = ValidationId::from([1; 32]);
        let msgs = [
            Message::SubnetToL1Conversion(SubnetToL1Conversion::new(ConversionId::from([1; 32]))),
            Message::L1ValidatorRegistration(L1ValidatorRegistration::new(id, false)),
            Message::L1ValidatorWeight(L1ValidatorWeight::new(id, 1, 2)),
            Message::ValidationUptime(ValidationUptime::new(id, 3)),
        ];
        for msg in msgs {
            let buf = msg.pack().unwrap();
            assert_eq!(Some(buf.len()), msg.kind().fixed_len());
            assert_eq!(u32::from_be_bytes([buf[2], buf[3], buf[4], buf[5]]), msg.kind().type_id());
        }
    }

    #[test]
    fn test_probe_picks_matching_kind() {
        let msg = Message::ValidationUptime(ValidationUptime::new(ValidationId::from([7; 32]), 99));
        let buf = msg.pack().unwrap();

        // The conversion kind shares type id 0 but fails on length.
        let got = Message::probe(
            &buf,
            &[MessageKind::SubnetToL1Conversion, MessageKind::ValidationUptime],
        )
        .unwrap();
        assert_eq!(got, msg);
    }

    #[test]
    fn test_probe_not_found() {
        assert_eq!(
            Message::probe(&[0u8; 5], &MessageKind::ALL),
            Err(DecodeError::NotFound)
        );
    }

    #[test]
    fn test_json_is_kind_tagged() {
        let msg = Message::L1ValidatorWeight(L1ValidatorWeight::new(ValidationId::default(), 7, 1000));
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["kind"], "l1_validator_weight");
        assert_eq!(json["nonce"], 7);
        assert_eq!(json["weight"], 1000);

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }
}
