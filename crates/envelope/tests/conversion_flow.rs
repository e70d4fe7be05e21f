//! End-to-end tests for the outbound and inbound Warp message pipelines.

#![expect(unused_crate_dependencies, reason = "test dependencies")]

use warp_codec::DecodeError;
use warp_envelope::{
    AddressedCall, NetworkId, UnsignedMessage, extract_message,
    extract_payload_from_addressed_call, extract_payload_from_warp_message, new_addressed_call,
    new_unsigned_message, pack_access_list, pack_l1_conversion_message, unpack_access_list,
};
use warp_identifiers::{Buf20, Buf48, ChainId, NodeId, SubnetId, ValidationId};
use warp_msg_types::{
    ConversionData, ConversionValidatorData, L1ValidatorRegistration, L1ValidatorWeight, Message,
    MessageKind, PChainOwner, ValidationPeriod, calculate_conversion_id,
    pack_l1_validator_registration_payload, pack_l1_validator_weight_payload,
    unpack_l1_validator_weight_payload,
};

fn conversion_data(order: &[u8]) -> ConversionData {
    ConversionData {
        subnet_id: SubnetId::from([0x10; 32]),
        validator_manager_blockchain_id: ChainId::from([0x20; 32]),
        validator_manager_address: Buf20::new([0x30; 20]),
        initial_validators: order
            .iter()
            .map(|n| {
                ConversionValidatorData::new(
                    NodeId::from([*n; 20]),
                    Buf48::new([*n; 48]),
                    u64::from(*n) * 100,
                )
            })
            .collect(),
    }
}

fn wrap(network: NetworkId, payload: &[u8]) -> Vec<u8> {
    let call = new_addressed_call(&[], payload).unwrap();
    new_unsigned_message(network, &ChainId::P_CHAIN, &call).unwrap()
}

#[test]
fn test_conversion_outbound_then_inbound() {
    let data = conversion_data(&[5, 1, 3]);
    let packed = pack_l1_conversion_message(NetworkId::FUJI, &ChainId::P_CHAIN, &data).unwrap();

    // The strict unpackers agree with the extractors.
    let unsigned = UnsignedMessage::unpack(&packed).unwrap();
    assert_eq!(unsigned.network_id, NetworkId::FUJI);
    assert_eq!(unsigned.source_chain_id, ChainId::P_CHAIN);
    let call = AddressedCall::unpack(&unsigned.message).unwrap();
    assert!(call.source_address.is_empty());

    let extracted_call = extract_payload_from_warp_message(&packed).unwrap();
    assert_eq!(extracted_call, unsigned.message.as_slice());
    assert_eq!(
        extract_payload_from_addressed_call(extracted_call).unwrap(),
        call.payload.as_slice()
    );

    match extract_message(&packed, MessageKind::SubnetToL1Conversion).unwrap() {
        Message::SubnetToL1Conversion(msg) => {
            assert_eq!(msg.conversion_id, calculate_conversion_id(&data).unwrap());
        }
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn test_conversion_id_independent_of_validator_order() {
    let pack = |order: &[u8]| {
        pack_l1_conversion_message(NetworkId::MAINNET, &ChainId::P_CHAIN, &conversion_data(order))
            .unwrap()
    };
    assert_eq!(pack(&[1, 2, 3]), pack(&[3, 1, 2]));
}

#[test]
fn test_weight_scenario() {
    let payload = pack_l1_validator_weight_payload(ValidationId::default(), 7, 1000).unwrap();
    assert_eq!(payload.len(), 54);
    assert!(payload[6..38].iter().all(|b| *b == 0));
    assert_eq!(payload[38..46], [0, 0, 0, 0, 0, 0, 0, 7]);
    assert_eq!(payload[46..54], [0, 0, 0, 0, 0, 0, 0x03, 0xe8]);

    assert!(matches!(
        unpack_l1_validator_weight_payload(&payload[..53]),
        Err(DecodeError::LengthMismatch { .. })
    ));
    let mut bad_codec = payload.clone();
    bad_codec[1] = 1;
    assert!(matches!(
        unpack_l1_validator_weight_payload(&bad_codec),
        Err(DecodeError::CodecMismatch { .. })
    ));

    let warp = wrap(NetworkId::LOCAL, &payload);
    assert_eq!(
        extract_message(&warp, MessageKind::L1ValidatorWeight).unwrap(),
        Message::L1ValidatorWeight(L1ValidatorWeight::new(ValidationId::default(), 7, 1000))
    );
}

#[test]
fn test_registration_scenario() {
    let id = ValidationId::from([0xab; 32]);
    let mut payload = pack_l1_validator_registration_payload(id, true).unwrap();
    assert_eq!(payload.len(), 39);
    assert_eq!(payload.last(), Some(&0x01));

    payload[38] = 0x02;
    let warp = wrap(NetworkId::FUJI, &payload);
    assert_eq!(
        extract_message(&warp, MessageKind::L1ValidatorRegistration).unwrap(),
        Message::L1ValidatorRegistration(L1ValidatorRegistration::new(id, false))
    );
}

#[test]
fn test_register_validator_roundtrip_through_envelope() {
    let period = ValidationPeriod {
        subnet_id: SubnetId::from([1; 32]),
        node_id: "NodeID-12D2adLM3UKy4Z4giRbReR6gjWsUiMiw".parse().unwrap(),
        bls_public_key: Buf48::new([2; 48]),
        registration_expiry: 1_800_000_000,
        remaining_balance_owner: PChainOwner::new(1, vec![Buf20::new([3; 20])]),
        disable_owner: PChainOwner::unowned(),
        weight: 20,
    };
    let msg = Message::RegisterL1Validator(period.clone());
    let warp = wrap(NetworkId::FUJI, &msg.pack().unwrap());

    assert_eq!(extract_message(&warp, MessageKind::RegisterL1Validator).unwrap(), msg);
    assert_ne!(period.validation_id().unwrap(), ValidationId::default());
}

#[test]
fn test_wrong_kind_is_reported() {
    let payload = pack_l1_validator_weight_payload(ValidationId::default(), 1, 1).unwrap();
    let warp = wrap(NetworkId::FUJI, &payload);
    assert!(matches!(
        extract_message(&warp, MessageKind::ValidationUptime),
        Err(DecodeError::LengthMismatch {
            expected: 46,
            got: 54,
        })
    ));
}

#[test]
fn test_truncated_inputs_never_panic() {
    assert_eq!(
        extract_payload_from_warp_message(&[0u8; 41]),
        Err(DecodeError::TooShort { min: 42, got: 41 })
    );

    let data = conversion_data(&[1]);
    let packed = pack_l1_conversion_message(NetworkId::FUJI, &ChainId::P_CHAIN, &data).unwrap();
    for cut in 0..packed.len() {
        assert!(extract_message(&packed[..cut], MessageKind::SubnetToL1Conversion).is_err());
    }
}

#[test]
fn test_warp_message_as_access_list() {
    let packed =
        pack_l1_conversion_message(NetworkId::FUJI, &ChainId::P_CHAIN, &conversion_data(&[9]))
            .unwrap();
    let keys = pack_access_list(&packed);
    assert_eq!(unpack_access_list(&keys).unwrap(), packed);
}
