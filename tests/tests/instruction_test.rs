use layout_codec::{
    formatter::format_instruction,
    programs::{counter_program, favorites_program, SYSTEM_PROGRAM_ID},
    snapshot::instruction_snapshot,
    CodecError, FieldValue,
};
use layout_codec_tests::test_address;
use serde_json::json;

#[test]
fn test_create_encodes_to_single_discriminator_byte() {
    let program = counter_program().unwrap();
    let create = program.instruction("Create").unwrap();

    let ix = create
        .build_instruction(
            program.id(),
            &[("payer", test_address(1)), ("counter", test_address(2))],
            &[],
        )
        .unwrap();

    assert_eq!(ix.data, vec![0]);
    assert_eq!(ix.program_id, *program.id());
    assert_eq!(ix.accounts.len(), 3);
    assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
    assert!(ix.accounts[1].is_signer && ix.accounts[1].is_writable);
}

#[test]
fn test_increase_encodes_to_one() {
    let program = counter_program().unwrap();
    let ix = program
        .instruction("Increase")
        .unwrap()
        .build_instruction(program.id(), &[("counter", test_address(2))], &[])
        .unwrap();
    assert_eq!(ix.data, vec![1]);
}

#[test]
fn test_system_program_defaults_in_when_omitted() {
    let program = counter_program().unwrap();
    let ix = program
        .instruction("Create")
        .unwrap()
        .build_instruction(
            program.id(),
            &[("payer", test_address(1)), ("counter", test_address(2))],
            &[],
        )
        .unwrap();

    assert_eq!(ix.accounts[2].pubkey, SYSTEM_PROGRAM_ID);
    assert!(!ix.accounts[2].is_signer);
    assert!(!ix.accounts[2].is_writable);
}

#[test]
fn test_explicit_account_beats_default() {
    let program = counter_program().unwrap();
    let replacement = test_address(9);
    let ix = program
        .instruction("Create")
        .unwrap()
        .build_instruction(
            program.id(),
            &[
                ("payer", test_address(1)),
                ("counter", test_address(2)),
                ("system_program", replacement),
            ],
            &[],
        )
        .unwrap();
    assert_eq!(ix.accounts[2].pubkey, replacement);
}

#[test]
fn test_missing_defaultless_account_fails() {
    let program = counter_program().unwrap();
    let err = program
        .instruction("Create")
        .unwrap()
        .build_instruction(program.id(), &[("payer", test_address(1))], &[])
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::MissingAccount { ref role, .. } if role == "counter"
    ));
}

#[test]
fn test_favorites_create_payload_width() {
    let program = favorites_program().unwrap();
    let create = program.instruction("Create").unwrap();
    // 1 discriminator byte + 8-byte number + six 50-byte text fields
    assert_eq!(create.size(), 359);

    let ix = create
        .build_instruction(
            program.id(),
            &[("user", test_address(3)), ("favorites", test_address(4))],
            &[
                FieldValue::UInt(23),
                FieldValue::from("red"),
                FieldValue::from("swimming"),
                FieldValue::from("reading"),
                FieldValue::from("chess"),
                FieldValue::from("hiking"),
                FieldValue::from("cooking"),
            ],
        )
        .unwrap();
    assert_eq!(ix.data.len(), 359);
    assert_eq!(ix.data[0], 0);
    assert_eq!(&ix.data[1..9], &23u64.to_le_bytes());
}

#[test]
fn test_parse_round_trips_a_built_instruction() {
    let program = favorites_program().unwrap();
    let ix = program
        .instruction("Create")
        .unwrap()
        .build_instruction(
            program.id(),
            &[("user", test_address(3)), ("favorites", test_address(4))],
            &[
                FieldValue::UInt(23),
                FieldValue::from("red"),
                FieldValue::from("swimming"),
                FieldValue::from("reading"),
                FieldValue::from("chess"),
                FieldValue::from("hiking"),
                FieldValue::from("cooking"),
            ],
        )
        .unwrap();

    let parsed = program.parse_instruction(&ix.accounts, &ix.data).unwrap();
    assert_eq!(parsed.name, "Create");
    assert_eq!(parsed.discriminator, 0);
    assert_eq!(
        parsed.record.get("discriminator").unwrap().as_uint(),
        Some(0)
    );
    assert_eq!(parsed.record.get("number").unwrap().as_uint(), Some(23));
    let color = parsed.record.get("color").unwrap().as_bytes().unwrap();
    assert_eq!(&color[..3], b"red");

    // Roles bind positionally and keep their declared order.
    assert_eq!(parsed.accounts[0].role, "user");
    assert_eq!(parsed.accounts[0].address, test_address(3));
    assert_eq!(parsed.accounts[1].role, "favorites");
    assert_eq!(parsed.accounts[2].role, "system_program");
    assert_eq!(parsed.accounts[2].address, SYSTEM_PROGRAM_ID);
}

#[test]
fn test_parse_with_too_few_accounts_fails() {
    let program = counter_program().unwrap();
    let ix = program
        .instruction("Create")
        .unwrap()
        .build_instruction(
            program.id(),
            &[("payer", test_address(1)), ("counter", test_address(2))],
            &[],
        )
        .unwrap();

    // 1 supplied account against a 3-role schema
    let err = program
        .parse_instruction(&ix.accounts[..1], &ix.data)
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::InsufficientAccounts {
            expected: 3,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn test_parse_with_truncated_data_fails() {
    let program = favorites_program().unwrap();
    let ix = program
        .instruction("Create")
        .unwrap()
        .build_instruction(
            program.id(),
            &[("user", test_address(3)), ("favorites", test_address(4))],
            &[
                FieldValue::UInt(23),
                FieldValue::from("red"),
                FieldValue::from("swimming"),
                FieldValue::from("reading"),
                FieldValue::from("chess"),
                FieldValue::from("hiking"),
                FieldValue::from("cooking"),
            ],
        )
        .unwrap();

    let err = program
        .parse_instruction(&ix.accounts, &ix.data[..100])
        .unwrap_err();
    assert!(matches!(err, CodecError::Length { .. }));
}

#[test]
fn test_instruction_snapshot_json() {
    let program = counter_program().unwrap();
    let ix = program
        .instruction("Increase")
        .unwrap()
        .build_instruction(program.id(), &[("counter", test_address(2))], &[])
        .unwrap();
    let parsed = program.parse_instruction(&ix.accounts, &ix.data).unwrap();

    let snapshot = serde_json::to_value(instruction_snapshot(&parsed)).unwrap();
    assert_eq!(
        snapshot,
        json!({
            "program_id": program.id().to_string(),
            "instruction": "Increase",
            "discriminator": 1,
            "accounts": [{
                "role": "counter",
                "address": test_address(2).to_string(),
                "is_signer": false,
                "is_writable": true,
            }],
            "fields": [{ "name": "discriminator", "value": "1" }],
        })
    );
}

#[test]
fn test_formatter_renders_roles_and_fields() {
    let program = counter_program().unwrap();
    let ix = program
        .instruction("Create")
        .unwrap()
        .build_instruction(
            program.id(),
            &[("payer", test_address(1)), ("counter", test_address(2))],
            &[],
        )
        .unwrap();
    let parsed = program.parse_instruction(&ix.accounts, &ix.data).unwrap();

    let rendered = format_instruction(&parsed);
    assert!(rendered.contains("Create"));
    assert!(rendered.contains("payer"));
    assert!(rendered.contains("system_program"));
    assert!(rendered.contains("discriminator"));
}
