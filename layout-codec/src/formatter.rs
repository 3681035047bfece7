//! Human-readable rendering of parsed instructions.
//!
//! Renders a header line plus two tables: accounts (role, address, signer,
//! writable) and decoded fields (name, value). Off-chain only.

use tabled::{settings::Style, Table, Tabled};

use crate::instruction::ParsedInstruction;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Signer")]
    signer: &'static str,
    #[tabled(rename = "Writable")]
    writable: &'static str,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format a parsed instruction as a header plus account and field tables.
pub fn format_instruction(parsed: &ParsedInstruction) -> String {
    let mut out = format!(
        "{} :: {} (discriminator {:#04x})\n",
        parsed.program_id, parsed.name, parsed.discriminator
    );

    let account_rows: Vec<AccountRow> = parsed
        .accounts
        .iter()
        .map(|a| AccountRow {
            role: a.role.clone(),
            address: a.address.to_string(),
            signer: yes_no(a.is_signer),
            writable: yes_no(a.is_writable),
        })
        .collect();
    if !account_rows.is_empty() {
        out.push_str(&Table::new(account_rows).with(Style::sharp()).to_string());
        out.push('\n');
    }

    let field_rows: Vec<FieldRow> = parsed
        .record
        .fields()
        .iter()
        .map(|(name, value)| FieldRow {
            name: name.clone(),
            value: value.to_string(),
        })
        .collect();
    out.push_str(&Table::new(field_rows).with(Style::sharp()).to_string());
    out.push('\n');
    out
}
