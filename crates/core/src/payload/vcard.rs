//! vCard 3.0 builder.
//!
//! Emits the fixed-order line sequence scanners expect. Free-text fields
//! are inserted verbatim: a value containing `;` or `:` will corrupt the
//! encoded record. That matches the behavior shipped to date and is kept
//! as-is; escaping would be a semantic change to the wire contract.

use crate::types::ContactCard;

/// Build a vCard 3.0 text block from a contact card.
///
/// Field order is fixed: name lines (only when a name part is present),
/// then `ORG`, `TITLE`, `TEL`, `EMAIL`, `URL`, `ADR`, `NOTE`, each omitted
/// when empty. Lines are joined with `\n`.
///
/// An empty record yields the minimal valid card:
/// `BEGIN:VCARD\nVERSION:3.0\nEND:VCARD`.
#[must_use]
pub fn build_vcard(card: &ContactCard) -> String {
    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    if card.has_name() {
        let full_name = format!("{} {}", card.first_name, card.last_name);
        lines.push(format!("FN:{}", full_name.trim()));
        lines.push(format!("N:{};{};;;", card.last_name, card.first_name));
    }

    if !card.organization.is_empty() {
        lines.push(format!("ORG:{}", card.organization));
    }
    if !card.title.is_empty() {
        lines.push(format!("TITLE:{}", card.title));
    }
    if !card.phone.is_empty() {
        lines.push(format!("TEL:{}", card.phone));
    }
    if !card.email.is_empty() {
        lines.push(format!("EMAIL:{}", card.email));
    }
    if !card.website.is_empty() {
        lines.push(format!("URL:{}", card.website));
    }
    if !card.address.is_empty() {
        lines.push(format!("ADR:;;{};;;;", card.address));
    }
    if !card.note.is_empty() {
        lines.push(format!("NOTE:{}", card.note));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}
