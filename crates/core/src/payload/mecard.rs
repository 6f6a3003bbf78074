//! MeCard builder.
//!
//! The record is assembled as `;`-joined segments with a bare `;` sentinel
//! at the end, after which the FIRST `;;` occurrence is collapsed to a
//! single `;`. When two consecutive fields are absent this can merge an
//! intentionally empty segment with its neighbor - a long-standing quirk of
//! the format as shipped, preserved here rather than silently fixed.
//! Free-text values are not escaped; a `;` inside a field corrupts the
//! record (same policy as the vCard builder).

use crate::types::MeCardContact;

/// Build a MeCard string from a contact record.
///
/// Present fields are emitted as `KEY:value` segments in the fixed order
/// `N`, `TEL`, `EMAIL`, `URL`, `ADR`, `NOTE`.
#[must_use]
pub fn build_mecard(contact: &MeCardContact) -> String {
    let mut parts = vec!["MECARD:".to_string()];

    if !contact.name.is_empty() {
        parts.push(format!("N:{}", contact.name));
    }
    if !contact.phone.is_empty() {
        parts.push(format!("TEL:{}", contact.phone));
    }
    if !contact.email.is_empty() {
        parts.push(format!("EMAIL:{}", contact.email));
    }
    if !contact.website.is_empty() {
        parts.push(format!("URL:{}", contact.website));
    }
    if !contact.address.is_empty() {
        parts.push(format!("ADR:{}", contact.address));
    }
    if !contact.note.is_empty() {
        parts.push(format!("NOTE:{}", contact.note));
    }

    parts.push(";".to_string());
    parts.join(";").replacen(";;", ";", 1)
}
