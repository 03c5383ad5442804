//! Pure predicates that classify a data element by its identity metadata.
//! These decide which anonymization pass, if any, applies to an element.

use dcmdeid_core::{DataElementTag, ValueRepresentation, dictionary};

/// Returns whether the given VR holds a person name.
///
pub fn is_person_name(vr: ValueRepresentation) -> bool {
  vr == ValueRepresentation::PersonName
}

/// Returns whether the given tag is private, i.e. its group number is odd.
///
pub fn is_private(tag: DataElementTag) -> bool {
  tag.is_private()
}

/// Returns whether the given tag is in the specified group.
///
pub fn is_group(tag: DataElementTag, group: u16) -> bool {
  tag.group == group
}

/// Returns whether the given tag names an overlay data element, determined by
/// whether its dictionary name contains `"overlay"` case-insensitively. Tags
/// that don't resolve in the dictionary are not overlays.
///
/// This name-substring heuristic is kept for behavioral compatibility with
/// existing de-identification logs. A check against the numeric overlay group
/// range could replace it here without affecting callers.
///
pub fn is_overlay(tag: DataElementTag) -> bool {
  match dictionary::find(tag) {
    Some(item) => item.name.to_lowercase().contains("overlay"),
    None => false,
  }
}
