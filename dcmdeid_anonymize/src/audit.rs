//! Accumulates the original value of every data element that is substituted,
//! blanked, or removed during an anonymization run.

#[cfg(not(feature = "std"))]
use alloc::{
  collections::BTreeMap,
  string::{String, ToString},
};

#[cfg(feature = "std")]
use std::collections::BTreeMap;

use dcmdeid_core::{DataElementTag, DataElementValue};
use serde::Serialize;

/// Original values are rendered to at most this many graphemes in the audit
/// report.
const RENDERED_VALUE_MAX_WIDTH: usize = 120;

/// The bucket of the audit report a mutation is recorded into.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuditBucket {
  /// Private data elements that were deleted.
  RemovedPrivate,

  /// Public data elements that were deleted or had their value emptied by a
  /// group sweep.
  RemovedPublic,

  /// Public data elements whose values were blanked by the blank table.
  BlankPublic,

  /// Reserved for diffusion-related data elements. Currently always empty.
  Diffusion,

  /// Person name values that were substituted.
  PatientName,

  /// Curve and overlay data elements, which can appear in both public and
  /// private groups.
  Misc,
}

/// The audit trail of one anonymization run: for each mutation category, a
/// mapping from the rendered tag identity, e.g. `"(0010,0010)"`, to the
/// rendered original value.
///
/// A report created with recording disabled applies no entries, so the same
/// mutation code runs whether or not an audit trail was requested.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuditReport {
  removed_private: BTreeMap<String, String>,
  removed_public: BTreeMap<String, String>,
  blank_public: BTreeMap<String, String>,
  diffusion: BTreeMap<String, String>,
  patient_name: BTreeMap<String, String>,
  misc: BTreeMap<String, String>,

  #[serde(skip)]
  enabled: bool,
}

impl AuditReport {
  /// Creates a new empty audit report. Entries recorded into it are only
  /// stored when `enabled` is true.
  ///
  pub fn new(enabled: bool) -> Self {
    Self {
      enabled,
      ..Self::default()
    }
  }

  /// Records the original value of a data element into the given bucket.
  /// This must be called before the element is mutated.
  ///
  pub(crate) fn record(
    &mut self,
    bucket: AuditBucket,
    tag: DataElementTag,
    original_value: &DataElementValue,
  ) {
    if !self.enabled {
      return;
    }

    let rendered_value = original_value.to_string(RENDERED_VALUE_MAX_WIDTH);

    self.bucket_mut(bucket).insert(tag.to_string(), rendered_value);
  }

  /// Returns whether the report has no entries in any bucket.
  ///
  pub fn is_empty(&self) -> bool {
    self.removed_private.is_empty()
      && self.removed_public.is_empty()
      && self.blank_public.is_empty()
      && self.diffusion.is_empty()
      && self.patient_name.is_empty()
      && self.misc.is_empty()
  }

  /// Deleted private data elements.
  ///
  pub fn removed_private(&self) -> &BTreeMap<String, String> {
    &self.removed_private
  }

  /// Deleted or group-swept public data elements.
  ///
  pub fn removed_public(&self) -> &BTreeMap<String, String> {
    &self.removed_public
  }

  /// Blanked public data elements.
  ///
  pub fn blank_public(&self) -> &BTreeMap<String, String> {
    &self.blank_public
  }

  /// Diffusion data elements. Reserved, currently always empty.
  ///
  pub fn diffusion(&self) -> &BTreeMap<String, String> {
    &self.diffusion
  }

  /// Substituted person name values.
  ///
  pub fn patient_name(&self) -> &BTreeMap<String, String> {
    &self.patient_name
  }

  /// Deleted curve and overlay data elements.
  ///
  pub fn misc(&self) -> &BTreeMap<String, String> {
    &self.misc
  }

  /// Serializes the report to a JSON document with exactly six top-level
  /// fields: `removed_private`, `removed_public`, `blank_public`,
  /// `diffusion`, `patient_name`, and `misc`.
  ///
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  fn bucket_mut(&mut self, bucket: AuditBucket) -> &mut BTreeMap<String, String> {
    match bucket {
      AuditBucket::RemovedPrivate => &mut self.removed_private,
      AuditBucket::RemovedPublic => &mut self.removed_public,
      AuditBucket::BlankPublic => &mut self.blank_public,
      AuditBucket::Diffusion => &mut self.diffusion,
      AuditBucket::PatientName => &mut self.patient_name,
      AuditBucket::Misc => &mut self.misc,
    }
  }
}
