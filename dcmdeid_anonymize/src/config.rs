//! Configuration used when anonymizing a data set.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Configuration used when anonymizing a data set.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AnonymizationConfig {
  pub(crate) substitute_identifier: String,
  pub(crate) remove_curves: bool,
  pub(crate) remove_private_tags: bool,
  pub(crate) remove_overlays: bool,
  pub(crate) emit_audit: bool,
}

impl Default for AnonymizationConfig {
  fn default() -> Self {
    Self {
      substitute_identifier: "anonymous".to_string(),
      remove_curves: true,
      remove_private_tags: false,
      remove_overlays: true,
      emit_audit: false,
    }
  }
}

impl AnonymizationConfig {
  /// The value that replaces all person names and the Patient ID in the
  /// anonymized data set.
  ///
  /// Default: `"anonymous"`.
  ///
  pub fn substitute_identifier(mut self, value: &str) -> Self {
    self.substitute_identifier = value.to_string();
    self
  }

  /// Whether to delete all data elements in the repeating curve groups.
  ///
  /// Default: `true`.
  ///
  pub fn remove_curves(mut self, value: bool) -> Self {
    self.remove_curves = value;
    self
  }

  /// Whether to delete all private data elements, i.e. those with an odd
  /// group number. Some viewers rely on private data elements, so removing
  /// them can affect downstream conversion.
  ///
  /// Default: `false`.
  ///
  pub fn remove_private_tags(mut self, value: bool) -> Self {
    self.remove_private_tags = value;
    self
  }

  /// Whether to delete all overlay data elements.
  ///
  /// Default: `true`.
  ///
  pub fn remove_overlays(mut self, value: bool) -> Self {
    self.remove_overlays = value;
    self
  }

  /// Whether to populate the audit report with the original value of every
  /// data element that is substituted, blanked, or removed. When disabled
  /// the same mutations are applied but the returned report is empty.
  ///
  /// Default: `false`.
  ///
  pub fn emit_audit(mut self, value: bool) -> Self {
    self.emit_audit = value;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_test() {
    let config = AnonymizationConfig::default();

    assert_eq!(config.substitute_identifier, "anonymous");
    assert!(config.remove_curves);
    assert!(!config.remove_private_tags);
    assert!(config.remove_overlays);
    assert!(!config.emit_audit);
  }

  #[test]
  fn builder_test() {
    let config = AnonymizationConfig::default()
      .substitute_identifier("subject-001")
      .remove_private_tags(true)
      .emit_audit(true);

    assert_eq!(config.substitute_identifier, "subject-001");
    assert!(config.remove_private_tags);
    assert!(config.emit_audit);
  }
}
