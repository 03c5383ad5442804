//! Depth-first traversal of a data set, including the data sets nested inside
//! sequence data elements.

use dcmdeid_core::{DataElementTag, DataSet};

/// Invokes `visit` for every data element in the data set, and recursively
/// for every data element inside every item of every sequence value, in
/// depth-first pre-order.
///
/// The set of tags to visit at each level is snapshotted before iteration
/// begins, so `visit` may delete the element it is visiting, or any of its
/// siblings, without elements being skipped or visited twice. An element
/// deleted by an earlier visit at the same level is not visited.
///
pub fn walk<F>(data_set: &mut DataSet, visit: &mut F)
where
  F: FnMut(&mut DataSet, DataElementTag),
{
  for tag in data_set.tags() {
    // Skip elements deleted by a previous visit at this level
    if !data_set.has(tag) {
      continue;
    }

    visit(data_set, tag);

    // Recurse into sequence items if the element survived its own visit
    if let Some(value) = data_set.get_mut(tag)
      && let Some(items) = value.sequence_items_mut()
    {
      for item in items.iter_mut() {
        walk(item, visit);
      }
    }
  }
}
