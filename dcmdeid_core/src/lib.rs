//! Core data model for working with DICOM data sets in memory: data element
//! tags, value representations, data element values, data sets, and the
//! public data element dictionary.
//!
//! Parsing raw DICOM P10 bytes into this model, and serializing the model
//! back out, is the responsibility of an external codec.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod data_element_tag;
pub mod data_element_value;
pub mod data_error;
pub mod data_set;
pub mod dictionary;
pub mod error;
pub mod value_representation;

pub use data_element_tag::DataElementTag;
pub use data_element_value::DataElementValue;
pub use data_error::DataError;
pub use data_set::DataSet;
pub use error::DcmDeidError;
pub use value_representation::ValueRepresentation;
