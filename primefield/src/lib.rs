#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod dev;
mod element;
mod error;
mod field;
mod macros;
mod modulus;

pub use crate::{
    element::FieldElement,
    error::{Error, Result},
    field::Field,
    modulus::Modulus,
};
pub use num_bigint;
pub use num_traits;

