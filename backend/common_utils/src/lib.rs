pub mod consts;
pub mod crypto;
pub mod errors;
pub mod fp_utils;
pub mod generators;
pub mod types;

pub use errors::CustomResult;
