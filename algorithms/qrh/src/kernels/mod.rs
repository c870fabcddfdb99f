//! QRH Kernels
//!
//! The compression function and the constants it is built from.

pub mod constants;
pub mod portable;
