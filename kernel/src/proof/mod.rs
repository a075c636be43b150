//! Proof module: canonical hashing and canonical JSON.
//!
//! Nothing depends on `proof` within the kernel except for fingerprinting
//! helpers exposed to the search layer.

pub mod canon;
pub mod hash;
pub mod hash_domain;
