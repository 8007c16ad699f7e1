//! Integration tests for pigmix crates.
//!
//! End-to-end checks of the public blend API: the mixing invariants every
//! encoding must satisfy, thread safety of the shared table, and the
//! serialized forms of the configuration types. Reference outputs live in
//! [`reference`].

#[cfg(test)]
mod reference;
