//! Lookup functions and related types.
//!
//! This module collects lookups that implement applications of the DNS.
//! Currently there is exactly one: [`lookup_rrset`] retrieves a complete
//! record set together with its DNSSEC status.

pub use self::rrset::{lookup_rrset, Rdata, Rrset, RrsetError};

pub mod rrset;
