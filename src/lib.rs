//! Record set lookups with DNSSEC status.
//!
//! This crate provides the classic host lookup by record type: hand it a
//! host name, a class, and a record type and receive the raw data of all
//! matching records together with the covering signatures and a flag
//! stating whether the answer was validated through DNSSEC. The work is
//! done by [`lookup_rrset`][lookup::lookup_rrset], which performs one
//! blocking query per call.
//!
//! The resolver doing the actual work stays behind the
//! [`Backend`][backend::Backend] trait. A backend hands out single use
//! resolution contexts and answers queries with a response document, a
//! tree of dicts and lists as produced by validating stub resolvers. The
//! crate ships with [`Table`][backend::Table], a backend serving canned
//! records, which is what the examples and tests use.
//!
//! ```
//! use bytes::Bytes;
//! use rrset::backend::Table;
//! use rrset::iana::{Class, Rtype};
//! use rrset::lookup::lookup_rrset;
//!
//! let mut table = Table::new();
//! table.add(
//!     "www.example.com", Rtype::A, 300,
//!     Bytes::from_static(&[192, 0, 2, 1]),
//! );
//!
//! let set = lookup_rrset(
//!     &table, "www.example.com", Class::IN, Rtype::A, 0,
//! ).unwrap();
//! assert_eq!(set.rdatas()[0].octets(), &[192, 0, 2, 1]);
//! assert!(!set.is_validated());
//! ```
//!
//! # Modules
//!
//! * [backend] defines the interface to resolvers and the response
//!   document model, and contains the table backend,
//! * [iana] contains the DNS class and record type parameter types,
//! * [lookup] contains the lookup itself and its result types.

#[macro_use]
mod macros;

pub mod backend;
pub mod iana;
pub mod lookup;
