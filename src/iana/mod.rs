//! IANA definitions for DNS.
//!
//! This module contains the types for the two query parameters taken from
//! IANA registries: record classes and record types. Both wrap the raw
//! integer value of their registry, provide associated constants for the
//! well-defined values, and convert from and to mnemonics.
//!
//! Each parameter type has a module of its own and is re-exported here.
//! This way, associated types such as `FromStrError` can be referred to
//! without resorting to overly long paths.

pub use self::class::Class;
pub use self::rtype::Rtype;

pub mod class;
pub mod rtype;
