//! The resolution backend boundary.
//!
//! This crate leaves the actual work of resolving queries to a backend: a
//! type implementing the [`Backend`] trait, typically by wrapping some
//! resolution library. A backend hands out short-lived resolution
//! [`Context`]s, each of which performs a single blocking query and
//! reports its outcome as a nested response [document][self::document].
//!
//! # Response documents
//!
//! A response is a [`Dict`] with the following entries. The key strings
//! are available as constants in this module.
//!
//! * [`KEY_STATUS`]: the overall [`ResponseStatus`] of the query.
//! * [`KEY_REPLIES_TREE`]: the list of replies received, each a dict of
//!   its own:
//!   * [`KEY_DNSSEC_STATUS`]: the [`SecurityStatus`] of the reply. Only
//!     present if the query asked for it through the
//!     [`KEY_DNSSEC_RETURN_STATUS`] extension.
//!   * [`KEY_ANSWER`]: the list of answer records, each a dict of its
//!     own:
//!     * [`KEY_TYPE`]: the record type as its raw integer value.
//!     * [`KEY_TTL`]: the time to live of the record in seconds.
//!     * [`KEY_RDATA`]: a dict describing the record data, containing at
//!       least [`KEY_RDATA_RAW`]: the complete record data in wire
//!       format.
//!
//! The layout and the key strings are those of the getdns API, which
//! makes wrapping a library of that lineage a matter of passing values
//! through.
//!
//! # Extensions
//!
//! A query carries an extensions dict tweaking how the backend behaves.
//! Extensions are switched on by setting their key to [`EXTENSION_TRUE`].
//! The only extension this crate uses is [`KEY_DNSSEC_RETURN_STATUS`],
//! which requests the DNSSEC status of each reply.
//!
//! # Provided backends
//!
//! The crate ships one backend of its own: [`Table`] serves record sets
//! from a static, in-memory table and is useful for tests and offline
//! use.

use crate::iana::Rtype;
use core::fmt;

pub use self::document::{Dict, DocumentError, List, Value};
pub use self::respstatus::ResponseStatus;
pub use self::secstatus::SecurityStatus;
pub use self::table::Table;

pub mod document;
pub mod respstatus;
pub mod secstatus;
pub mod table;

//------------ Document keys -------------------------------------------------

/// The response key holding the overall response status.
pub const KEY_STATUS: &str = "status";

/// The response key holding the list of replies.
pub const KEY_REPLIES_TREE: &str = "replies_tree";

/// The reply key holding the DNSSEC status of the reply.
pub const KEY_DNSSEC_STATUS: &str = "dnssec_status";

/// The reply key holding the list of answer records.
pub const KEY_ANSWER: &str = "answer";

/// The answer key holding the record type.
pub const KEY_TYPE: &str = "type";

/// The answer key holding the record's time to live.
pub const KEY_TTL: &str = "ttl";

/// The answer key holding the record data dict.
pub const KEY_RDATA: &str = "rdata";

/// The record data key holding the raw data in wire format.
pub const KEY_RDATA_RAW: &str = "rdata_raw";

/// The extension key requesting the DNSSEC status of each reply.
pub const KEY_DNSSEC_RETURN_STATUS: &str = "dnssec_return_status";

//------------ Extension values ----------------------------------------------

/// The value switching an extension on.
pub const EXTENSION_TRUE: u32 = 1000;

/// The value switching an extension off.
pub const EXTENSION_FALSE: u32 = 1001;

//------------ Backend -------------------------------------------------------

/// A resolution library that can look up DNS records.
///
/// A backend does not answer queries itself. Instead, it hands out
/// short-lived resolution contexts, one per lookup, which do the actual
/// work. Creating a context may fail, for instance if the backend cannot
/// read its server configuration.
pub trait Backend {
    /// The resolution context used for a single lookup.
    type Context: Context;

    /// Creates a fresh resolution context.
    fn context(&self) -> Result<Self::Context, BackendError>;
}

//------------ Context -------------------------------------------------------

/// A resolution context for a single lookup.
///
/// A context is created through [`Backend::context`], used for one query,
/// and dropped afterwards. The response document it returns is fully
/// owned by the caller and stays usable after the context is gone.
pub trait Context {
    /// Issues a blocking query for records of the given name and type.
    ///
    /// The query is made in class IN. The `extensions` dict tweaks the
    /// backend's behavior as described in the [module
    /// documentation][self].
    fn query(
        &mut self,
        name: &str,
        rtype: Rtype,
        extensions: &Dict,
    ) -> Result<Dict, BackendError>;
}

//------------ BackendError --------------------------------------------------

/// An error happened inside a resolution backend.
///
/// The variants only serve diagnostics. Lookups report every one of them
/// the same way, so backends should not agonize over the choice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BackendError {
    /// The queried name is not a valid domain name.
    BadName,

    /// The backend ran out of memory.
    Memory,

    /// No upstream server could be reached.
    Transport,

    /// Something went wrong inside the backend.
    Internal,
}

//--- Display and Error

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackendError::BadName => f.write_str("invalid domain name"),
            BackendError::Memory => f.write_str("out of memory"),
            BackendError::Transport => {
                f.write_str("no upstream server could be reached")
            }
            BackendError::Internal => f.write_str("internal resolver error"),
        }
    }
}

impl std::error::Error for BackendError {}
