//! Looking up record sets.
//!
//! The most complete way to look at the records of a name is to retrieve
//! the entire record set of a type: the raw data of every record plus the
//! signatures that came with it, and whether the resolver validated the
//! answer through DNSSEC. The function provided by this module,
//! [`lookup_rrset`], does exactly that through a resolution
//! [backend][crate::backend].

use crate::backend::{
    self, Backend, Context, Dict, DocumentError, ResponseStatus,
    SecurityStatus,
};
use crate::iana::{Class, Rtype};
use bytes::Bytes;
use core::fmt;
use std::collections::TryReserveError;
use tracing::debug;

//------------ lookup_rrset --------------------------------------------------

/// Looks up the record set of the given type owned by the given name.
///
/// The lookup creates a fresh resolution context from `backend`, requests
/// the DNSSEC status of the answer alongside the records, and issues a
/// single blocking query for `hostname` and `rtype`. Of the response,
/// only the first reply is consulted. Its answer records are filtered
/// down to those of the requested type and their raw data is copied into
/// the returned [`Rrset`]. Records of other types are quietly dropped,
/// with one exception: RRSIG records covering the requested type are
/// collected as well and available through [`Rrset::sigs`]. If the reply
/// reports its data as secure, the returned set is marked as validated.
///
/// Only lookups in [`Class::IN`] are supported; any other class fails
/// with [`RrsetError::Failed`]. The `flags` argument is reserved and must
/// be zero, otherwise the lookup fails with
/// [`RrsetError::InvalidArgument`]. In both cases the backend is never
/// consulted.
///
/// A reply without any answer records at all fails with
/// [`RrsetError::NoData`]. This check happens before the type filter, so
/// a reply containing only records of foreign types instead produces a
/// record set without data records.
///
/// Failures inside the backend and malformed response documents are all
/// reported as [`RrsetError::Failed`]. The details differ wildly in
/// nature but never in consequence, so they are logged at debug level
/// rather than reported.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use rrset::backend::{SecurityStatus, Table};
/// use rrset::iana::{Class, Rtype};
/// use rrset::lookup::lookup_rrset;
///
/// let mut table = Table::new();
/// table.add(
///     "host.example.com", Rtype::SSHFP, 3600,
///     Bytes::from_static(b"\x04\x02abcd"),
/// );
/// table.set_security("host.example.com", SecurityStatus::SECURE);
///
/// let set = lookup_rrset(
///     &table, "host.example.com", Class::IN, Rtype::SSHFP, 0,
/// ).unwrap();
/// assert!(set.is_validated());
/// assert_eq!(set.rdatas()[0].octets(), b"\x04\x02abcd");
/// ```
pub fn lookup_rrset<B: Backend>(
    backend: &B,
    hostname: &str,
    class: Class,
    rtype: Rtype,
    flags: u32,
) -> Result<Rrset, RrsetError> {
    if flags != 0 {
        return Err(RrsetError::InvalidArgument);
    }
    if class != Class::IN {
        debug!("Record set lookup for {hostname}: only class IN is supported");
        return Err(RrsetError::Failed);
    }

    let mut context = match backend.context() {
        Ok(context) => context,
        Err(err) => {
            debug!(
                "Record set lookup for {hostname}: \
                 creating a context failed: {err}"
            );
            return Err(RrsetError::Failed);
        }
    };

    let mut extensions = Dict::new();
    extensions
        .set_int(backend::KEY_DNSSEC_RETURN_STATUS, backend::EXTENSION_TRUE);

    let response = match context.query(hostname, rtype, &extensions) {
        Ok(response) => response,
        Err(err) => {
            debug!("Record set lookup for {hostname}: query failed: {err}");
            return Err(RrsetError::Failed);
        }
    };

    let fault = |what: &str| {
        debug!(
            "Record set lookup for {hostname}: \
             response without usable '{what}'"
        );
        RrsetError::Failed
    };

    let status = ResponseStatus::from_int(
        response
            .int(backend::KEY_STATUS)
            .map_err(|_| fault(backend::KEY_STATUS))?,
    );
    if status != ResponseStatus::GOOD {
        debug!("Record set lookup for {hostname}: response status {status}");
        return Err(RrsetError::Failed);
    }

    let replies = response
        .list(backend::KEY_REPLIES_TREE)
        .map_err(|_| fault(backend::KEY_REPLIES_TREE))?;

    // Only the first reply is consulted.
    let reply = replies.dict(0).map_err(|_| fault("replies_tree[0]"))?;

    let dnssec_status = reply
        .int(backend::KEY_DNSSEC_STATUS)
        .map_err(|_| fault(backend::KEY_DNSSEC_STATUS))?;

    let answers = reply
        .list(backend::KEY_ANSWER)
        .map_err(|_| fault(backend::KEY_ANSWER))?;

    // No data means no answer records whatsoever. A reply whose records
    // all fall to the type filter below still counts as data.
    if answers.is_empty() {
        return Err(RrsetError::NoData);
    }

    let validated =
        SecurityStatus::from_int(dnssec_status) == SecurityStatus::SECURE;

    // The answer count is an upper bound for the number of data records.
    let mut rdatas = Vec::new();
    rdatas.try_reserve_exact(answers.len())?;
    let mut sigs = Vec::new();
    let mut ttl = 0;

    for index in 0..answers.len() {
        let answer = answers.dict(index).map_err(|_| fault("answer record"))?;
        let answer_type = answer
            .int(backend::KEY_TYPE)
            .map_err(|_| fault(backend::KEY_TYPE))?;

        if answer_type == u32::from(rtype.to_int()) {
            let record_ttl = answer
                .int(backend::KEY_TTL)
                .map_err(|_| fault(backend::KEY_TTL))?;
            if rdatas.is_empty() {
                ttl = record_ttl;
            }
            let raw = raw_rdata(answer)
                .map_err(|_| fault(backend::KEY_RDATA_RAW))?;
            rdatas.push(Rdata::copy_from(raw)?);
        } else if answer_type == u32::from(Rtype::RRSIG.to_int()) {
            let raw = raw_rdata(answer)
                .map_err(|_| fault(backend::KEY_RDATA_RAW))?;
            if covers(raw, rtype) {
                sigs.try_reserve(1)?;
                sigs.push(Rdata::copy_from(raw)?);
            }
        }
    }

    Ok(Rrset {
        name: hostname.into(),
        class,
        rtype,
        ttl,
        validated,
        rdatas,
        sigs,
    })
}

//------------ Rrset ---------------------------------------------------------

/// The result of a record set lookup.
///
/// A value of this type holds the raw data of all the records of the
/// looked up type, plus the signatures covering them if the reply carried
/// any. All data is owned by the value itself; whatever backend resources
/// were involved in producing it have already been released when the
/// lookup returned. Dropping the value releases everything it holds.
#[derive(Clone, Debug)]
pub struct Rrset {
    /// The name the lookup was made for.
    name: String,

    /// The class of the record set.
    class: Class,

    /// The type of the records in the set.
    rtype: Rtype,

    /// The TTL of the first data record of the set.
    ttl: u32,

    /// Whether the backend validated the reply as secure.
    validated: bool,

    /// The data records.
    rdatas: Vec<Rdata>,

    /// The covering RRSIG records.
    sigs: Vec<Rdata>,
}

impl Rrset {
    /// Returns the name the lookup was made for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the class of the record set.
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the type of the records in the set.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the time to live of the record set in seconds.
    ///
    /// The value is taken from the first record of the set. If the set
    /// has no data records, it is zero.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns whether the backend validated the reply as secure.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Returns the data records of the set.
    #[must_use]
    pub fn rdatas(&self) -> &[Rdata] {
        &self.rdatas
    }

    /// Returns the RRSIG records covering the set.
    #[must_use]
    pub fn sigs(&self) -> &[Rdata] {
        &self.sigs
    }
}

//------------ Rdata ---------------------------------------------------------

/// The raw data of a single resource record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rdata {
    /// The record data in wire format.
    octets: Box<[u8]>,
}

impl Rdata {
    /// Creates a value by copying the given octets.
    fn copy_from(octets: &[u8]) -> Result<Self, RrsetError> {
        let mut vec = Vec::new();
        vec.try_reserve_exact(octets.len())?;
        vec.extend_from_slice(octets);
        Ok(Rdata {
            octets: vec.into_boxed_slice(),
        })
    }

    /// Returns the record data in wire format.
    #[must_use]
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }
}

impl AsRef<[u8]> for Rdata {
    fn as_ref(&self) -> &[u8] {
        &self.octets
    }
}

//------------ RrsetError ----------------------------------------------------

/// An error happened during a record set lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RrsetError {
    /// The call itself was malformed.
    ///
    /// Currently only returned for a non-zero flags argument.
    InvalidArgument,

    /// The lookup failed.
    ///
    /// This covers everything from an unreachable server to a response
    /// the lookup could not make sense of. The specifics are logged at
    /// debug level.
    Failed,

    /// The reply did not contain any answer records.
    NoData,

    /// Memory for the record set could not be allocated.
    Memory,
}

//--- From

impl From<TryReserveError> for RrsetError {
    fn from(_: TryReserveError) -> Self {
        RrsetError::Memory
    }
}

//--- Display and Error

impl fmt::Display for RrsetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RrsetError::InvalidArgument => f.write_str("invalid argument"),
            RrsetError::Failed => f.write_str("lookup failed"),
            RrsetError::NoData => f.write_str("no data"),
            RrsetError::Memory => f.write_str("out of memory"),
        }
    }
}

impl std::error::Error for RrsetError {}

//------------ Helper functions ----------------------------------------------

/// Returns the raw record data of an answer record.
fn raw_rdata(answer: &Dict) -> Result<&Bytes, DocumentError> {
    answer.dict(backend::KEY_RDATA)?.bindata(backend::KEY_RDATA_RAW)
}

/// Returns whether raw RRSIG data signs records of the given type.
///
/// The type covered field lives in the first two octets of the record
/// data. Data too short to contain the field does not cover anything.
fn covers(rdata: &[u8], rtype: Rtype) -> bool {
    if rdata.len() < 2 {
        return false;
    }
    u16::from_be_bytes([rdata[0], rdata[1]]) == rtype.to_int()
}

//============ Testing =======================================================
