//! A backend serving records from a static table.
//!
//! The [`Table`] backend resolves queries against records registered with
//! it up front instead of asking the network. It answers deterministically
//! and is therefore what the crate's own tests run against, but it works
//! just as well wherever a fixed set of records should be served without
//! any resolver infrastructure, such as example code or offline tests of
//! code consuming record sets.

use super::document::{Dict, List, Value};
use super::respstatus::ResponseStatus;
use super::secstatus::SecurityStatus;
use super::{Backend, BackendError, Context};
use crate::iana::Rtype;
use bytes::Bytes;
use std::collections::BTreeMap;

//------------ Table ---------------------------------------------------------

/// A backend serving records from a static table.
///
/// Records are registered through [`add`][Self::add] and looked up by
/// name, ignoring ASCII case and a trailing dot. A query returns the
/// records of the queried type together with all CNAME and RRSIG records
/// of the name, the way the answer section of a real response would
/// contain alias chains and, for a DNSSEC signed zone, covering
/// signatures.
///
/// The DNSSEC status reported for a name defaults to
/// [`SecurityStatus::INDETERMINATE`] and can be changed per name through
/// [`set_security`][Self::set_security].
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use rrset::backend::Table;
/// use rrset::iana::{Class, Rtype};
/// use rrset::lookup::lookup_rrset;
///
/// let mut table = Table::new();
/// table.add(
///     "host.example.com", Rtype::A, 3600,
///     Bytes::from_static(&[192, 0, 2, 1]),
/// );
///
/// let set = lookup_rrset(
///     &table, "host.example.com", Class::IN, Rtype::A, 0,
/// ).unwrap();
/// assert_eq!(set.rdatas()[0].octets(), &[192, 0, 2, 1]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    /// The registered records in registration order.
    entries: Vec<Entry>,

    /// The DNSSEC status reported for names with an explicit setting.
    security: BTreeMap<String, SecurityStatus>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a record for the given name.
    ///
    /// The record data has to be provided in wire format. Nothing checks
    /// that it matches the record type.
    pub fn add(
        &mut self,
        name: &str,
        rtype: Rtype,
        ttl: u32,
        rdata: impl Into<Bytes>,
    ) {
        self.entries.push(Entry {
            name: normalize(name),
            rtype,
            ttl,
            rdata: rdata.into(),
        });
    }

    /// Sets the DNSSEC status reported for the given name.
    pub fn set_security(&mut self, name: &str, status: SecurityStatus) {
        self.security.insert(normalize(name), status);
    }
}

//--- Backend

impl Backend for Table {
    type Context = TableContext;

    fn context(&self) -> Result<Self::Context, BackendError> {
        Ok(TableContext {
            table: self.clone(),
        })
    }
}

//------------ TableContext --------------------------------------------------

/// A resolution context of a [`Table`] backend.
///
/// The context holds a snapshot of the table taken when it was created.
/// Changes to the table made afterwards do not show in its responses.
#[derive(Clone, Debug)]
pub struct TableContext {
    table: Table,
}

impl Context for TableContext {
    fn query(
        &mut self,
        name: &str,
        rtype: Rtype,
        extensions: &Dict,
    ) -> Result<Dict, BackendError> {
        check_name(name)?;
        let name = normalize(name);

        let entries: Vec<&Entry> = self
            .table
            .entries
            .iter()
            .filter(|entry| entry.name == name)
            .collect();

        // A name without any records at all does not exist.
        if entries.is_empty() {
            let mut response = Dict::new();
            response
                .set_int(super::KEY_STATUS, ResponseStatus::NO_NAME.to_int());
            response.set_list(super::KEY_REPLIES_TREE, List::new());
            return Ok(response);
        }

        let mut answer = List::new();
        for entry in entries {
            if entry.rtype != rtype
                && entry.rtype != Rtype::CNAME
                && entry.rtype != Rtype::RRSIG
            {
                continue;
            }
            let mut rdata = Dict::new();
            rdata.set_bindata(super::KEY_RDATA_RAW, entry.rdata.clone());
            let mut record = Dict::new();
            record.set_int(super::KEY_TYPE, u32::from(entry.rtype.to_int()));
            record.set_int(super::KEY_TTL, entry.ttl);
            record.set_dict(super::KEY_RDATA, rdata);
            answer.push(Value::Dict(record));
        }

        let mut reply = Dict::new();
        if wants_dnssec(extensions) {
            let status = self
                .table
                .security
                .get(&name)
                .copied()
                .unwrap_or(SecurityStatus::INDETERMINATE);
            reply.set_int(super::KEY_DNSSEC_STATUS, status.to_int());
        }
        reply.set_list(super::KEY_ANSWER, answer);

        let mut replies = List::new();
        replies.push(Value::Dict(reply));

        let mut response = Dict::new();
        response.set_int(super::KEY_STATUS, ResponseStatus::GOOD.to_int());
        response.set_list(super::KEY_REPLIES_TREE, replies);
        Ok(response)
    }
}

//------------ Entry ---------------------------------------------------------

/// A single record registered with a table.
#[derive(Clone, Debug)]
struct Entry {
    /// The normalized owner name of the record.
    name: String,

    /// The record type.
    rtype: Rtype,

    /// The time to live in seconds.
    ttl: u32,

    /// The record data in wire format.
    rdata: Bytes,
}

//------------ Helper functions ----------------------------------------------

/// Normalizes a name for lookup in the table.
fn normalize(name: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    name.to_ascii_lowercase()
}

/// Checks that a name is a well-formed domain name.
fn check_name(name: &str) -> Result<(), BackendError> {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > 253 {
        return Err(BackendError::BadName);
    }
    if name
        .split('.')
        .any(|label| label.is_empty() || label.len() > 63)
    {
        return Err(BackendError::BadName);
    }
    Ok(())
}

/// Returns whether the extensions ask for the DNSSEC status.
fn wants_dnssec(extensions: &Dict) -> bool {
    extensions
        .int(super::KEY_DNSSEC_RETURN_STATUS)
        .map(|value| value == super::EXTENSION_TRUE)
        .unwrap_or(false)
}

//============ Testing =======================================================
