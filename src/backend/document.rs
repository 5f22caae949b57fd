//! Response documents.
//!
//! Backends report the outcome of a query as a tree of dynamically typed
//! values: dicts mapping names to values, lists of values, integers, and
//! binary data. This module contains the document model itself as well as
//! typed accessors that return a value of the requested kind or fail with
//! a [`DocumentError`].
//!
//! The model only appears at the backend boundary. Code consuming a
//! response converts every level of the tree into properly typed data
//! right away.

use bytes::Bytes;
use core::fmt;
use std::collections::BTreeMap;

//------------ Value ---------------------------------------------------------

/// A single node of a response document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// An unsigned integer.
    Int(u32),

    /// An opaque sequence of octets.
    Bindata(Bytes),

    /// A sequence of values.
    List(List),

    /// A collection of named values.
    Dict(Dict),
}

//------------ Dict ----------------------------------------------------------

/// A collection of values indexed by name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Dict {
    items: BTreeMap<String, Value>,
}

impl Dict {
    /// Creates an empty dict.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Inserts an integer value under the given name.
    ///
    /// An existing value of any kind under the same name is replaced.
    pub fn set_int(&mut self, name: &str, value: u32) {
        self.items.insert(name.into(), Value::Int(value));
    }

    /// Inserts binary data under the given name.
    pub fn set_bindata(&mut self, name: &str, value: Bytes) {
        self.items.insert(name.into(), Value::Bindata(value));
    }

    /// Inserts a list under the given name.
    pub fn set_list(&mut self, name: &str, value: List) {
        self.items.insert(name.into(), Value::List(value));
    }

    /// Inserts a dict under the given name.
    pub fn set_dict(&mut self, name: &str, value: Dict) {
        self.items.insert(name.into(), Value::Dict(value));
    }

    /// Removes and returns the value stored under the given name.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.items.remove(name)
    }

    /// Returns the value stored under the given name.
    pub fn get(&self, name: &str) -> Result<&Value, DocumentError> {
        self.items.get(name).ok_or(DocumentError::NoSuchName)
    }

    /// Returns the integer stored under the given name.
    pub fn int(&self, name: &str) -> Result<u32, DocumentError> {
        match self.get(name)? {
            Value::Int(value) => Ok(*value),
            _ => Err(DocumentError::WrongType),
        }
    }

    /// Returns the binary data stored under the given name.
    pub fn bindata(&self, name: &str) -> Result<&Bytes, DocumentError> {
        match self.get(name)? {
            Value::Bindata(value) => Ok(value),
            _ => Err(DocumentError::WrongType),
        }
    }

    /// Returns the list stored under the given name.
    pub fn list(&self, name: &str) -> Result<&List, DocumentError> {
        match self.get(name)? {
            Value::List(value) => Ok(value),
            _ => Err(DocumentError::WrongType),
        }
    }

    /// Returns the dict stored under the given name.
    pub fn dict(&self, name: &str) -> Result<&Dict, DocumentError> {
        match self.get(name)? {
            Value::Dict(value) => Ok(value),
            _ => Err(DocumentError::WrongType),
        }
    }
}

//------------ List ----------------------------------------------------------

/// A sequence of values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the number of values in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value to the list.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Returns the value at the given index.
    pub fn get(&self, index: usize) -> Result<&Value, DocumentError> {
        self.items.get(index).ok_or(DocumentError::NoSuchItem)
    }

    /// Returns the dict at the given index.
    pub fn dict(&self, index: usize) -> Result<&Dict, DocumentError> {
        match self.get(index)? {
            Value::Dict(value) => Ok(value),
            _ => Err(DocumentError::WrongType),
        }
    }
}

//------------ DocumentError -------------------------------------------------

/// An error happened while reading a response document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentError {
    /// A dict has no entry with the requested name.
    NoSuchName,

    /// A list has no value at the requested index.
    NoSuchItem,

    /// The requested value is of a different kind.
    WrongType,
}

//--- Display and Error

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentError::NoSuchName => f.write_str("no such name"),
            DocumentError::NoSuchItem => f.write_str("no such item"),
            DocumentError::WrongType => f.write_str("wrong type requested"),
        }
    }
}

impl std::error::Error for DocumentError {}

//============ Testing =======================================================
