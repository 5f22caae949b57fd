//! The overall status of a response.

//------------ ResponseStatus ------------------------------------------------

int_enum! {
    /// The overall status of a completed query.
    ///
    /// Every response document carries one of these values to state how
    /// the query as a whole went. Only [`GOOD`][Self::GOOD] responses
    /// contain replies worth looking at.
    ///
    /// The numeric values are those of the getdns API, so backends built
    /// on a library speaking that API can pass the status through
    /// unchanged. Values this type does not know about are kept as is and
    /// simply compare unequal to all well-defined ones.
    =>
    ResponseStatus, u32;

    /// At least one reply was received.
    (GOOD => 900, "GOOD")

    /// The queried name does not exist.
    (NO_NAME => 901, "NO_NAME")

    /// None of the queried servers responded in time.
    (ALL_TIMEOUT => 902, "ALL_TIMEOUT")

    /// Replies were withheld because none were secure.
    ///
    /// Only returned by backends configured to insist on DNSSEC.
    (NO_SECURE_ANSWERS => 903, "NO_SECURE_ANSWERS")

    /// All replies failed DNSSEC validation.
    (ALL_BOGUS_ANSWERS => 904, "ALL_BOGUS_ANSWERS")
}

int_enum_str_with_decimal!(ResponseStatus, u32, "unknown response status");

//============ Testing =======================================================
