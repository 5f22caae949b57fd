//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The DNS name space is split into separate classes, each with its own
    /// record tree starting at the root. In practice, only the IN class has
    /// ever seen real use. In addition, a few query classes exist that can
    /// only appear in questions.
    ///
    /// Classes are represented by a 16 bit value, which this type wraps.
    /// The well-defined values of the [DNS CLASSes IANA registry] are
    /// available as associated constants.
    ///
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// The only class in actual use, defined in RFC 1035.
    (IN => 1, "IN")

    /// Chaosnet (CH).
    ///
    /// A network protocol from 1970s MIT. The class survives because BIND
    /// re-uses it for built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information service from MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class NONE.
    ///
    /// Used in UPDATE queries to require that a record set does not exist,
    /// defined in RFC 2136.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    ///
    /// Used in questions to request records of the given name from all
    /// classes.
    (ANY => 0xFF, "*")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

//============ Testing =======================================================
