//! The DNSSEC status of a reply.

//------------ SecurityStatus ------------------------------------------------

int_enum! {
    /// The DNSSEC status of a single reply.
    ///
    /// When asked to, a validating backend reports for each reply whether
    /// its data was cryptographically validated. The first four values
    /// correspond to the validation outcomes defined in RFC 4033; the
    /// fifth is reported when validation was not attempted at all.
    ///
    /// The numeric values are those of the getdns API, so backends built
    /// on a library speaking that API can pass the status through
    /// unchanged. Values this type does not know about are kept as is; in
    /// particular, they never count as secure.
    =>
    SecurityStatus, u32;

    /// The reply was validated successfully.
    (SECURE => 400, "SECURE")

    /// The reply failed validation.
    ///
    /// There is DNSSEC data for the zone but the reply did not validate
    /// against it.
    (BOGUS => 401, "BOGUS")

    /// Validation was attempted but could not reach a conclusion.
    (INDETERMINATE => 402, "INDETERMINATE")

    /// The zone is provably not covered by DNSSEC.
    (INSECURE => 403, "INSECURE")

    /// Validation was not performed for this reply.
    (NOT_PERFORMED => 404, "NOT_PERFORMED")
}

int_enum_str_with_decimal!(SecurityStatus, u32, "unknown security status");

//============ Testing =======================================================
