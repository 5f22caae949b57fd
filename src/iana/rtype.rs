//! Resource record types.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value stating which kind of
    /// data it holds. This type wraps that value. The most relevant of the
    /// values assigned in the [DNS parameters IANA registry] are available
    /// as associated constants; since the wrapped value is kept as is, the
    /// type can represent record types it does not know about as well.
    ///
    /// [DNS parameters IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    ///
    /// Defined in RFC 1035.
    (A => 1, "A")

    /// An authoritative name server.
    ///
    /// Defined in RFC 1035.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    ///
    /// Defined in RFC 1035.
    (CNAME => 5, "CNAME")

    /// The start of a zone of authority.
    ///
    /// Defined in RFC 1035.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    ///
    /// Defined in RFC 1035.
    (PTR => 12, "PTR")

    /// A mail exchange.
    ///
    /// Defined in RFC 1035.
    (MX => 15, "MX")

    /// Text strings.
    ///
    /// Defined in RFC 1035.
    (TXT => 16, "TXT")

    /// The IPv6 address of a host.
    ///
    /// Defined in RFC 3596.
    (AAAA => 28, "AAAA")

    /// The location of a service.
    ///
    /// Defined in RFC 2782.
    (SRV => 33, "SRV")

    /// A delegation signer.
    ///
    /// Defined in RFC 4034.
    (DS => 43, "DS")

    /// An SSH public key fingerprint.
    ///
    /// Defined in RFC 4255.
    (SSHFP => 44, "SSHFP")

    /// A DNSSEC signature over a record set.
    ///
    /// Defined in RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// Authenticated denial of existence.
    ///
    /// Defined in RFC 4034.
    (NSEC => 47, "NSEC")

    /// A DNSSEC public key.
    ///
    /// Defined in RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// Hashed authenticated denial of existence.
    ///
    /// Defined in RFC 5155.
    (NSEC3 => 50, "NSEC3")

    /// A TLS server certificate association.
    ///
    /// Defined in RFC 6698.
    (TLSA => 52, "TLSA")

    /// An OpenPGP public key.
    ///
    /// Defined in RFC 7929.
    (OPENPGPKEY => 61, "OPENPGPKEY")

    /// A general purpose service binding.
    ///
    /// Defined in RFC 9460.
    (SVCB => 64, "SVCB")

    /// A service binding for HTTPS.
    ///
    /// Defined in RFC 9460.
    (HTTPS => 65, "HTTPS")

    /// All records available for a name.
    ///
    /// This value can only appear in questions. Defined in RFC 1035.
    (ANY => 255, "ANY")

    /// A certification authority restriction.
    ///
    /// Defined in RFC 8659.
    (CAA => 257, "CAA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16, "unknown record type");

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Rtype;
    use std::str::FromStr;

    #[test]
    fn registry_values() {
        assert_eq!(Rtype::CNAME.to_int(), 5);
        assert_eq!(Rtype::SSHFP.to_int(), 44);
        assert_eq!(Rtype::RRSIG.to_int(), 46);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Rtype::AAAA), "Rtype::AAAA");
        assert_eq!(format!("{:?}", Rtype::from_int(1000)), "Rtype(1000)");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rtype::SSHFP), "SSHFP");
        assert_eq!(format!("{}", Rtype::from_int(1000)), "TYPE1000");
    }

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("sshfp").unwrap(), Rtype::SSHFP);
        assert_eq!(
            Rtype::from_str("TYPE1000").unwrap(),
            Rtype::from_int(1000)
        );
        assert!(Rtype::from_str("FOO").is_err());
    }
}
