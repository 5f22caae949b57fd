//! Record set lookups through the table backend.

use bytes::Bytes;
use rrset::backend::{SecurityStatus, Table};
use rrset::iana::{Class, Rtype};
use rrset::lookup::{lookup_rrset, RrsetError};

const SSHFP_RSA: &[u8] = b"\x01\x01rsa-fingerprint";
const SSHFP_ED25519: &[u8] = b"\x04\x02ed25519-fingerprint";
const SIG_SSHFP: &[u8] = b"\x00\x2csignature-over-sshfp";
const SIG_A: &[u8] = b"\x00\x01signature-over-a";

/// Returns a table with a signed host, an alias, and an unsigned host.
fn table() -> Table {
    let mut table = Table::new();
    table.add(
        "host.example.com",
        Rtype::SSHFP,
        3600,
        Bytes::from_static(SSHFP_RSA),
    );
    table.add(
        "host.example.com",
        Rtype::A,
        300,
        Bytes::from_static(&[192, 0, 2, 1]),
    );
    table.add(
        "host.example.com",
        Rtype::SSHFP,
        3600,
        Bytes::from_static(SSHFP_ED25519),
    );
    table.add(
        "host.example.com",
        Rtype::RRSIG,
        3600,
        Bytes::from_static(SIG_SSHFP),
    );
    table.add(
        "host.example.com",
        Rtype::RRSIG,
        300,
        Bytes::from_static(SIG_A),
    );
    table.set_security("host.example.com", SecurityStatus::SECURE);
    table.add(
        "alias.example.com",
        Rtype::CNAME,
        600,
        Bytes::from_static(b"\x04host\x07example\x03com\x00"),
    );
    table.add(
        "plain.example.com",
        Rtype::A,
        300,
        Bytes::from_static(&[192, 0, 2, 2]),
    );
    table
}

#[test]
fn secure_lookup_returns_the_full_set() {
    let set = lookup_rrset(
        &table(),
        "host.example.com",
        Class::IN,
        Rtype::SSHFP,
        0,
    )
    .unwrap();

    assert_eq!(set.name(), "host.example.com");
    assert_eq!(set.class(), Class::IN);
    assert_eq!(set.rtype(), Rtype::SSHFP);
    assert_eq!(set.ttl(), 3600);
    assert!(set.is_validated());

    let rdatas: Vec<_> =
        set.rdatas().iter().map(|rdata| rdata.octets()).collect();
    assert_eq!(rdatas, [SSHFP_RSA, SSHFP_ED25519]);

    let sigs: Vec<_> = set.sigs().iter().map(|sig| sig.octets()).collect();
    assert_eq!(sigs, [SIG_SSHFP]);
}

#[test]
fn unsigned_host_is_not_validated() {
    let set = lookup_rrset(
        &table(),
        "plain.example.com",
        Class::IN,
        Rtype::A,
        0,
    )
    .unwrap();

    assert!(!set.is_validated());
    assert_eq!(set.rdatas().len(), 1);
    assert_eq!(set.rdatas()[0].octets(), &[192, 0, 2, 2]);
    assert!(set.sigs().is_empty());
}

#[test]
fn bogus_data_is_not_validated() {
    let mut table = table();
    table.set_security("host.example.com", SecurityStatus::BOGUS);

    let set = lookup_rrset(
        &table,
        "host.example.com",
        Class::IN,
        Rtype::SSHFP,
        0,
    )
    .unwrap();

    assert!(!set.is_validated());
    assert_eq!(set.rdatas().len(), 2);
}

#[test]
fn unknown_name_fails() {
    let res = lookup_rrset(
        &table(),
        "nowhere.example.com",
        Class::IN,
        Rtype::A,
        0,
    );
    assert_eq!(res.unwrap_err(), RrsetError::Failed);
}

#[test]
fn known_name_without_matching_records_is_no_data() {
    let res = lookup_rrset(
        &table(),
        "plain.example.com",
        Class::IN,
        Rtype::SSHFP,
        0,
    );
    assert_eq!(res.unwrap_err(), RrsetError::NoData);
}

#[test]
fn signatures_alone_do_not_make_data() {
    // The signed host has no TXT records, but its RRSIG records still
    // show up in the answer. That counts as an answer, just one without
    // data records or covering signatures.
    let set = lookup_rrset(
        &table(),
        "host.example.com",
        Class::IN,
        Rtype::TXT,
        0,
    )
    .unwrap();

    assert!(set.rdatas().is_empty());
    assert!(set.sigs().is_empty());
    assert_eq!(set.ttl(), 0);
}

#[test]
fn alias_answers_come_back_empty() {
    let set = lookup_rrset(
        &table(),
        "alias.example.com",
        Class::IN,
        Rtype::A,
        0,
    )
    .unwrap();

    assert!(set.rdatas().is_empty());
    assert_eq!(set.ttl(), 0);
}

#[test]
fn nonzero_flags_are_rejected() {
    for flags in [1, 2, u32::MAX] {
        let res = lookup_rrset(
            &table(),
            "host.example.com",
            Class::IN,
            Rtype::SSHFP,
            flags,
        );
        assert_eq!(res.unwrap_err(), RrsetError::InvalidArgument);
    }
}

#[test]
fn only_class_in_is_supported() {
    for class in [Class::CH, Class::HS, Class::ANY] {
        let res = lookup_rrset(
            &table(),
            "host.example.com",
            class,
            Rtype::SSHFP,
            0,
        );
        assert_eq!(res.unwrap_err(), RrsetError::Failed, "class {class}");
    }
}

#[test]
fn malformed_names_fail() {
    let res =
        lookup_rrset(&table(), "host..example.com", Class::IN, Rtype::A, 0);
    assert_eq!(res.unwrap_err(), RrsetError::Failed);
}

#[test]
fn lookups_ignore_case_and_trailing_dot() {
    let set = lookup_rrset(
        &table(),
        "HOST.example.COM.",
        Class::IN,
        Rtype::SSHFP,
        0,
    )
    .unwrap();

    assert_eq!(set.rdatas().len(), 2);
    assert_eq!(set.name(), "HOST.example.COM.");
}

#[test]
fn ttl_comes_from_the_first_record() {
    let mut table = Table::new();
    table.add("ttl.example.com", Rtype::A, 100, Bytes::from_static(b"\x01"));
    table.add("ttl.example.com", Rtype::A, 200, Bytes::from_static(b"\x02"));

    let set =
        lookup_rrset(&table, "ttl.example.com", Class::IN, Rtype::A, 0)
            .unwrap();
    assert_eq!(set.ttl(), 100);
}
