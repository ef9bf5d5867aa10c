//! Known-answer vectors for the mnemonic codec.
//!
//! Expected phrases were produced by the reference wallet implementation over
//! the synthetic fixture wordlist (unique prefix length 3).

use crate::common::fixture_wordlist;

// Each vector: (hex seed, full phrase including both checksum words).
const VECTORS: &[(&str, &str)] = &[
    ("", " abacus"),
    ("aabbccdd", "cdsen awren aogen awren bjhen"),
    ("00000000", "abacus abacus abacus abacus anzen"),
    ("ffffffff", "asven bxwen bxuen asven bspen"),
    (
        "0123456789abcdef",
        "cglen apwen bpben aslen aauen chhen chhen bjfen",
    ),
];

#[test]
fn encode_matches_vectors() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    for (seed, phrase) in VECTORS {
        assert_eq!(codec.encode(seed).unwrap(), *phrase, "seed '{seed}'");
    }
}

#[test]
fn decode_matches_vectors() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    for (seed, phrase) in VECTORS {
        assert_eq!(codec.decode(phrase).unwrap(), *seed, "phrase '{phrase}'");
        assert_eq!(codec.decode_verified(phrase).unwrap(), *seed);
    }
}

#[test]
fn standard_24_word_phrase() {
    // 8 groups: the first checksum digest covers exactly the 24 data words.
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    let seed = "deadbeef".repeat(8);
    let expected = "afken bbben axaen ".repeat(8) + "afken cfzen";
    assert_eq!(codec.encode(&seed).unwrap(), expected);
}

#[test]
fn long_phrase_digests_only_standard_window() {
    // 9 groups = 27 data words; checksums only see the first 24 (and 25).
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    let seed = "11223344".repeat(9);
    let expected = "agxen cdien ajken ".repeat(9) + "cdien bvfen";
    let phrase = codec.encode(&seed).unwrap();
    assert_eq!(phrase, expected);
    assert_eq!(phrase.split(' ').count(), 29);
    assert_eq!(codec.decode(&phrase).unwrap(), seed);
}
