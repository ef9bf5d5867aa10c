//! Integration tests for the full encode → verify → decode lifecycle.

use crate::common::fixture_wordlist;
use seedwords_core::{MnemonicError, WORDLIST_SIZE};

/// Encode, strip the checksum words, decode.
#[test]
fn encode_strip_decode() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    let seed = "aabbccdd";

    let phrase = codec.encode(seed).unwrap();
    let words: Vec<&str> = phrase.split(' ').collect();
    assert_eq!(words.len(), 5, "3 data words + 2 checksum words");

    let data = words[..3].join(" ");
    assert_eq!(codec.decode(&data).unwrap(), seed);
}

/// The empty seed encodes to checksum words only and decodes back to "".
#[test]
fn empty_seed_lifecycle() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();

    let phrase = codec.encode("").unwrap();
    let words: Vec<&str> = phrase.split(' ').collect();
    assert_eq!(words.len(), 2);

    assert_eq!(codec.decode(&words[..0].join(" ")).unwrap(), "");
    assert_eq!(codec.decode_verified(&phrase).unwrap(), "");
}

/// Every phrase word comes from the wordlist (bar the empty-seed checksum).
#[test]
fn phrase_words_belong_to_wordlist() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    let phrase = codec
        .encode("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")
        .unwrap();
    let words: Vec<&str> = phrase.split(' ').collect();
    assert_eq!(words.len(), 26);
    for word in &words {
        assert!(wordlist.contains(word), "'{word}' not in wordlist");
    }
}

/// A single substituted data word is caught by verification.
#[test]
fn transcription_error_detected() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    let phrase = codec.encode("0123456789abcdef").unwrap();
    let mut words: Vec<&str> = phrase.split(' ').collect();

    let replacement = wordlist.word(WORDLIST_SIZE - 1).unwrap();
    assert_ne!(words[1], replacement);
    words[1] = replacement;
    let tampered = words.join(" ");

    // decode alone does not notice, decode_verified does.
    assert!(codec.decode(&tampered).is_ok());
    assert_eq!(
        codec.decode_verified(&tampered),
        Err(MnemonicError::ChecksumMismatch)
    );
}

/// Decoding is deterministic and case-normalizing.
#[test]
fn uppercase_seed_decodes_lowercase() {
    let wordlist = fixture_wordlist();
    let codec = wordlist.codec();
    let phrase = codec.encode("DEADBEEFCAFEBABE").unwrap();
    assert_eq!(codec.decode(&phrase).unwrap(), "deadbeefcafebabe");
}

#[test]
fn encoded_phrase_snapshot() {
    let wordlist = fixture_wordlist();
    let phrase = wordlist.codec().encode("aabbccdd").unwrap();
    insta::assert_snapshot!(phrase, @"cdsen awren aogen awren bjhen");
}
