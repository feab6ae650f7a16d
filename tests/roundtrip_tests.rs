//! tests/roundtrip_tests.rs
//! encode → decode across sizes, key lengths and window boundaries

mod common;
use common::{pattern, TEST_AES_KEY, TEST_MAC_KEY, WINDOW};

use aesctr_stream::{decode, decode_to_vec, encode, encode_to_vec, SessionKeys};

#[test]
fn roundtrip_boundary_sizes() {
    let cases = [
        1usize,
        2,
        15,
        16,
        17,
        63,
        64,
        65,
        127,
        128,
        129,
        WINDOW - 65,
        WINDOW - 64,
        WINDOW - 63,
        WINDOW - 1,
        WINDOW,
        WINDOW + 1,
        WINDOW + 63,
        WINDOW + 64,
        WINDOW + 65,
        2 * WINDOW,
        2 * WINDOW - 64,
        3 * WINDOW + 1,
    ];

    for len in cases {
        let plaintext = pattern(len);
        let container = encode_to_vec(&plaintext, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap();
        let decoded = decode_to_vec(&container, &TEST_AES_KEY, &TEST_MAC_KEY)
            .unwrap_or_else(|e| panic!("decode failed for {len} bytes: {e}"));
        assert_eq!(decoded, plaintext, "len {len}");
    }
}

#[test]
fn roundtrip_exact_window_multiples() {
    for windows in 1..=4 {
        let plaintext = pattern(windows * WINDOW);
        let container = encode_to_vec(&plaintext, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap();
        assert_eq!(
            decode_to_vec(&container, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap(),
            plaintext,
            "{windows} windows"
        );
    }
}

#[test]
fn roundtrip_several_mebibytes() {
    let plaintext = pattern(3 * 1024 * 1024 + 12_345);
    let keys = SessionKeys::generate_default().unwrap();

    let mut container = Vec::new();
    encode(plaintext.as_slice(), &mut container, keys.aes_key(), keys.mac_key()).unwrap();
    assert_eq!(container.len(), plaintext.len() + 81);

    let mut decoded = Vec::new();
    decode(container.as_slice(), &mut decoded, keys.aes_key(), keys.mac_key()).unwrap();
    assert_eq!(decoded, plaintext);
}

#[test]
fn roundtrip_all_key_sizes() {
    for (aes_len, mac_len) in [(16, 1), (24, 32), (32, 64), (32, 200)] {
        let keys = SessionKeys::generate(aes_len, mac_len).unwrap();
        let plaintext = pattern(1000);
        let container = encode_to_vec(&plaintext, keys.aes_key(), keys.mac_key()).unwrap();
        assert_eq!(
            decode_to_vec(&container, keys.aes_key(), keys.mac_key()).unwrap(),
            plaintext,
            "aes {aes_len} / mac {mac_len}"
        );
    }
}

#[test]
fn two_encodes_differ_but_both_decode() {
    let plaintext = b"same message, same keys";
    let a = encode_to_vec(plaintext, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap();
    let b = encode_to_vec(plaintext, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap();
    assert_ne!(a, b);
    assert_eq!(decode_to_vec(&a, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap(), plaintext);
    assert_eq!(decode_to_vec(&b, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap(), plaintext);
}

#[test]
fn roundtrip_unicode_text() {
    let plaintext = "パスワード123!@# — ünïcödé".as_bytes();
    let container = encode_to_vec(plaintext, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap();
    assert_eq!(
        decode_to_vec(&container, &TEST_AES_KEY, &TEST_MAC_KEY).unwrap(),
        plaintext
    );
}
