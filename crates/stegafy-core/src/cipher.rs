//! Keyword substitution cipher for text secrets.
//!
//! Every letter of the message is shifted forward in `A..=Z` by the matching
//! letter of the repeated keyword. The keyword travels in front of the cipher
//! text, separated by [`KEYWORD_END`]:
//!
//! ```rust
//! use stegafy_core::cipher::{decrypt, encrypt};
//!
//! let envelope = encrypt("Hello", "KEY");
//! assert_eq!(envelope, "KEY#KEY#RIJVS");
//!
//! let decrypted = decrypt(&envelope).expect("envelope carries a keyword");
//! assert_eq!(decrypted.plain_text, "HELLO");
//! assert_eq!(decrypted.keyword, "KEY");
//! assert_eq!(decrypted.cipher_text, "RIJVS");
//! ```
//!
//! Only letters survive: spaces, digits and punctuation are dropped before
//! shifting and are not restored by [`decrypt`].

use log::trace;

use crate::error::StegafyError;
use crate::result::Result;

/// separates the keyword from the cipher text
pub const KEYWORD_END: &str = "#KEY#";

const ALPHABET_LEN: u8 = 26;

/// Outcome of [`decrypt`], the still encrypted parts are kept for display.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Decrypted {
    pub plain_text: String,
    pub keyword: String,
    pub cipher_text: String,
}

/// Encrypts `plain_text` and prepends the keyword.
///
/// An empty keyword means no encryption, `plain_text` is returned as is.
pub fn encrypt(plain_text: &str, keyword: &str) -> String {
    if keyword.is_empty() {
        return plain_text.to_string();
    }
    let cipher_text = shift_all(plain_text, keyword, |c, k| (c + k) % ALPHABET_LEN);
    trace!(
        "encrypted {} letters with a keyword of {} characters",
        cipher_text.len(),
        keyword.len()
    );

    format!("{keyword}{KEYWORD_END}{cipher_text}")
}

/// Splits an envelope at the first [`KEYWORD_END`] and reverses the shift.
pub fn decrypt(envelope: &str) -> Result<Decrypted> {
    let (keyword, cipher_text) = envelope
        .split_once(KEYWORD_END)
        .ok_or(StegafyError::InvalidCipherEnvelope)?;
    let plain_text = shift_all(cipher_text, keyword, |c, k| {
        (c + ALPHABET_LEN - k) % ALPHABET_LEN
    });

    Ok(Decrypted {
        plain_text,
        keyword: keyword.to_string(),
        cipher_text: cipher_text.to_string(),
    })
}

/// Upper cases the letters of `text`, drops everything else and maps each
/// letter with the keyword letter at the same position.
///
/// Only the letters of the keyword count, a keyword without any letters
/// leaves the text unshifted.
fn shift_all(text: &str, keyword: &str, shift: impl Fn(u8, u8) -> u8) -> String {
    let key: Vec<u8> = letter_offsets(keyword).collect();
    letter_offsets(text)
        .enumerate()
        .map(|(i, c)| {
            let k = if key.is_empty() { 0 } else { key[i % key.len()] };
            char::from(b'A' + shift(c, k))
        })
        .collect()
}

/// offsets from `'A'` of all ascii letters
fn letter_offsets(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() - b'A')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_touch_the_text_without_keyword() {
        assert_eq!(encrypt("Hello, World!", ""), "Hello, World!");
    }

    #[test]
    fn should_prepend_the_keyword_verbatim() {
        let envelope = encrypt("abc", "key");

        assert!(envelope.starts_with("key#KEY#"));
        assert_eq!(envelope, "key#KEY#KFA");
    }

    #[test]
    fn should_wrap_past_z() {
        assert_eq!(encrypt("XYZ", "C"), "C#KEY#ZAB");
        assert_eq!(decrypt("C#KEY#ZAB").unwrap().plain_text, "XYZ");
    }

    #[test]
    fn should_strip_everything_but_letters() {
        let envelope = encrypt("Hi there, 42!", "A");

        assert_eq!(envelope, "A#KEY#HITHERE");
        assert_eq!(decrypt(&envelope).unwrap().plain_text, "HITHERE");
    }

    #[test]
    fn should_round_trip_alphabetic_messages() {
        let messages = ["HELLO", "A", "ZZZZZZ", "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"];
        let keywords = ["KEY", "Z", "A", "LONGERTHANTHEMESSAGE"];

        for message in messages {
            for keyword in keywords {
                let decrypted = decrypt(&encrypt(message, keyword)).unwrap();
                assert_eq!(
                    decrypted.plain_text, message,
                    "{message} with keyword {keyword} did not survive"
                );
                assert_eq!(decrypted.keyword, keyword);
            }
        }
    }

    #[test]
    fn should_split_at_the_first_keyword_end() {
        let decrypted = decrypt("AB#KEY#CD#KEY#EF").unwrap();

        assert_eq!(decrypted.keyword, "AB");
        assert_eq!(decrypted.cipher_text, "CD#KEY#EF");
    }

    #[test]
    fn should_fail_without_keyword_end() {
        match decrypt("RIJVS") {
            Err(StegafyError::InvalidCipherEnvelope) => (),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_ignore_non_letters_in_the_keyword() {
        assert_eq!(encrypt("abc", "1B2"), "1B2#KEY#BCD");
        assert_eq!(encrypt("abc", "123"), "123#KEY#ABC");
    }
}
