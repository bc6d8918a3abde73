//! Credential line parsing.
//!
//! The calling PAM module writes a single line `"<username> <password>\n"`
//! to our stdin. The line is split on one space character; anything other
//! than exactly two tokens is rejected. Each token is then trimmed.
//!
//! The line must be UTF-8. Earlier versions of this helper forwarded raw
//! bytes to Crowd; a password that is not valid UTF-8 is now a read error
//! and the attempt ends as a system error.

use std::fmt;
use std::io::BufRead;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ReadError, ReadResult};

/// A username/password pair read from the input stream.
///
/// The `Debug` output redacts both fields.
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Reads one line from `input` and parses it into [`Credentials`].
///
/// Only the first line is consumed. A final line without a terminator is
/// accepted. Non-UTF-8 input surfaces as [`ReadError::Io`].
pub fn read_credentials<R: BufRead>(mut input: R) -> ReadResult<Credentials> {
    let mut buf = String::new();
    let read = input.read_line(&mut buf)?;
    // Wipe the raw line (it holds the plaintext password) when we return.
    let line = SecretString::from(buf);

    if read == 0 {
        return Err(ReadError::Empty);
    }

    parse_line(line.expose_secret())
}

fn parse_line(line: &str) -> ReadResult<Credentials> {
    let mut tokens = line.split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(username), Some(password), None) => {
            Ok(Credentials::new(username.trim(), password.trim()))
        }
        _ => Err(ReadError::TokenCount(line.split(' ').count())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> ReadResult<Credentials> {
        read_credentials(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn parses_two_tokens() {
        let creds = read("alice secret123\n").unwrap();
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password().expose_secret(), "secret123");
    }

    #[test]
    fn trims_tokens() {
        let creds = read("\talice\t pw\r\n").unwrap();
        assert_eq!(creds.username(), "alice");
        assert_eq!(creds.password().expose_secret(), "pw");
    }

    #[test]
    fn accepts_missing_terminator() {
        let creds = read("bob wrongpass").unwrap();
        assert_eq!(creds.username(), "bob");
        assert_eq!(creds.password().expose_secret(), "wrongpass");
    }

    #[test]
    fn only_first_line_is_consumed() {
        let mut cursor = Cursor::new("carol pw\ndave other\n".as_bytes());
        let creds = read_credentials(&mut cursor).unwrap();
        assert_eq!(creds.username(), "carol");

        let creds = read_credentials(&mut cursor).unwrap();
        assert_eq!(creds.username(), "dave");
    }

    #[test]
    fn empty_tokens_are_not_rejected() {
        // Non-emptiness is not the parser's concern.
        let creds = read(" pw\n").unwrap();
        assert_eq!(creds.username(), "");
        assert_eq!(creds.password().expose_secret(), "pw");
    }

    #[test]
    fn rejects_single_token() {
        assert!(matches!(read("onlyusername\n"), Err(ReadError::TokenCount(1))));
    }

    #[test]
    fn rejects_three_or_more_tokens() {
        assert!(matches!(read("a b c\n"), Err(ReadError::TokenCount(3))));
        assert!(matches!(read("a b c d\n"), Err(ReadError::TokenCount(4))));
        // Password containing a space.
        assert!(matches!(read("alice my secret\n"), Err(ReadError::TokenCount(3))));
    }

    #[test]
    fn rejects_double_space_and_trailing_space() {
        assert!(matches!(read("alice  pw\n"), Err(ReadError::TokenCount(3))));
        assert!(matches!(read("alice pw \n"), Err(ReadError::TokenCount(3))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(read(""), Err(ReadError::Empty)));
        assert!(matches!(read("\n"), Err(ReadError::TokenCount(1))));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'a', b' ', 0xff, 0xfe, b'\n'];
        assert!(matches!(
            read_credentials(Cursor::new(bytes)),
            Err(ReadError::Io(_))
        ));
    }

    #[test]
    fn debug_is_redacted() {
        let creds = Credentials::new("alice", "secret123");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("alice"));
        assert!(!rendered.contains("secret123"));
    }
}
