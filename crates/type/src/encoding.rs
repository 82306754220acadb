// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Byte level conventions shared with the dictionary writer.
//!
//! Dictionaries store every member as text in [`DEFAULT_CHARSET`]. A member whose bytes equal
//! [`MEMBER_DEFAULT_VALUE`] stands for SQL NULL.

use crate::error::{Result, TypeError};

/// Reserved member written for NULL values when the dictionary was built.
pub const MEMBER_DEFAULT_VALUE: &str = "@NU#LL$!";

pub const MEMBER_DEFAULT_VALUE_BYTES: &[u8] = MEMBER_DEFAULT_VALUE.as_bytes();

/// Charset used for every byte to text conversion of dictionary members.
pub const DEFAULT_CHARSET: &str = "UTF-8";

#[inline]
pub fn is_member_default(bytes: &[u8]) -> bool {
	bytes == MEMBER_DEFAULT_VALUE_BYTES
}

pub fn decode_text(bytes: &[u8]) -> Result<&str> {
	std::str::from_utf8(bytes).map_err(|err| TypeError::InvalidEncoding {
		charset: DEFAULT_CHARSET,
		valid_up_to: err.valid_up_to(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_member_default_detection() {
		assert!(is_member_default(b"@NU#LL$!"));
		assert!(!is_member_default(b"@NU#LL$"));
		assert!(!is_member_default(b""));
	}

	#[test]
	fn test_decode_text_utf8() {
		assert_eq!(decode_text("Zürich".as_bytes()).unwrap(), "Zürich");
	}

	#[test]
	fn test_decode_text_invalid() {
		let err = decode_text(&[b'a', 0xff, b'b']).unwrap_err();
		assert_eq!(
			err,
			TypeError::InvalidEncoding {
				charset: DEFAULT_CHARSET,
				valid_up_to: 1
			}
		);
	}
}
