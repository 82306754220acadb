// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Date, DateTime, MICROS_PER_SECOND, SECONDS_PER_DAY};
use crate::error::{Result, TypeError};

const DATE_FORMAT: &str = "YYYY-MM-DD";
const DATETIME_FORMAT: &str = "YYYY-MM-DD HH:MM:SS[.ffffff]";

pub fn parse_date(text: &str) -> Result<Date> {
	parse_date_part(text).ok_or_else(|| TypeError::InvalidTemporal {
		text: text.to_string(),
		target: "date",
		format: DATE_FORMAT,
	})
}

pub fn parse_datetime(text: &str) -> Result<DateTime> {
	parse_datetime_parts(text).ok_or_else(|| TypeError::InvalidTemporal {
		text: text.to_string(),
		target: "datetime",
		format: DATETIME_FORMAT,
	})
}

fn parse_date_part(text: &str) -> Option<Date> {
	let mut parts = text.splitn(3, '-');
	let year = parts.next()?;
	let month = parts.next()?;
	let day = parts.next()?;

	if year.len() != 4 || month.len() != 2 || day.len() != 2 {
		return None;
	}

	Date::from_ymd(digits(year)? as i32, digits(month)?, digits(day)?)
}

fn parse_datetime_parts(text: &str) -> Option<DateTime> {
	let (date, time) = text.split_once([' ', 'T'])?;
	let date = parse_date_part(date)?;

	let (clock, fraction) = match time.split_once('.') {
		Some((clock, fraction)) => (clock, Some(fraction)),
		None => (time, None),
	};

	let mut parts = clock.splitn(3, ':');
	let hour = two_digits(parts.next()?)?;
	let minute = two_digits(parts.next()?)?;
	let second = two_digits(parts.next()?)?;
	if hour > 23 || minute > 59 || second > 59 {
		return None;
	}

	let micros = match fraction {
		None => 0,
		Some(fraction) if fraction.is_empty() || fraction.len() > 9 => return None,
		Some(fraction) => {
			// Truncate to microseconds.
			let kept = &fraction[..fraction.len().min(6)];
			let value = digits(kept)? as i64;
			value * 10_i64.pow(6 - kept.len() as u32)
		}
	};
	if let Some(fraction) = fraction {
		digits(fraction)?;
	}

	let seconds = date.days_since_epoch() as i64 * SECONDS_PER_DAY
		+ hour as i64 * 3600
		+ minute as i64 * 60
		+ second as i64;
	Some(DateTime::from_micros(seconds * MICROS_PER_SECOND + micros))
}

fn two_digits(text: &str) -> Option<u32> {
	if text.len() != 2 {
		return None;
	}
	digits(text)
}

fn digits(text: &str) -> Option<u32> {
	if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	text.parse().ok()
}
