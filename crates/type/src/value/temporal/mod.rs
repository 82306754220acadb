// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

mod parse;

pub use parse::{parse_date, parse_datetime};

/// Calendar date stored as days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(i32);

/// Timestamp without zone stored as microseconds since 1970-01-01 00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(i64);

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

impl Date {
	pub fn from_days(days: i32) -> Self {
		Self(days)
	}

	pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
		if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
			return None;
		}
		Some(Self(days_from_civil(year, month, day)))
	}

	pub fn days_since_epoch(&self) -> i32 {
		self.0
	}

	pub fn ymd(&self) -> (i32, u32, u32) {
		civil_from_days(self.0)
	}
}

impl DateTime {
	pub fn from_micros(micros: i64) -> Self {
		Self(micros)
	}

	pub fn micros_since_epoch(&self) -> i64 {
		self.0
	}

	pub fn date(&self) -> Date {
		let days = self.0.div_euclid(SECONDS_PER_DAY * MICROS_PER_SECOND);
		Date(days as i32)
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (year, month, day) = self.ymd();
		write!(f, "{:04}-{:02}-{:02}", year, month, day)
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let day_micros = SECONDS_PER_DAY * MICROS_PER_SECOND;
		let time = self.0.rem_euclid(day_micros);
		let seconds = time / MICROS_PER_SECOND;
		let fraction = time % MICROS_PER_SECOND;
		write!(f, "{} {:02}:{:02}:{:02}", self.date(), seconds / 3600, (seconds / 60) % 60, seconds % 60)?;
		if fraction != 0 {
			write!(f, ".{:06}", fraction)?;
		}
		Ok(())
	}
}

pub(crate) fn is_leap_year(year: i32) -> bool {
	(year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 if is_leap_year(year) => 29,
		2 => 28,
		_ => 0,
	}
}

// Howard Hinnant's days_from_civil / civil_from_days.
fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
	let y = if month <= 2 {
		year - 1
	} else {
		year
	};
	let era = y.div_euclid(400);
	let yoe = y - era * 400;
	let m = month as i32;
	let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i32 - 1;
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
	era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i32) -> (i32, u32, u32) {
	let z = days + 719_468;
	let era = z.div_euclid(146_097);
	let doe = z - era * 146_097;
	let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
	let month = (if mp < 10 {
		mp + 3
	} else {
		mp - 9
	}) as u32;
	let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
	(year, month, day)
}
