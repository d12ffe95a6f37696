use std::fmt::{Display, Formatter};

use chrono::{Local, Timelike};
use regex::{Captures, Regex};

use crate::palettes::registry::BuiltinPalette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeOfDay {
	Morning,
	Afternoon,
	Evening,
	Night,
}

impl TimeOfDay {
	/// Buckets an hour of day: [6,12) is morning, [12,17) afternoon, [17,20) evening,
	/// everything else night. Hours above 23 land in the night bucket.
	pub fn from_hour(hour: u32) -> TimeOfDay {
		match hour {
			6..=11 => TimeOfDay::Morning,
			12..=16 => TimeOfDay::Afternoon,
			17..=19 => TimeOfDay::Evening,
			_ => TimeOfDay::Night,
		}
	}

	/// The bucket for the current local hour.
	pub fn now() -> TimeOfDay {
		TimeOfDay::from_hour(local_hour())
	}

	/// The built-in palette associated with this time of day.
	pub fn palette(&self) -> BuiltinPalette {
		match self {
			TimeOfDay::Morning => BuiltinPalette::Nature,
			TimeOfDay::Afternoon => BuiltinPalette::Default,
			TimeOfDay::Evening => BuiltinPalette::Pastel,
			TimeOfDay::Night => BuiltinPalette::Dark,
		}
	}
}

impl Display for TimeOfDay {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TimeOfDay::Morning => write!(f, "morning"),
			TimeOfDay::Afternoon => write!(f, "afternoon"),
			TimeOfDay::Evening => write!(f, "evening"),
			TimeOfDay::Night => write!(f, "night"),
		}
	}
}

/// Reads the current hour of day from the local wall clock.
pub fn local_hour() -> u32 {
	Local::now().hour()
}

/// Takes a clock time like "17" or "17:30" and parses the hour out of it.
pub fn parse_clock_time(s: &str) -> Option<u32> {
	let re = Regex::new(r"^(?P<hours>\d{1,2})(?::(?P<minutes>[0-5]\d))?$").unwrap();

	let groups: Captures = match re.captures(s.trim()) {
		None => { return None; }
		Some(captures) => captures
	};

	let hour = groups.name("hours")?.as_str().parse::<u32>().ok()?;
	if hour > 23 {
		return None;
	}

	Some(hour)
}
