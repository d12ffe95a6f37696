use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::palettes::MAX_PALETTE_COLORS;

const GRADIENT_ANGLE_DEG: u32 = 45;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses a single hexadecimal color value like "#2c3e50", "0x2C3E50", or "2c3e50".
	/// Values wider than 24 bits keep their low 24 bits.
	pub fn from_hex(s: &str) -> Option<Color> {
		let trimmed = s.trim();
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		u32::from_str_radix(stripped, 16).ok().map(Color::from)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{rgb:06x}")
	}
}

impl Serialize for Color {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.colors.push(c);
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Maps a frequency within [0, max_frequency] onto this palette's colors:
	/// floor(frequency / max_frequency * (len - 1)), clamped to valid indices
	/// so out-of-range frequencies yield the first or last color.
	pub fn color_for_frequency(&self, frequency: f64, max_frequency: f64) -> Result<Color, PaletteError> {
		if self.colors.is_empty() {
			return Err(PaletteError::Empty);
		}
		if !max_frequency.is_finite() || max_frequency <= 0.0 {
			return Err(PaletteError::InvalidMaxFrequency(max_frequency));
		}

		let last = (self.colors.len() - 1) as f64;
		let ratio = frequency / max_frequency;
		let index = (ratio * last).floor().clamp(0.0, last) as usize;

		Ok(self.colors[index])
	}

	/// Joins the colors into a CSS linear-gradient descriptor at a fixed 45° angle.
	pub fn css_gradient(&self) -> String {
		let colors = self.colors.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(", ");
		format!("linear-gradient({GRADIENT_ANGLE_DEG}deg, {colors})")
	}

	pub fn gradient(&self) -> Gradient {
		Gradient {
			colors: self.colors.clone(),
			css_gradient: self.css_gradient(),
		}
	}
}

impl From<Vec<u32>> for Palette {
	fn from(v: Vec<u32>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(Color::from(c));
		}
		pal
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(c);
		}
		pal
	}
}

/// A palette's colors plus the derived CSS descriptor, serialized in the
/// JSON shape web consumers expect: { "colors": […], "cssGradient": "…" }.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gradient {
	pub colors: Vec<Color>,
	#[serde(rename = "cssGradient")]
	pub css_gradient: String,
}

#[derive(Debug)]
pub enum PaletteError {
	Empty,
	TooManyColors,
	InvalidMaxFrequency(f64),
	InvalidTextLine { line: usize, msg: String },
	InvalidJson { msg: String },
	InvalidJsonEntry { index: usize, msg: String },
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::Empty => write!(f, "The palette is empty"),
			PaletteError::TooManyColors => write!(f, "The palette contains more than {MAX_PALETTE_COLORS} colors"),
			PaletteError::InvalidMaxFrequency(max) => write!(f, "{max} is not a valid maximum frequency"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::InvalidJson { msg } => write!(f, "Invalid JSON document: {msg}"),
			PaletteError::InvalidJsonEntry { index, msg } => write!(f, "Invalid JSON array item at index {index}: {msg}"),
		}
	}
}
