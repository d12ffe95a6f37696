use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

impl Palette {
	/// Parses a JSON array of hexadecimal color strings, e.g. ["#2c3e50", "#e74c3c"].
	pub fn from_json_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let colors: Vec<String> = serde_json::from_str(&s)
			.map_err(|e| PaletteError::InvalidJson { msg: e.to_string() })?;

		if colors.len() > MAX_PALETTE_COLORS {
			return Err(PaletteError::TooManyColors);
		}

		let colors = colors.iter().enumerate().map(|(i, c)| {
			Color::from_hex(c).ok_or_else(|| PaletteError::InvalidJsonEntry {
				index: i,
				msg: format!("\"{}\" is not a valid hexadecimal color value", c.trim()),
			})
		}).collect::<Result<Vec<Color>, PaletteError>>()?;

		if colors.is_empty() {
			return Err(PaletteError::Empty);
		}

		Ok(Palette::from(colors))
	}
}
