use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/hex_file.cpp

impl Palette {
	/// Parses a text list of hexadecimal color values, one per line.
	/// Blank lines and lines starting with "#" are skipped.
	pub fn from_hex_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let mut pal = Palette::default();

		for (i, line) in s.lines().enumerate() {
			let trimmed_line = line.trim();
			if trimmed_line.is_empty() || trimmed_line.starts_with("#") {
				continue;
			}

			// "0x" prefixes are tolerated per value; "#" starts a comment line in this format
			let color = Color::from_hex(trimmed_line)
				.ok_or_else(|| PaletteError::InvalidTextLine { line: i + 1, msg: "Not a hexadecimal color value".to_string() })?;

			pal.push_color(color);

			if pal.len() > MAX_PALETTE_COLORS {
				return Err(PaletteError::TooManyColors);
			}
		}

		if pal.is_empty() {
			return Err(PaletteError::Empty);
		}

		Ok(pal)
	}
}
