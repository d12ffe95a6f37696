use anyhow::{anyhow, Result};
use colored::Colorize;

use cloudpal_rs::palettes::palette::{Color, Palette, PaletteError};
use cloudpal_rs::palettes::registry::{DEFAULT_PALETTE_NAME, PaletteRegistry};

/// Parses a comma- or whitespace-separated list of hexadecimal colors.
pub(crate) fn parse_color_list(list: &str) -> Result<Palette, PaletteError> {
	let entries = list.split([',', ' ', '\t'])
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		// "#" starts a comment line in the hex list format, so strip it per entry
		.map(|s| s.strip_prefix('#').unwrap_or(s))
		.collect::<Vec<&str>>()
		.join("\n");

	Palette::from_hex_string(entries)
}

/// Resolves the --palette/--colors argument pair into a labeled palette.
/// Unknown palette names warn and fall back to the default palette.
pub(crate) fn resolve_cli_palette(palette_name: &Option<String>, colors: &Option<String>) -> Result<(String, Palette)> {
	if let Some(list) = colors {
		let pal = parse_color_list(list).map_err(|e| anyhow!(e))?;
		return Ok(("custom".to_string(), pal));
	}

	let registry = PaletteRegistry::builtin();
	if let Some(name) = palette_name {
		return match registry.get(name) {
			Some(pal) => Ok((name.clone(), pal.clone())),
			None => {
				eprintln!("NOTE: Unknown palette \"{name}\", using the default palette!");
				Ok((DEFAULT_PALETTE_NAME.to_string(), registry.resolve(None).clone()))
			}
		};
	}

	Ok((DEFAULT_PALETTE_NAME.to_string(), registry.resolve(None).clone()))
}

pub(crate) fn swatch(color: Color) -> String {
	format!("{}", "    ".on_truecolor(color.r, color.g, color.b))
}

/// A one-line strip of all colors in the palette.
pub(crate) fn palette_strip(pal: &Palette) -> String {
	pal.colors.iter()
		.map(|c| format!("{}", "  ".on_truecolor(c.r, c.g, c.b)))
		.collect::<Vec<String>>()
		.join("")
}

pub(crate) fn print_palette(name: &str, pal: &Palette) {
	println!("{} ({} colors)", name.bold(), pal.len());
	for color in &pal.colors {
		println!("  {} {color}", swatch(*color));
	}
}
