use anyhow::Result;
use colored::Colorize;

use cloudpal_rs::clock::TimeOfDay;
use cloudpal_rs::palettes::registry::{BuiltinPalette, PaletteRegistry};

use crate::common::palette_strip;

pub(crate) fn palette_list() -> Result<()> {
	let registry = PaletteRegistry::builtin();
	let time_based = TimeOfDay::now().palette();

	for which in BuiltinPalette::ALL {
		let pal = registry.palette(which);
		let marker = if which == time_based { "  (current time of day)" } else { "" };

		// pad before colorizing, the escape codes would throw off the column width
		let name = format!("{:>8}", which.name()).bold();
		println!("{name}  {}  {} colors{marker}", palette_strip(pal), pal.len());
	}

	Ok(())
}
