use anyhow::{anyhow, Result};

use cloudpal_rs::clock::{local_hour, parse_clock_time, TimeOfDay};
use cloudpal_rs::palettes::registry::PaletteRegistry;

use crate::commands::NowArgs;
use crate::common::palette_strip;

pub(crate) fn palette_now(args: &NowArgs) -> Result<()> {
	let hour = match &args.at {
		Some(at) => parse_clock_time(at).ok_or_else(|| anyhow!("\"{at}\" is not a valid clock time"))?,
		None => local_hour(),
	};

	let time_of_day = TimeOfDay::from_hour(hour);
	let which = time_of_day.palette();
	let pal = PaletteRegistry::builtin().palette(which);

	println!("hour {hour:02} is {time_of_day}, which gets the \"{which}\" palette:");
	println!("{}", palette_strip(pal));

	Ok(())
}
