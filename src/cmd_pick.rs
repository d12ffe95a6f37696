use anyhow::{anyhow, Result};

use crate::commands::PickArgs;
use crate::common::{resolve_cli_palette, swatch};

pub(crate) fn palette_pick(args: &PickArgs) -> Result<()> {
	let (name, pal) = resolve_cli_palette(&args.palette, &args.colors)?;

	let color = pal.color_for_frequency(args.frequency, args.max_frequency).map_err(|e| anyhow!(e))?;

	println!("{} {color}  ({name}, {}/{})", swatch(color), args.frequency, args.max_frequency);

	Ok(())
}
