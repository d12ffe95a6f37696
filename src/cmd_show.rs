use anyhow::Result;
use serde::Serialize;

use cloudpal_rs::palettes::palette::Gradient;

use crate::commands::ShowArgs;
use crate::common::{print_palette, resolve_cli_palette};

#[derive(Serialize)]
struct PaletteDump<'a> {
	name: &'a str,
	gradient: Gradient,
}

pub(crate) fn palette_show(args: &ShowArgs) -> Result<()> {
	let (name, pal) = resolve_cli_palette(&args.palette, &args.colors)?;

	if args.json {
		let dump = PaletteDump { name: &name, gradient: pal.gradient() };
		println!("{}", serde_json::to_string_pretty(&dump)?);
		return Ok(());
	}

	print_palette(&name, &pal);
	println!();
	println!("{}", pal.css_gradient());

	Ok(())
}
