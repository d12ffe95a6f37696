use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{PKG_VERSION} [{BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Word cloud palette toolkit")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(short, long, group = "source", help = "A built-in palette name. Unknown names fall back to the default palette.")]
	pub palette: Option<String>,
	#[arg(short, long, group = "source", value_name = "LIST", help = "A comma- or whitespace-separated list of hexadecimal colors.")]
	pub colors: Option<String>,

	#[arg(long, help = "Prints the palette and its CSS gradient as JSON.")]
	pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PickArgs {
	#[arg(short, long, help = "The word frequency to map.")]
	pub frequency: f64,
	#[arg(short, long = "max", help = "The maximum frequency in the data set.")]
	pub max_frequency: f64,

	#[arg(short, long, group = "source", help = "A built-in palette name. Unknown names fall back to the default palette.")]
	pub palette: Option<String>,
	#[arg(short, long, group = "source", value_name = "LIST", help = "A comma- or whitespace-separated list of hexadecimal colors.")]
	pub colors: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct NowArgs {
	#[arg(long, value_name = "HH[:MM]", help = "Previews the palette for another clock time instead of now.")]
	pub at: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Lists the built-in palettes")]
	List,

	#[command(about = "Prints one palette's colors and CSS gradient")]
	Show(ShowArgs),

	#[command(about = "Maps a word frequency to a palette color")]
	Pick(PickArgs),

	#[command(about = "Shows the palette for the current time of day")]
	Now(NowArgs),
}
