use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use crate::clock::TimeOfDay;
use crate::palettes::palette::{Color, Gradient, Palette, PaletteError};

/// Name of the palette every unknown-name lookup falls back to.
pub const DEFAULT_PALETTE_NAME: &str = "default";

// modern and professional
const DEFAULT_COLORS: [u32; 10] = [
	0x2c3e50, // dark blue
	0xe74c3c, // red
	0x3498db, // blue
	0x2ecc71, // green
	0xf1c40f, // yellow
	0x9b59b6, // purple
	0x1abc9c, // turquoise
	0xe67e22, // orange
	0x34495e, // navy blue
	0x16a085, // dark turquoise
];

const PASTEL_COLORS: [u32; 10] = [
	0xffb3ba, // pink
	0xbaffc9, // mint
	0xbae1ff, // light blue
	0xffffba, // light yellow
	0xffb3f7, // light purple
	0xb3fff9, // light turquoise
	0xffc8b3, // light orange
	0xb3ffb3, // light green
	0xe0b3ff, // lavender
	0xffe4b3, // light peach
];

// for dark backgrounds
const DARK_COLORS: [u32; 10] = [
	0xff6b6b, // bright red
	0x4ecdc4, // turquoise
	0x45b7d1, // light blue
	0x96ceb4, // sage
	0xffeead, // light yellow
	0xd4a5a5, // dusty rose
	0x9a7aa0, // purple
	0x87a8a4, // gray-green
	0xf7d794, // light orange
	0x9aecdb, // mint
];

const NATURE_COLORS: [u32; 10] = [
	0x88b04b, // greenery
	0x92a8d1, // serenity
	0x955251, // marsala
	0xb565a7, // radiant orchid
	0x009b77, // emerald
	0xdd4124, // tangerine
	0xd94f70, // honeysuckle
	0x45b5aa, // turquoise
	0x5b5ea6, // ultra violet
	0x98b2d1, // air force blue
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinPalette {
	Default,
	Pastel,
	Dark,
	Nature,
}

impl BuiltinPalette {
	pub const ALL: [BuiltinPalette; 4] = [
		BuiltinPalette::Default,
		BuiltinPalette::Pastel,
		BuiltinPalette::Dark,
		BuiltinPalette::Nature,
	];

	pub fn name(&self) -> &'static str {
		match self {
			BuiltinPalette::Default => DEFAULT_PALETTE_NAME,
			BuiltinPalette::Pastel => "pastel",
			BuiltinPalette::Dark => "dark",
			BuiltinPalette::Nature => "nature",
		}
	}

	pub fn from_name(name: &str) -> Option<BuiltinPalette> {
		BuiltinPalette::ALL.into_iter().find(|p| p.name() == name)
	}

	fn colors(&self) -> [u32; 10] {
		match self {
			BuiltinPalette::Default => DEFAULT_COLORS,
			BuiltinPalette::Pastel => PASTEL_COLORS,
			BuiltinPalette::Dark => DARK_COLORS,
			BuiltinPalette::Nature => NATURE_COLORS,
		}
	}
}

impl Display for BuiltinPalette {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

static BUILTIN_REGISTRY: LazyLock<PaletteRegistry> = LazyLock::new(PaletteRegistry::new);

/// The fixed mapping from palette name to palette. Read-only once built;
/// the default entry always exists and every palette has at least one color.
pub struct PaletteRegistry {
	// indexed by BuiltinPalette discriminant
	palettes: [Palette; 4],
}

impl PaletteRegistry {
	fn new() -> PaletteRegistry {
		PaletteRegistry {
			palettes: BuiltinPalette::ALL.map(|p| Palette::from(p.colors().to_vec())),
		}
	}

	/// The process-wide registry of built-in palettes.
	pub fn builtin() -> &'static PaletteRegistry {
		&BUILTIN_REGISTRY
	}

	pub fn palette(&self, which: BuiltinPalette) -> &Palette {
		&self.palettes[which as usize]
	}

	/// Exact name lookup.
	pub fn get(&self, name: &str) -> Option<&Palette> {
		BuiltinPalette::from_name(name).map(|p| self.palette(p))
	}

	/// Name lookup that never fails: unknown or absent names resolve to the default palette.
	pub fn resolve(&self, name: Option<&str>) -> &Palette {
		match name {
			Some(name) => self.get(name).unwrap_or_else(|| self.palette(BuiltinPalette::Default)),
			None => self.palette(BuiltinPalette::Default),
		}
	}

	/// The registry's palette names, in declaration order.
	pub fn names(&self) -> Vec<&'static str> {
		BuiltinPalette::ALL.iter().map(|p| p.name()).collect()
	}

	pub fn color_for_frequency(&self, frequency: f64, max_frequency: f64, palette_name: Option<&str>) -> Result<Color, PaletteError> {
		self.resolve(palette_name).color_for_frequency(frequency, max_frequency)
	}

	pub fn gradient(&self, palette_name: Option<&str>) -> Gradient {
		self.resolve(palette_name).gradient()
	}

	/// The palette for a given hour of day, per the [TimeOfDay] buckets.
	pub fn palette_for_hour(&self, hour: u32) -> &Palette {
		self.palette(TimeOfDay::from_hour(hour).palette())
	}

	/// The palette for the current local hour.
	pub fn time_based_palette(&self) -> &Palette {
		self.palette(TimeOfDay::now().palette())
	}
}
