use cloudpal_rs::palettes::palette::{Palette, PaletteError};
use cloudpal_rs::palettes::registry::{BuiltinPalette, DEFAULT_PALETTE_NAME, PaletteRegistry};

#[test]
fn builtin_shape() {
	let registry = PaletteRegistry::builtin();

	assert_eq!(registry.names(), vec!["default", "pastel", "dark", "nature"]);

	for which in BuiltinPalette::ALL {
		assert_eq!(registry.palette(which).len(), 10, "{which}: unexpected color count!");
	}
}

#[test]
fn builtin_data() {
	let registry = PaletteRegistry::builtin();

	let firsts = ["#2c3e50", "#ffb3ba", "#ff6b6b", "#88b04b"];
	let lasts = ["#16a085", "#ffe4b3", "#9aecdb", "#98b2d1"];

	for (i, which) in BuiltinPalette::ALL.into_iter().enumerate() {
		let pal = registry.palette(which);
		assert_eq!(pal.colors[0].to_string(), firsts[i], "{which}: first color doesn't match!");
		assert_eq!(pal.colors[9].to_string(), lasts[i], "{which}: last color doesn't match!");
	}
}

#[test]
fn frequency_endpoints() {
	let registry = PaletteRegistry::builtin();

	for name in registry.names() {
		let pal = registry.resolve(Some(name));

		for max in [1.0, 10.0, 250.0] {
			let first = registry.color_for_frequency(0.0, max, Some(name)).unwrap();
			assert_eq!(first, pal.colors[0], "{name}: frequency 0 must map to the first color!");

			let last = registry.color_for_frequency(max, max, Some(name)).unwrap();
			assert_eq!(last, pal.colors[pal.len() - 1], "{name}: frequency == max must map to the last color!");
		}
	}
}

#[test]
fn frequency_mapping() {
	struct FrequencyTest {
		frequency: f64,
		expected: &'static str,
	}

	impl FrequencyTest {
		fn new(frequency: f64, expected: &'static str) -> Self {
			Self { frequency, expected }
		}
	}

	// ratio * 9, floored, against the 10-entry default palette
	let tests = vec![
		FrequencyTest::new(0.0, "#2c3e50"),
		FrequencyTest::new(1.0, "#2c3e50"), // 0.9 floors to 0
		FrequencyTest::new(2.0, "#e74c3c"), // 1.8 floors to 1
		FrequencyTest::new(5.0, "#f1c40f"), // the documented midpoint example
		FrequencyTest::new(9.0, "#34495e"), // 8.1 floors to 8
		FrequencyTest::new(10.0, "#16a085"),
	];

	let registry = PaletteRegistry::builtin();
	for (i, test) in tests.iter().enumerate() {
		let color = registry.color_for_frequency(test.frequency, 10.0, Some("default")).unwrap();
		assert_eq!(color.to_string(), test.expected, "{i}: color for frequency {} doesn't match!", test.frequency);
	}
}

#[test]
fn frequency_clamping() {
	let registry = PaletteRegistry::builtin();
	let pal = registry.resolve(None);

	// over-range frequencies clamp to the last color, negative ones to the first
	let over = registry.color_for_frequency(15.0, 10.0, None).unwrap();
	assert_eq!(over, pal.colors[9]);

	let negative = registry.color_for_frequency(-3.0, 10.0, None).unwrap();
	assert_eq!(negative, pal.colors[0]);
}

#[test]
fn invalid_max_frequency() {
	let registry = PaletteRegistry::builtin();

	for max in [0.0, -5.0, f64::NAN, f64::INFINITY] {
		let result = registry.color_for_frequency(1.0, max, None);
		assert!(
			matches!(result, Err(PaletteError::InvalidMaxFrequency(_))),
			"max {max}: expected an InvalidMaxFrequency error!"
		);
	}
}

#[test]
#[should_panic(expected = "Empty")]
fn empty_palette_frequency() {
	Palette::default().color_for_frequency(0.0, 10.0).unwrap();
}

#[test]
fn unknown_names_fall_back() {
	let registry = PaletteRegistry::builtin();

	assert!(registry.get("mystery").is_none());
	assert_eq!(registry.resolve(Some("mystery")), registry.resolve(Some(DEFAULT_PALETTE_NAME)));
	assert_eq!(registry.resolve(None), registry.resolve(Some(DEFAULT_PALETTE_NAME)));

	let unknown = registry.color_for_frequency(5.0, 10.0, Some("mystery")).unwrap();
	let default = registry.color_for_frequency(5.0, 10.0, Some(DEFAULT_PALETTE_NAME)).unwrap();
	assert_eq!(unknown, default);

	assert_eq!(registry.gradient(Some("mystery")), registry.gradient(None));
}

#[test]
fn name_lookup_is_exact() {
	assert_eq!(BuiltinPalette::from_name("default"), Some(BuiltinPalette::Default));
	assert_eq!(BuiltinPalette::from_name("nature"), Some(BuiltinPalette::Nature));
	assert_eq!(BuiltinPalette::from_name("Default"), None);
	assert_eq!(BuiltinPalette::from_name("PASTEL"), None);
	assert_eq!(BuiltinPalette::from_name(""), None);
}

#[test]
fn gradient_structure() {
	let registry = PaletteRegistry::builtin();

	for name in registry.names() {
		let pal = registry.resolve(Some(name));
		let gradient = registry.gradient(Some(name));

		assert_eq!(gradient.colors, pal.colors, "{name}: gradient colors don't match the palette!");
		assert!(gradient.css_gradient.starts_with("linear-gradient(45deg, "), "{name}: unexpected descriptor prefix!");
		assert!(gradient.css_gradient.ends_with(')'), "{name}: unexpected descriptor suffix!");

		// every color appears in order, comma-separated
		let mut position = 0;
		for color in &gradient.colors {
			let hex = color.to_string();
			let found = gradient.css_gradient[position..].find(&hex)
				.unwrap_or_else(|| panic!("{name}: {hex} is missing from the descriptor!"));
			position += found + hex.len();
		}
		// one separator after "45deg" plus one between each pair of colors
		assert_eq!(gradient.css_gradient.matches(", ").count(), pal.len(), "{name}: unexpected separator count!");
	}
}

#[test]
fn gradient_json_shape() {
	let registry = PaletteRegistry::builtin();
	let value = serde_json::to_value(registry.gradient(None)).unwrap();

	assert_eq!(value["colors"][0], "#2c3e50");
	assert_eq!(value["colors"][4], "#f1c40f");
	assert_eq!(
		value["cssGradient"].as_str().unwrap(),
		"linear-gradient(45deg, #2c3e50, #e74c3c, #3498db, #2ecc71, #f1c40f, #9b59b6, #1abc9c, #e67e22, #34495e, #16a085)"
	);
}
