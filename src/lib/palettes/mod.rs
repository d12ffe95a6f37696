pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub mod palette;
pub mod registry;

const MAX_PALETTE_COLORS: usize = 256;
