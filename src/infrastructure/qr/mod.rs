//! QR rendering infrastructure

mod color;
mod renderer;

pub use color::{parse_color, to_hex};
pub use renderer::{ec_level, QrcodeRenderer};
