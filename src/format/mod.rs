//! The `video.cfg` text dialect
//!
//! - `parse_config` - lenient pair extraction into a `SettingStore`
//! - `serialize_config` - exact rendering back to text

mod parse;
mod serialize;

pub use parse::{pairs, parse_config};
pub use serialize::{SECTION_HEADER, serialize_config};
