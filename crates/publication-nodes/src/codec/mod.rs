//! Cell-level codecs for the documented CSV encodings.

mod list;
mod scalar;

pub use list::{decode_list, encode_list};
pub use scalar::{decode_bool, decode_float, encode_bool, encode_float};
