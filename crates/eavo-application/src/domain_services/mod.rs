//! Domain services used by the option resolver

pub mod codec;
pub mod key_builder;
pub mod memo;

pub use codec::{decode_options, encode_options};
pub use key_builder::{OptionKeyBuilder, build_key};
pub use memo::OptionMemo;
