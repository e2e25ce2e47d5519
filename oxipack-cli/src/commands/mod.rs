//! Command implementations for OxiPack CLI.

pub mod bench;
pub mod compress;
pub mod decompress;
pub mod info;
pub mod test;

pub use bench::cmd_bench;
pub use compress::{CompressOptions, SchemeArg, cmd_compress};
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;
