//! Command implementations for OxiLZW CLI.

pub mod compress;
pub mod expand;
pub mod info;

pub use compress::cmd_compress;
pub use expand::cmd_expand;
pub use info::cmd_info;
