pub mod build;
pub mod filter;
pub mod predict;
pub(crate) mod util;
