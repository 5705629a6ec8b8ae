mod file;
mod scan;
mod signature;

pub use file::*;
pub use scan::*;
pub use signature::*;

#[cfg(test)]
pub(crate) use file::tests::card_bytes;
