mod cache;
mod naming;

pub use cache::*;
pub use naming::*;

#[cfg(test)]
pub(crate) use cache::tests::write_tile;
