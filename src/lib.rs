pub mod error;
pub mod graph;
pub mod mst;
pub mod query;
pub mod util;

pub use error::{Error, Result};
