//! Named pool handles produced by the wiring layer

mod pool;

pub use pool::{DatabasePool, PoolError};
