#[cfg(feature = "context")]
pub use context;
#[cfg(feature = "lookup")]
pub use lookup;
