pub mod assets;
pub mod logging;

pub const VERSION:&str = env!("CARGO_PKG_VERSION");
