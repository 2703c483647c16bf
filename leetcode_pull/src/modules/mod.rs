pub mod exporter;
pub mod session;
pub mod submissions;
pub mod utils;
