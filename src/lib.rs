pub mod app;
pub mod config;
pub mod domains;
pub mod email;
pub mod sheets;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use utils::error::AppError;
