pub mod db;
pub mod error;
pub mod matcher;
pub mod persistence;
pub mod record;
pub mod services;
#[cfg(test)]
mod test_support;
mod text;
