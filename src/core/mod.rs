pub mod db;
pub mod error;

pub use error::ProjectError;
