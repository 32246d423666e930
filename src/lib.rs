//! smex - export AWS Secrets Manager secrets to a CSV file.
//!
//! This crate provides functionality to:
//! - Authenticate against one region with a static access-key/secret-key pair
//! - List every secret visible to that identity
//! - Fetch each secret's current value
//! - Write the `key,value,desc` table to a uniquely named CSV file
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use smex::{AwsSecretStore, export};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = AwsSecretStore::connect("us-east-1", "AKIA...", "secret...").await;
//!     let outcome = export::export_to_csv(&store, Path::new(".")).await?;
//!     println!("file {} created.", outcome.file_name);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod secrets;

// Re-export commonly used types at the crate root
pub use error::{Result, SmexError};
pub use secrets::{AwsSecretStore, SecretDescriptor, SecretStore};
