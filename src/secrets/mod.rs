pub mod aws;
pub mod store;

pub use aws::AwsSecretStore;
pub use store::{SecretDescriptor, SecretStore};
