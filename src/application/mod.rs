pub mod backend;
pub mod requests;

pub use backend::KeySetBackend;
pub use requests::{CreateKeySetRequest, DeleteKeySetRequest, GenerateKeyRequest, ReadKeySetRequest, UploadSecretRequest};
