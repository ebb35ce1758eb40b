use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing ciphertext: must be a non-empty string")]
    MissingCiphertext,

    #[error("invalid dotenv key: {0}")]
    InvalidKeyFormat(String),

    #[error("invalid key length: must be 64 hex characters long (or more)")]
    InvalidKeyLength,

    #[error("invalid ciphertext encoding: {0}")]
    InvalidCiphertextEncoding(#[from] base64::DecodeError),

    #[error("cannot locate environment {0} in your vault")]
    EnvironmentNotFound(String),

    #[error("decryption failed: please check your DOTENV_KEY")]
    DecryptionFailed,

    #[error("invalid dotenv key: key must be valid")]
    InvalidKey,

    #[error("no env file found (searched {0})")]
    EnvFileNotFound(String),

    #[error("decrypted payload is not valid utf-8")]
    InvalidPlaintext,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
