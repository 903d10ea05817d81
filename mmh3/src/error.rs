use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("seed {seed} does not fit in an unsigned {bits}-bit integer")]
    SeedOutOfRange { seed: String, bits: u32 },

    #[error("flag `{name}` must be 0 or 1, got {value}")]
    InvalidFlag { name: &'static str, value: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
