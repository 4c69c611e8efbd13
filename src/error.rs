use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("result serialisation error: {0}")]
    ResultSerialisation(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("could not initialise the logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
