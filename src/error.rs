use crate::alpha::AlphaError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `alpha` module")]
    Alpha(#[from] AlphaError),
}
