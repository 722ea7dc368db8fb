use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),
}
