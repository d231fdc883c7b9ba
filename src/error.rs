use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("chart template is not parseable json: {0}")]
    TemplateParse(String),

    #[error("invalid style profile: {0}")]
    InvalidStyle(String),
}
