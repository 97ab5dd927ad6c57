use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LeadError {
    /// The lead does not exist, or belongs to another owner.
    #[error("Lead not found: {0}")]
    NotFound(String),

    #[error("Not authenticated: no owner identity configured")]
    Unauthorized,
}
