use thiserror::Error;

/// Everything that can go wrong inside one poll iteration. All variants
/// propagate up to the poll loop, which turns them into a single failure
/// notification; none of them may crash the process.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("request to the review API timed out")]
    Timeout,
    #[error("review API is unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("review API returned a malformed payload: {0}")]
    MalformedPayload(String),
    #[error("response is not a JSON object")]
    WrongShape,
    #[error("response is missing the '{0}' field")]
    MissingField(&'static str),
    #[error("the '{0}' field has the wrong type")]
    WrongFieldType(&'static str),
    #[error("unknown homework status '{0}'")]
    UnknownStatus(String),
}
