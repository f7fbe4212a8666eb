//! API Errors

use thiserror::Error;

/// Todo API operation, used to pick the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

impl Op {
    pub fn failure_message(self) -> &'static str {
        match self {
            Op::List => "failed to load todos",
            Op::Create => "failed to add todo",
            Op::Update => "failed to update todo",
            Op::Delete => "failed to delete todo",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Op::List => "GET",
            Op::Create => "POST",
            Op::Update => "PUT",
            Op::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status. Status and body are only logged.
    #[error("{}", .0.failure_message())]
    RequestFailed(Op),

    /// Network failure or an unparseable body.
    #[error(transparent)]
    Transport(#[from] gloo_net::Error),
}

#[cfg(test)]
impl ApiError {
    pub fn is_request_failed(&self) -> bool {
        matches!(self, ApiError::RequestFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_messages_are_fixed() {
        let messages: Vec<String> = [Op::List, Op::Create, Op::Update, Op::Delete]
            .into_iter()
            .map(|op| ApiError::RequestFailed(op).to_string())
            .collect();

        assert_eq!(
            messages,
            vec![
                "failed to load todos",
                "failed to add todo",
                "failed to update todo",
                "failed to delete todo",
            ]
        );
    }

    #[test]
    fn test_transport_error_passes_message_through() {
        let err = ApiError::from(gloo_net::Error::GlooError("connection refused".to_string()));
        assert!(!err.is_request_failed());
        assert!(err.to_string().contains("connection refused"));
    }
}
