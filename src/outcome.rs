use crate::club_errors::Rejection;

/// What a create hands back. A rejection is a normal result, not an error:
/// nothing was written and `message()` says why.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Accepted { record: T, message: String },
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn message(&self) -> String {
        match self {
            Outcome::Accepted { message, .. } => message.clone(),
            Outcome::Rejected(rejection) => rejection.to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            Outcome::Accepted { record, .. } => Some(record),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Accepted { .. } => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

impl<T> From<Rejection> for Outcome<T> {
    fn from(rejection: Rejection) -> Self {
        Outcome::Rejected(rejection)
    }
}
