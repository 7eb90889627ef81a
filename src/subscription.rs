use crate::domain::SubscriberEmail;

/// Message shown to the user after a successful subscription.
pub const SUBSCRIBED_MESSAGE: &str = "You Have Subscribed!";

/// A single subscription attempt, built by the caller from already-parsed form
/// fields. One is constructed per submission and discarded once its feedback
/// has been produced.
#[derive(Debug)]
pub struct SubscriptionRequest {
    pub email: String,
}

/// The outcome reported back to the user: either the subscription message, or
/// nothing when the submitted email did not pass validation.
///
/// An invalid submission is a normal outcome, not an error. Callers check
/// `message` and redisplay the form accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackResult {
    message: Option<String>,
}

impl FeedbackResult {
    fn subscribed() -> Self {
        Self {
            message: Some(SUBSCRIBED_MESSAGE.into()),
        }
    }

    fn absent() -> Self {
        Self { message: None }
    }

    /// The user-facing feedback message, when one was produced.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Validates the submitted email address and reports the outcome.
///
/// Pure function of its input: no storage writes, no external calls, and the
/// same request always yields the same feedback.
pub fn submit(request: SubscriptionRequest) -> FeedbackResult {
    match SubscriberEmail::parse(request.email) {
        Ok(_) => FeedbackResult::subscribed(),
        Err(_) => FeedbackResult::absent(),
    }
}
