use validator::validate_email;

/// The email address submitted through the contact form. Enforces validity of
/// the address, so any instance of this is guaranteed to hold a valid email.
///
/// Validity follows the HTML5 email-input rule as implemented by the
/// `validator` crate: non-empty, a local part and a domain separated by a
/// single unquoted `@`.
///
/// # Examples
/// Use the `parse` function to build a `SubscriberEmail` from a string.
/// We can then get the email address back out using the `AsRef<str>` implementation.
/// ```
/// use contact_form::domain::SubscriberEmail;
///
/// let email = SubscriberEmail::parse("valid@domain.com".to_string()).unwrap();
/// assert_eq!("valid@domain.com", email.as_ref());
/// ```
#[derive(Debug)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Return `Ok` with a valid `SubscriberEmail` when `s` is a valid email address.
    /// Otherwise, returns `Err` with an error message describing the problem.
    pub fn parse(s: String) -> Result<Self, String> {
        if validate_email(&s) {
            Ok(SubscriberEmail(s))
        } else {
            Err(format!("{} is not a valid subscriber email.", s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
