use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::subscription::{submit, SubscriptionRequest};

/// The data being submitted from the contact form
#[derive(Deserialize)]
pub struct FormData {
    email: String,
}

/// Serves the contact page with an empty subscription form.
#[get("/contact")]
pub async fn contact() -> HttpResponse {
    contact_page(None)
}

/// Handles a subscription attempt from the contact form.
///
/// The form body has already been bound into `FormData` by the framework;
/// the handler itself only validates and re-renders. An invalid email is
/// answered with the bare form again, not with an error status.
#[tracing::instrument(
    name = "Processing a subscription request",
    skip(form),
    fields(subscriber_email = %form.email)
)]
#[post("/subscribe")]
pub async fn subscribe(form: web::Form<FormData>) -> HttpResponse {
    let request = SubscriptionRequest {
        email: form.into_inner().email,
    };
    let feedback = submit(request);
    contact_page(feedback.message())
}

/// Renders the contact page, with the feedback line when a message is present.
fn contact_page(feedback: Option<&str>) -> HttpResponse {
    let feedback_html = match feedback {
        Some(message) => format!("<p><i>{message}</i></p>"),
        None => String::new(),
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Contact</title>
    </head>
    <body>
        {feedback_html}
        <form action="/subscribe" method="POST">
            <label>Email
                <input type="email" placeholder="Enter your email" name="email">
            </label>
            <button type="submit">Subscribe</button>
        </form>
    </body>
</html>
"#,
        ))
}
