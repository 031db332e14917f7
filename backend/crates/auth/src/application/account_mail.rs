//! Account-created notice
//!
//! The derived password reaches the user only through this message.

use platform::mail::OutgoingMail;

use crate::domain::value_object::{email::Email, user_password::RawPassword};

pub const ACCOUNT_CREATED_SUBJECT: &str = "Account Created";

/// Build the HTML notice carrying the initial password
pub fn account_created_mail(to: &Email, password: &RawPassword) -> OutgoingMail {
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; background-color: #f9f9f9; padding: 20px; border-radius: 10px;">
  <h2 style="color: #4CAF50;">Thank You for Registering!</h2>
  <p style="font-size: 16px; color: #333;">Your account has been successfully created.</p>
  <p style="font-weight: bold;">Here is your password:</p>
  <div style="background-color: #e7f3fe; padding: 10px; border-left: 5px solid #2196F3; margin: 10px 0; font-size: 18px;">{}</div>
  <p style="color: #777;">Please change your password after logging in for the first time.</p>
</div>"#,
        escape_html(password.expose())
    );

    OutgoingMail {
        to: to.as_str().to_string(),
        subject: ACCOUNT_CREATED_SUBJECT.to_string(),
        html,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
