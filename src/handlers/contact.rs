use std::sync::Arc;
use axum::{extract::State, Json};
use lettre::message::header::ContentType;
use lettre::Message;
use serde::{Deserialize, Serialize};
use crate::{error::SiteError, AppState};

#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

fn validate(request: &ContactRequest) -> Result<(), SiteError> {
    if request.name.is_empty() || request.phone.is_empty() || request.message.is_empty() {
        return Err(SiteError::Validation(
            "Please fill in all required fields",
        ));
    }
    Ok(())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn mail_subject(request: &ContactRequest) -> String {
    let topic = request
        .subject
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("General Inquiry");
    format!("New contact from website: {}", topic)
}

// The layout the site's owner receives; fields are escaped before being
// interpolated so a crafted message cannot inject markup into the mail body.
fn mail_body(request: &ContactRequest) -> String {
    let name = html_escape(&request.name);
    let phone = html_escape(&request.phone);
    let email = html_escape(request.email.as_deref().filter(|s| !s.is_empty()).unwrap_or("Not provided"));
    let subject = html_escape(request.subject.as_deref().filter(|s| !s.is_empty()).unwrap_or("General"));
    let message = html_escape(&request.message);
    format!(
        r#"<div dir="rtl" style="font-family: Arial, sans-serif; padding: 20px; background-color: #FAF8F5; border-radius: 10px;">
    <h2 style="color: #5D3A3A; border-bottom: 2px solid #C4A67D; padding-bottom: 10px;">
        Message from website
    </h2>
    <div style="background: white; padding: 20px; border-radius: 8px; margin-top: 15px;">
        <p><strong style="color: #5D3A3A;">Name:</strong> {name}</p>
        <p><strong style="color: #5D3A3A;">Phone:</strong> {phone}</p>
        <p><strong style="color: #5D3A3A;">Email:</strong> {email}</p>
        <p><strong style="color: #5D3A3A;">Subject:</strong> {subject}</p>
        <hr style="border: none; border-top: 1px solid #E5E5E5; margin: 15px 0;">
        <p><strong style="color: #5D3A3A;">Message:</strong></p>
        <p style="background: #FAF8F5; padding: 15px; border-radius: 5px; white-space: pre-wrap;">{message}</p>
    </div>
    <p style="color: #666; font-size: 12px; margin-top: 20px; text-align: center;">
        This message was sent from the website
    </p>
</div>"#
    )
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, SiteError> {
    validate(&request)?;
    let relay = state.mail.as_ref().ok_or(SiteError::RelayUnconfigured)?;
    let email = Message::builder()
        .from(relay.from.parse()?)
        .to(relay.to.parse()?)
        .subject(mail_subject(&request))
        .header(ContentType::TEXT_HTML)
        .body(mail_body(&request))?;
    relay.dispatch(&email)?;
    tracing::info!("contact form from '{}' relayed to {}", request.name, relay.to);
    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully!".to_string(),
    }))
}
