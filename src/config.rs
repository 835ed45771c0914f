/// Pages served under clean URLs. Each name maps to `{name}.html` in the
/// site root; anything else falls through to the 404 handler.
pub const PAGES: &[&str] = &[
    "about",
    "gallery",
    "recipes",
    "workshops",
    "contact",
    "privacy",
    "accessibility",
];

pub const SMTP_RELAY: &str = "smtp.gmail.com";

/// Outbound mail settings, read from the environment at startup. When the
/// credentials are absent the contact relay is disabled but page serving
/// keeps working.
pub struct MailConfig {
    pub smtp_user: String,
    pub smtp_pass: String,
    pub to: String,
}

impl MailConfig {
    pub fn from_env() -> Option<Self> {
        let smtp_user = std::env::var("EMAIL_USER").ok()?;
        let smtp_pass = std::env::var("EMAIL_PASS").ok()?;
        let to = std::env::var("EMAIL_TO").unwrap_or_else(|_| smtp_user.clone());
        Some(Self {
            smtp_user,
            smtp_pass,
            to,
        })
    }
}
