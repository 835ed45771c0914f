use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use crate::config::{MailConfig, SMTP_RELAY};
use crate::error::SiteError;

/// Carries one composed message to its destination. The server uses the
/// SMTP implementation below; tests substitute their own.
pub trait ContactMailer: Send + Sync {
    fn dispatch(&self, message: &Message) -> Result<(), SiteError>;
}

/// Outbound relay: sender/destination addresses plus the transport that
/// carries the message. The transport is built once at startup and reused
/// across requests.
pub struct MailRelay {
    pub from: String,
    pub to: String,
    mailer: Box<dyn ContactMailer>,
}

impl MailRelay {
    pub fn from_config(config: MailConfig) -> Result<Self, SiteError> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass);
        let transport = SmtpTransport::starttls_relay(SMTP_RELAY)?
            .credentials(creds)
            .build();
        Ok(Self {
            from: config.smtp_user,
            to: config.to,
            mailer: Box::new(SmtpMailer { transport }),
        })
    }

    pub fn new(from: String, to: String, mailer: Box<dyn ContactMailer>) -> Self {
        Self { from, to, mailer }
    }

    pub fn dispatch(&self, message: &Message) -> Result<(), SiteError> {
        self.mailer.dispatch(message)
    }
}

struct SmtpMailer {
    transport: SmtpTransport,
}

impl ContactMailer for SmtpMailer {
    fn dispatch(&self, message: &Message) -> Result<(), SiteError> {
        self.transport.send(message)?;
        Ok(())
    }
}
