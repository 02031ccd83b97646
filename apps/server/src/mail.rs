//! Registration email delivery.
//!
//! Email is an outward collaborator: the server only ever hands a
//! welcome message to an SMTP relay. Delivery is disabled by default
//! (`ACRONYMS_SMTP_ENABLED=false`) and a failed send never fails the
//! registration request; it is logged and dropped.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::config::SmtpSettings;

/// SMTP mailer for registration notifications.
#[derive(Clone)]
pub struct Mailer {
    /// `None` when SMTP is disabled; every send becomes a no-op.
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    sender: String,
}

impl Mailer {
    /// Builds a mailer from settings.
    ///
    /// With SMTP disabled this never opens a connection; the relay is
    /// only contacted on the first send.
    pub fn new(settings: &SmtpSettings) -> Self {
        if !settings.enabled {
            return Mailer {
                transport: None,
                sender: String::new(),
            };
        }

        let builder = if settings.tls {
            match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host) {
                Ok(builder) => builder,
                Err(e) => {
                    warn!(?e, "Failed to configure SMTP relay, email disabled");
                    return Mailer {
                        transport: None,
                        sender: String::new(),
                    };
                }
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Mailer {
            transport: Some(transport),
            sender: settings.username.clone(),
        }
    }

    /// Sends the account-created notification to a new user.
    ///
    /// Failures are logged, never propagated: registration has already
    /// committed by the time this runs.
    pub async fn send_welcome(&self, recipient: &str) {
        let Some(transport) = &self.transport else {
            info!(recipient, "SMTP disabled, skipping welcome email");
            return;
        };

        let (Ok(from), Ok(to)) = (
            self.sender.parse::<Mailbox>(),
            recipient.parse::<Mailbox>(),
        ) else {
            warn!(recipient, "Invalid mailbox address, skipping welcome email");
            return;
        };

        let text = format!(
            "Dear {recipient},\n\n\
             You have created or updated your Acronyms account. Please confirm\n\
             this email by following the verification link sent separately.\n"
        );

        let message = match Message::builder()
            .from(from)
            .to(to)
            .subject("Welcome to Acronyms")
            .body(text)
        {
            Ok(message) => message,
            Err(e) => {
                warn!(?e, "Failed to build welcome email");
                return;
            }
        };

        match transport.send(message).await {
            Ok(_) => info!(recipient, "Welcome email sent"),
            Err(e) => warn!(?e, recipient, "Failed to send welcome email"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_is_a_noop() {
        let mailer = Mailer::new(&SmtpSettings {
            enabled: false,
            host: String::new(),
            port: 25,
            username: String::new(),
            password: String::new(),
            tls: true,
        });

        // Must return without contacting any relay
        mailer.send_welcome("alice@example.com").await;
        assert!(mailer.transport.is_none());
    }
}
