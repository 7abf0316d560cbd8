//! Email signup stub. Captures the address, shows a short confirmation on the
//! submit button and logs the address. Nothing is sent anywhere yet.

use crate::db::PlayerSettings;
use dioxus::logger::tracing::info;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Identifies the submission a scheduled revert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SignupReceipt {
    pub email: String,
    pub revert: RevertTicket,
    pub revert_after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupStub {
    idle_label: String,
    success_label: String,
    success_color: String,
    revert_after: Duration,
    button_label: String,
    button_background: Option<String>,
    email_input: String,
    submissions: u64,
}

impl SignupStub {
    pub fn new(idle_label: &str, settings: &PlayerSettings) -> Self {
        Self {
            idle_label: idle_label.to_string(),
            success_label: settings.signup_success_label.clone(),
            success_color: settings.signup_success_color.clone(),
            revert_after: Duration::from_millis(u64::from(settings.signup_confirmation_ms)),
            button_label: idle_label.to_string(),
            button_background: None,
            email_input: String::new(),
            submissions: 0,
        }
    }

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    pub fn button_background(&self) -> Option<&str> {
        self.button_background.as_deref()
    }

    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    pub fn set_email_input(&mut self, value: impl Into<String>) {
        self.email_input = value.into();
    }

    /// Handle a submit: confirm on the button, clear the field, log the
    /// address. The caller schedules `revert` after `revert_after`.
    pub fn submit(&mut self) -> SignupReceipt {
        let email = std::mem::take(&mut self.email_input);
        self.button_label = self.success_label.clone();
        self.button_background = Some(self.success_color.clone());
        self.submissions += 1;
        info!("Email signup: {email}");
        SignupReceipt {
            email,
            revert: RevertTicket(self.submissions),
            revert_after: self.revert_after,
        }
    }

    /// Restore the idle button. Reverts scheduled by earlier submissions are
    /// ignored so the newest confirmation stays up for its full delay.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.submissions {
            return false;
        }
        self.button_label = self.idle_label.clone();
        self.button_background = None;
        true
    }
}

/// Keep the confirmation up for the receipt's delay, then hand its ticket to
/// `revert`. Returns whatever `revert` reports.
pub async fn revert_when_due(
    receipt: &SignupReceipt,
    revert: impl FnOnce(RevertTicket) -> bool,
) -> bool {
    sleep(receipt.revert_after).await;
    revert(receipt.revert)
}
