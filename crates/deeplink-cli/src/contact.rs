//! `call`, `email` and `sms` command handlers.

use anyhow::Context;
use deeplink_contact::{email_link, phone_call_link, sms_link, EmailDraft};

pub(crate) fn run_call(number: &str) -> anyhow::Result<String> {
    phone_call_link(number).context("cannot build call link")
}

pub(crate) fn run_email(
    to: String,
    subject: Option<String>,
    body: Option<String>,
    cc: Option<String>,
) -> anyhow::Result<String> {
    let draft = EmailDraft {
        recipient: to,
        subject,
        body,
        cc,
    };
    email_link(&draft).context("cannot build email link")
}

pub(crate) fn run_sms(number: Option<&str>) -> String {
    sms_link(number)
}
