use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Characters escaped in a URL path. Everything outside this set (unreserved,
/// sub-delims, `:`, `@` and `/`) passes through unchanged.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Query values additionally escape the pair separators.
const QUERY_VALUE: &AsciiSet = &PATH.add(b'&').add(b'=').add(b'+').add(b'/').add(b'?');

/// Characters kept when building an `sms:` link.
const SMS_NUMBER_CHARS: &str = "0123456789+-.";

/// Build a `tel:` link.
///
/// # Errors
///
/// Returns [`ContactError::EmptyPhoneNumber`] if `number` is empty.
pub fn phone_call_link(number: &str) -> Result<String, ContactError> {
    let encoded = utf8_percent_encode(number, PATH).to_string();
    if encoded.is_empty() {
        return Err(ContactError::EmptyPhoneNumber);
    }
    Ok(format!("tel:{encoded}"))
}

/// An email to pre-fill in the mail composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailDraft {
    pub recipient: String,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub cc: Option<String>,
}

impl EmailDraft {
    #[must_use]
    pub fn to(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            ..Self::default()
        }
    }
}

/// Build a `mailto:` link. Query parameters appear as `subject`, `body`,
/// `cc`, each only when set.
///
/// # Errors
///
/// Returns [`ContactError::EmptyRecipient`] if the recipient is empty.
pub fn email_link(draft: &EmailDraft) -> Result<String, ContactError> {
    if draft.recipient.is_empty() {
        return Err(ContactError::EmptyRecipient);
    }

    let mut url = format!("mailto:{}", utf8_percent_encode(&draft.recipient, PATH));

    let params: Vec<String> = [
        ("subject", draft.subject.as_deref()),
        ("body", draft.body.as_deref()),
        ("cc", draft.cc.as_deref()),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value.map(|v| format!("{key}={}", utf8_percent_encode(v, QUERY_VALUE)))
    })
    .collect();

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }

    tracing::debug!(params = params.len(), "composed mailto link");
    Ok(url)
}

/// Build an `sms:` link. The number is reduced to digits, `+`, `-` and `.`;
/// if nothing remains the link opens the messages app without a recipient.
#[must_use]
pub fn sms_link(number: Option<&str>) -> String {
    let recipient = number
        .filter(|n| !n.is_empty())
        .and_then(|n| deeplink_core::text::retain_chars(n, SMS_NUMBER_CHARS));

    match recipient {
        Some(recipient) => format!("sms:{recipient}"),
        None => "sms:".to_string(),
    }
}
