//! Best-effort extraction of a drafted email from a free-text reply.
//!
//! The reply is scanned for the subject and body markers the email
//! template asks for. Model output is free text, so a miss is an expected
//! outcome, not an error.

use crate::prompts::{BODY_MARKER, SUBJECT_MARKER};

/// Subject reported when the markers could not be found.
pub const EXTRACTION_FAILED_SUBJECT: &str = "Subject extraction failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Plain-text rendering suitable for pasting into a mail client.
    pub fn to_plain_text(&self) -> String {
        format!("Subject: {}\n\n{}", self.subject, self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Parsed(EmailDraft),
    /// Markers missing; the whole reply is kept as the body.
    Failed { raw: String },
}

impl Extraction {
    pub fn subject(&self) -> &str {
        match self {
            Extraction::Parsed(draft) => &draft.subject,
            Extraction::Failed { .. } => EXTRACTION_FAILED_SUBJECT,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Extraction::Parsed(draft) => &draft.body,
            Extraction::Failed { raw } => raw,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Extraction::Parsed(_))
    }

    pub fn draft(&self) -> Option<&EmailDraft> {
        match self {
            Extraction::Parsed(draft) => Some(draft),
            Extraction::Failed { .. } => None,
        }
    }
}

/// Split a reply into subject and body at the section markers.
pub fn extract_email(reply: &str) -> Extraction {
    let failed = || Extraction::Failed {
        raw: reply.to_string(),
    };

    let Some(subject_at) = reply.find(SUBJECT_MARKER) else {
        return failed();
    };
    let subject_start = subject_at + SUBJECT_MARKER.len();
    let Some(body_offset) = reply[subject_start..].find(BODY_MARKER) else {
        return failed();
    };
    let body_at = subject_start + body_offset;

    let subject = reply[subject_start..body_at].trim();
    let body = reply[body_at + BODY_MARKER.len()..].trim();
    // Models sometimes close the draft with the template's horizontal rule.
    let body = body.strip_suffix("---").map(str::trim_end).unwrap_or(body);

    if subject.is_empty() {
        return failed();
    }

    Extraction::Parsed(EmailDraft {
        subject: subject.to_string(),
        body: body.to_string(),
    })
}
