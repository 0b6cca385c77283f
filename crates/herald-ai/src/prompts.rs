//! System-turn templates for the email and news assistants.
//!
//! Templates are fixed; only the sender identity, the selected profile,
//! the country and the rendered context block are interpolated.

use crate::profiles::{Country, StyleProfile};

/// Marker opening the subject section of a drafted email.
pub const SUBJECT_MARKER: &str = "## Subject";
/// Marker opening the body section of a drafted email.
pub const BODY_MARKER: &str = "## Body";

const SENDER_PLACEHOLDER: &str = "[sender name]";

/// System turn for the first email-drafting request.
pub fn email_system_prompt(sender_name: &str, profile: &StyleProfile) -> String {
    let sender = match sender_name.trim() {
        "" => SENDER_PLACEHOLDER,
        name => name,
    };
    format!(
        r#"You are an expert at drafting emails.
Write an appropriate email for the situation the user describes.
Always use the following format:

---

{SUBJECT_MARKER}
[email subject]

{BODY_MARKER}
Hello [recipient],
This is {sender}.

[email body]

Thank you.

Best regards,
{sender}

---

Email tone: {label}
Tone description: {instruction}

If information is missing, ask the user for more details.
Always write a grammatically correct email that suits the situation."#,
        label = profile.label,
        instruction = profile.instruction,
    )
}

/// System turn for the first news-briefing question.
pub fn news_system_prompt(
    context_text: &str,
    profile: &StyleProfile,
    country: &Country,
) -> String {
    format!(
        r#"{preamble}

## 📰 {country} News Briefing

### Key Headlines
[summary of the main stories]

### Details
[details in the selected style]

### Impact and Outlook
[what the news means and what to expect next]

### Sources
[news sources and reference links]

---

Use only the news data provided.
Include each story's source and URL in the Sources section.
Pick only the stories relevant to the user's question."#,
        preamble = news_preamble(context_text, profile, country, true),
        country = country.label,
    )
}

/// System turn that replaces the first one on every later news question.
pub fn news_follow_up_prompt(
    context_text: &str,
    profile: &StyleProfile,
    country: &Country,
) -> String {
    format!(
        r#"{preamble}
Use only the news data provided.
Cite each story's source and URL as references."#,
        preamble = news_preamble(context_text, profile, country, false),
    )
}

fn news_preamble(
    context_text: &str,
    profile: &StyleProfile,
    country: &Country,
    with_format: bool,
) -> String {
    let format_intro = if with_format {
        "\nProvide the briefing in the following format:\n\n---"
    } else {
        ""
    };
    format!(
        r#"You are an expert who provides real-time news briefings.
Answer the user's questions based on the following live news data:

{context}

Briefing style: {label}
Style description: {instruction}
Country: {country}
{format_intro}"#,
        context = context_text.trim_end(),
        label = profile.label,
        instruction = profile.instruction,
        country = country.label,
    )
}
