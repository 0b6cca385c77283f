//! Interactive terminal front-end for a session.
//!
//! Reads one line at a time from stdin. Plain lines become turns; lines
//! starting with `/` are commands. Ctrl-C while a reply streams abandons
//! that turn and leaves the transcript as it was.

mod command;
mod render;

use std::ops::ControlFlow;

use herald_ai::{
    Assistant, CompletionClient, ContextProvider, Extraction, HeadlineContext, Session, SessionState,
    StyleProfile, TurnError, TurnOutcome,
};
use herald_common::HeraldError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use crate::setup::{resolve_style, Launch};

pub use command::{parse, Command, Input, HELP};
pub use render::StreamPrinter;

pub struct Repl {
    session: Session,
    profile: &'static StyleProfile,
    client: Box<dyn CompletionClient>,
    context: Option<HeadlineContext>,
}

impl Repl {
    pub fn new(launch: Launch, client: impl CompletionClient + 'static) -> Self {
        Self {
            session: launch.session,
            profile: launch.profile,
            client: Box::new(client),
            context: launch.context,
        }
    }

    pub async fn run(mut self) -> Result<(), HeraldError> {
        info!(
            session = self.session.id().short(),
            assistant = self.session.assistant().name(),
            model = self.session.model(),
            "session started"
        );
        println!(
            "{}",
            banner(&self.session, self.profile, self.context.as_ref())
        );

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt().await;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match parse(&line) {
                Input::Empty => println!("Please enter a message."),
                Input::Message(text) => self.turn(text).await,
                Input::Command(command) => {
                    if self.handle(command).is_break() {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    async fn turn(&mut self, text: &str) {
        let mut printer = StreamPrinter::new();
        let context = self.context.as_ref().map(|c| c as &dyn ContextProvider);
        let turn = self.session.submit_turn(
            self.client.as_ref(),
            context,
            text,
            self.profile,
            |event| printer.print(&event),
        );

        let result = tokio::select! {
            result = turn => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };

        match result {
            Some(Ok(outcome)) => self.report(&outcome),
            Some(Err(TurnError::ContextUnavailable(e))) => {
                println!("Could not load the latest headlines ({e}). Please try again.");
            }
            None => println!("\n[cancelled; the conversation is unchanged]"),
        }
    }

    fn report(&self, outcome: &TurnOutcome) {
        match &outcome.artifact {
            Some(Extraction::Parsed(draft)) => {
                println!("[draft captured: \"{}\". /draft prints it]", draft.subject);
            }
            Some(Extraction::Failed { .. }) if !outcome.degraded => {
                println!("[no subject/body found in this reply]");
            }
            _ => {}
        }
    }

    fn handle(&mut self, command: Command<'_>) -> ControlFlow<()> {
        match command {
            Command::Reset => {
                self.session.reset();
                println!("Started a new conversation.");
            }
            Command::Refresh => match self.context {
                Some(_) => {
                    self.session.refresh_context();
                    println!("Headlines will be refetched with the next question.");
                }
                None => println!("This assistant has no live context."),
            },
            Command::Style(label) => self.switch_style(label),
            Command::Styles => {
                for profile in self.session.assistant().styles() {
                    let mark = if profile == self.profile { '*' } else { ' ' };
                    println!("{mark} {}: {}", profile.label, profile.instruction);
                }
            }
            Command::Draft => match self.session.artifact() {
                Some(Extraction::Parsed(draft)) => println!("{}", draft.to_plain_text()),
                Some(failed) => println!("{}\n\n{}", failed.subject(), failed.body()),
                None => println!("No draft yet."),
            },
            Command::Help => println!("{HELP}"),
            Command::Quit => return ControlFlow::Break(()),
            Command::Unknown(name) => println!("Unknown command /{name}. Type /help."),
        }
        ControlFlow::Continue(())
    }

    fn switch_style(&mut self, label: &str) {
        match resolve_style(self.session.assistant(), label) {
            Ok(profile) => {
                self.profile = profile;
                let frozen = matches!(self.session.assistant(), Assistant::Email { .. })
                    && self.session.state() == SessionState::Active;
                if frozen {
                    println!(
                        "Style set to {}. It applies after /reset; this draft keeps its tone.",
                        profile.label
                    );
                } else {
                    println!("Style set to {}.", profile.label);
                }
            }
            Err(e) => println!("{e}"),
        }
    }
}

/// First line shown when a session starts.
fn banner(
    session: &Session,
    profile: &StyleProfile,
    context: Option<&HeadlineContext>,
) -> String {
    let what = match context {
        Some(context) => format!(
            "Ask about today's top {} headlines ({} per question).",
            context.country().label,
            context.count()
        ),
        None => "Describe the email you need.".to_string(),
    };
    format!(
        "herald {} ({}, style: {}). {what} Type /help for commands.",
        session.assistant().name(),
        session.model(),
        profile.label,
    )
}

async fn prompt() {
    let mut stdout = tokio::io::stdout();
    // A closed stdout only loses the prompt.
    let _ = stdout.write_all(b"> ").await;
    let _ = stdout.flush().await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use herald_ai::{NewsApiClient, NewsApiConfig, COUNTRIES, EMAIL_STYLES, NEWS_STYLES};

    use super::*;

    #[test]
    fn news_banner_names_country_and_count() {
        let session = Session::new(Assistant::News {
            country: COUNTRIES[0],
        });
        let source = Arc::new(NewsApiClient::new(NewsApiConfig::new("key")));
        let context = HeadlineContext::new(source, COUNTRIES[0], 7);

        let text = banner(&session, &NEWS_STYLES[1], Some(&context));
        assert!(text.starts_with("herald news (gpt-3.5-turbo, style: In Depth)."));
        assert!(text.contains("top United States headlines (7 per question)"));
    }

    #[test]
    fn email_banner_asks_for_a_description() {
        let session = Session::new(Assistant::Email {
            sender_name: "Dana".into(),
        })
        .with_model("gpt-4o-mini");

        let text = banner(&session, &EMAIL_STYLES[3], None);
        assert!(text.starts_with("herald email (gpt-4o-mini, style: Friendly)."));
        assert!(text.contains("Describe the email you need."));
    }
}
