//! Slash commands understood by the REPL.

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// Blank line; nothing is sent.
    Empty,
    Message(&'a str),
    Command(Command<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Reset,
    Refresh,
    Style(&'a str),
    Styles,
    Draft,
    Help,
    Quit,
    Unknown(&'a str),
}

pub const HELP: &str = "\
/reset          start a new conversation
/refresh        drop cached headlines before the next question
/style <label>  switch tone or briefing style
/styles         list available styles
/draft          print the last extracted email draft
/quit           exit";

pub fn parse(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Input::Message(line);
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    let command = match name {
        "reset" | "new" => Command::Reset,
        "refresh" => Command::Refresh,
        "style" if !arg.is_empty() => Command::Style(arg),
        "style" | "styles" => Command::Styles,
        "draft" => Command::Draft,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(name),
    };
    Input::Command(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse(""), Input::Empty);
        assert_eq!(parse("   \t"), Input::Empty);
    }

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(parse("  thank the team  "), Input::Message("thank the team"));
    }

    #[test]
    fn style_takes_the_rest_of_the_line() {
        assert_eq!(
            parse("/style Business Casual"),
            Input::Command(Command::Style("Business Casual"))
        );
        assert_eq!(parse("/style"), Input::Command(Command::Styles));
    }

    #[test]
    fn known_and_unknown_commands() {
        assert_eq!(parse("/reset"), Input::Command(Command::Reset));
        assert_eq!(parse("/refresh"), Input::Command(Command::Refresh));
        assert_eq!(parse("/draft"), Input::Command(Command::Draft));
        assert_eq!(parse("/quit"), Input::Command(Command::Quit));
        assert_eq!(parse("/frobnicate x"), Input::Command(Command::Unknown("frobnicate")));
    }
}
