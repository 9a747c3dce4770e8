#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Init,
    Reset,
    Help,
    Chat(String),
}

impl Command {
    /// Classifies raw user input. Matching is on the trimmed, lowercased
    /// input; anything unrecognized is a chat message carrying the input
    /// as typed.
    pub fn route(input: &str) -> Command {
        let normalized = input.trim().to_lowercase();

        if normalized == "init" {
            return Command::Init;
        }
        if normalized == "clear" || normalized == "reset" {
            return Command::Reset;
        }
        if normalized == "help" {
            return Command::Help;
        }

        return Command::Chat(input.to_string());
    }
}
