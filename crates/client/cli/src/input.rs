//! Line commands typed at the battle prompt.

use battle_core::ActionRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(ActionRequest),
    /// Show affordable actions.
    List,
    /// Show both combatants.
    Status,
    /// Start the next encounter after a victory or escape.
    Next,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  attack | defend                 basic actions
  <category> <name>               e.g. `skill Armor Break`, `blackMagic Fire`
  list                            affordable actions
  status                          both combatants
  next                            next encounter (after a win or escape)
  quit";

/// Parses one input line. Returns `None` for a blank line.
///
/// Anything that is not a driver command is sent to the engine as an action
/// request, so unknown names get the engine's fallback behavior.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest.is_empty()) {
        ("list", true) => Command::List,
        ("status", true) => Command::Status,
        ("next", true) => Command::Next,
        ("help" | "?", true) => Command::Help,
        ("quit" | "exit", true) => Command::Quit,
        (_, true) => Command::Act(ActionRequest::parse("basic", head)),
        (_, false) => Command::Act(ActionRequest::parse(head, rest)),
    };
    Some(command)
}
