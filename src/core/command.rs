use serde_json::Value;
use std::convert::Infallible;
use std::str::FromStr;

pub const FALLBACK_MESSAGE: &str = "Unknown command";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move { direction: String },
    Attack { target: String, damage: String },
    Unknown,
}

/// Strings render bare; anything else renders as JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Command {
    /// Matches a bare token or a fixed-shape array.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(token) if token == "quit" || token == "exit" => Self::Quit,
            Value::Array(items) => match items.as_slice() {
                [Value::String(verb), direction] if verb == "move" => Self::Move {
                    direction: render(direction),
                },
                [Value::String(verb), target, damage] if verb == "attack" => Self::Attack {
                    target: render(target),
                    damage: render(damage),
                },
                _ => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }
}

/// Turns whitespace-separated text into the value shape `from_value` expects.
///
/// A single word stays a bare token; several words become an array. Words
/// that parse as integers become numbers.
pub fn text_to_value(text: &str) -> Value {
    let words: Vec<&str> = text.split_whitespace().collect();
    match words.as_slice() {
        [word] => Value::String((*word).to_string()),
        _ => Value::Array(
            words
                .iter()
                .map(|word| match word.parse::<i64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::String((*word).to_string()),
                })
                .collect(),
        ),
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(&text_to_value(s)))
    }
}

pub fn handle_command(command: &Command) -> String {
    match command {
        Command::Quit => "Goodbye!".to_string(),
        Command::Move { direction } => format!("Moving {}", direction),
        Command::Attack { target, damage } => {
            format!("Attacking {} for {} damage", target, damage)
        }
        Command::Unknown => FALLBACK_MESSAGE.to_string(),
    }
}

pub fn handle_value(value: &Value) -> String {
    handle_command(&Command::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quit_and_exit() {
        assert_eq!(handle_value(&json!("quit")), "Goodbye!");
        assert_eq!(handle_value(&json!("exit")), "Goodbye!");
    }

    #[test]
    fn test_move() {
        assert_eq!(handle_value(&json!(["move", "north"])), "Moving north");
    }

    #[test]
    fn test_attack() {
        assert_eq!(
            handle_value(&json!(["attack", "goblin", 5])),
            "Attacking goblin for 5 damage"
        );
        assert_eq!(
            Command::from_value(&json!(["attack", "goblin", 5])),
            Command::Attack {
                target: "goblin".to_string(),
                damage: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_unmatched_shapes_fall_back() {
        for value in [
            json!("move"),
            json!("dance"),
            json!(["move"]),
            json!(["move", "north", "fast"]),
            json!(["attack", "goblin"]),
            json!(["jump", "up"]),
            json!([1, 2]),
            json!(42),
            json!(null),
            json!({"move": "north"}),
        ] {
            assert_eq!(handle_value(&value), FALLBACK_MESSAGE, "input {}", value);
        }
    }

    #[test]
    fn test_parse_text() {
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!(
            "move  north".parse::<Command>().unwrap(),
            Command::Move {
                direction: "north".to_string()
            }
        );
        assert_eq!(
            handle_command(&"attack troll 12".parse().unwrap()),
            "Attacking troll for 12 damage"
        );
        assert_eq!("".parse::<Command>().unwrap(), Command::Unknown);
    }

    #[test]
    fn test_text_to_value() {
        assert_eq!(text_to_value("exit"), json!("exit"));
        assert_eq!(text_to_value("attack goblin 5"), json!(["attack", "goblin", 5]));
    }
}
