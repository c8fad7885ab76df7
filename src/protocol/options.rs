use crate::board::Color;

use super::CommandError;

/// Settings changed through `setoption`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProtocolOptions {
    /// Color played from this end; `None` for hot-seat play
    pub seat: Option<Color>,
    /// Print the diagram after every accepted move
    pub show_board: bool,
}

impl ProtocolOptions {
    #[must_use]
    pub fn new() -> Self {
        ProtocolOptions::default()
    }

    /// One `option ...` line per setting, with its current value.
    #[must_use]
    pub fn describe(&self) -> String {
        let seat = match self.seat {
            Some(Color::White) => "white",
            Some(Color::Black) => "black",
            None => "none",
        };
        format!(
            "option name Seat type combo default {seat} var white var black var none\n\
             option name ShowBoard type check default {}",
            self.show_board
        )
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), CommandError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(|v| v.trim().to_ascii_lowercase());
        let invalid = || CommandError::InvalidOptionValue {
            name: name.to_string(),
            value: value.clone().unwrap_or_default(),
        };

        match normalized.as_str() {
            "seat" => {
                self.seat = match value.as_deref() {
                    Some("white") => Some(Color::White),
                    Some("black") => Some(Color::Black),
                    Some("none") | None => None,
                    Some(_) => return Err(invalid()),
                };
            }
            "showboard" | "show board" => {
                self.show_board = match value.as_deref() {
                    Some("true" | "1") | None => true,
                    Some("false" | "0") => false,
                    Some(_) => return Err(invalid()),
                };
            }
            _ => {
                return Err(CommandError::UnknownOption {
                    name: name.to_string(),
                });
            }
        }

        #[cfg(feature = "logging")]
        log::debug!("option {normalized} set: {self:?}");

        Ok(())
    }
}

/// Split `setoption name <name> value <value>` into its name and value.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = None;

    for part in parts.iter().skip(1) {
        match *part {
            "name" => in_value = Some(false),
            "value" => in_value = Some(true),
            _ => match in_value {
                Some(false) => name_parts.push(part),
                Some(true) => value_parts.push(part),
                None => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setoption() {
        assert_eq!(
            parse_setoption(&["setoption", "name", "Show", "Board", "value", "true"]),
            Some(("Show Board".to_string(), Some("true".to_string())))
        );
        assert_eq!(
            parse_setoption(&["setoption", "name", "ShowBoard"]),
            Some(("ShowBoard".to_string(), None))
        );
        assert_eq!(parse_setoption(&["setoption", "value", "x"]), None);
        assert_eq!(parse_setoption(&["move", "name", "x"]), None);
    }

    #[test]
    fn test_seat_values() {
        let mut options = ProtocolOptions::new();
        options.apply_setoption("Seat", Some("Black")).unwrap();
        assert_eq!(options.seat, Some(Color::Black));
        options.apply_setoption("seat", Some("none")).unwrap();
        assert_eq!(options.seat, None);
        assert!(matches!(
            options.apply_setoption("seat", Some("green")),
            Err(CommandError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn test_show_board_toggle() {
        let mut options = ProtocolOptions::new();
        assert!(!options.show_board);
        options.apply_setoption("ShowBoard", None).unwrap();
        assert!(options.show_board);
        options.apply_setoption("show board", Some("false")).unwrap();
        assert!(!options.show_board);
    }

    #[test]
    fn test_unknown_option() {
        let mut options = ProtocolOptions::new();
        assert_eq!(
            options.apply_setoption("Hash", Some("64")),
            Err(CommandError::UnknownOption {
                name: "Hash".to_string()
            })
        );
        assert_eq!(options, ProtocolOptions::new());
    }

    #[test]
    fn test_describe_reflects_values() {
        let options = ProtocolOptions {
            seat: Some(Color::White),
            show_board: true,
        };
        let text = options.describe();
        assert!(text.contains("Seat type combo default white"));
        assert!(text.contains("ShowBoard type check default true"));
    }
}
