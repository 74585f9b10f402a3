//! Keypad keys and their text spellings.
//!
//! Front ends translate whatever input they have (buttons, key codes, typed
//! tokens) into a [`Key`] before handing it to the calculator.

use std::str::FromStr;

use super::evaluation::Operator;

/// A single keypad press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// `0`–`9`.
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// `C` or `AC`, depending on whether there is input to clear.
    Clear,
    ToggleSign,
    Percent,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

impl Key {
    /// The character appended to the operand, for digit keys.
    pub fn digit_char(self) -> Option<char> {
        match self {
            Self::Digit(c) => Some(c),
            Self::DecimalPoint => Some('.'),
            _ => None,
        }
    }

    pub fn is_memory(self) -> bool {
        matches!(
            self,
            Self::MemoryAdd | Self::MemorySubtract | Self::MemoryRecall | Self::MemoryClear
        )
    }
}

/// Returned when a token does not name a key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown key: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_ascii_lowercase();

        let key = match lower.as_str() {
            "." | "," => Self::DecimalPoint,
            "=" | "enter" => Self::Equals,
            "c" | "ac" | "clear" => Self::Clear,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            "%" => Self::Percent,
            "m+" => Self::MemoryAdd,
            "m-" | "m−" => Self::MemorySubtract,
            "mr" => Self::MemoryRecall,
            "mc" => Self::MemoryClear,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c),
                    _ => Self::Operator(
                        token
                            .parse::<Operator>()
                            .map_err(|_| UnknownKey(token.to_string()))?,
                    ),
                }
            }
        };

        Ok(key)
    }
}

/// Split a line of input into keys.
///
/// Tokens are whitespace separated; a run of digits such as `12.5` expands
/// into one key per character.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, UnknownKey> {
    let mut keys = Vec::new();

    for token in line.split_whitespace() {
        let is_number = token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.');

        if is_number && token.len() > 1 {
            for c in token.chars() {
                keys.push(c.to_string().parse()?);
            }
        } else {
            keys.push(token.parse()?);
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tokens() {
        assert_eq!("7".parse::<Key>(), Ok(Key::Digit('7')));
        assert_eq!(".".parse::<Key>(), Ok(Key::DecimalPoint));
        assert_eq!("×".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("-".parse::<Key>(), Ok(Key::Operator(Operator::Subtract)));
        assert_eq!("=".parse::<Key>(), Ok(Key::Equals));
        assert_eq!("AC".parse::<Key>(), Ok(Key::Clear));
        assert_eq!("+/-".parse::<Key>(), Ok(Key::ToggleSign));
        assert_eq!("M+".parse::<Key>(), Ok(Key::MemoryAdd));
        assert_eq!("mr".parse::<Key>(), Ok(Key::MemoryRecall));
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert!("^".parse::<Key>().is_err());
        assert!("12".parse::<Key>().is_err());
        assert!("hello".parse::<Key>().is_err());
    }

    #[test]
    fn test_parse_line() {
        let keys = parse_keys("12.5 + 3 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::DecimalPoint,
                Key::Digit('5'),
                Key::Operator(Operator::Add),
                Key::Digit('3'),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_memory_keys() {
        assert!(Key::MemoryClear.is_memory());
        assert!(!Key::Percent.is_memory());
        assert_eq!(Key::DecimalPoint.digit_char(), Some('.'));
        assert_eq!(Key::Equals.digit_char(), None);
    }
}
