use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;

/// The four CSS combinators.
///
/// Combining selectors accepts any `AsRef<str>`, so this enum is a
/// convenience, not a restriction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::AdjacentSibling),
            "~" => Ok(Combinator::GeneralSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert_eq!(" ".parse::<Combinator>().unwrap(), Combinator::Descendant);
        assert_eq!(">".parse::<Combinator>().unwrap(), Combinator::Child);
        assert_eq!("+".parse::<Combinator>().unwrap(), Combinator::AdjacentSibling);
        assert_eq!("~".parse::<Combinator>().unwrap(), Combinator::GeneralSibling);
    }

    #[test]
    fn rejects_unknown_token() {
        assert_eq!(
            "||".parse::<Combinator>(),
            Err(SelectorError::UnknownCombinator("||".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for combinator in [
            Combinator::Descendant,
            Combinator::Child,
            Combinator::AdjacentSibling,
            Combinator::GeneralSibling,
        ] {
            assert_eq!(combinator.to_string().parse::<Combinator>(), Ok(combinator));
        }
    }
}
