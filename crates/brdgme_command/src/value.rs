//! Dynamically typed parse results.

use std::fmt;

/// The value produced by a successful parse.
///
/// Primitive combinators produce the built-in variants; `Map` lets a game
/// project them into its own command type `C`, carried by [`Value::Custom`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value<C = ()> {
    /// Absence of a value (a skipped `Opt`).
    None,
    /// An integer literal.
    Int(i64),
    /// Matched text (tokens, enum names, whitespace).
    Text(String),
    /// A player index into the names supplied at parse time.
    Player(usize),
    /// Ordered child values (`Chain`, `Many`).
    List(Vec<Value<C>>),
    /// A consumer-defined value produced by `Map`.
    Custom(C),
}

impl<C> Value<C> {
    /// Returns true if this is [`Value::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a player index.
    #[must_use]
    pub const fn as_player(&self) -> Option<usize> {
        match self {
            Self::Player(p) => Some(*p),
            _ => None,
        }
    }

    /// Attempts to borrow the child values of a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value<C>]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to borrow a custom value.
    #[must_use]
    pub const fn as_custom(&self) -> Option<&C> {
        match self {
            Self::Custom(c) => Some(c),
            _ => None,
        }
    }

    /// Consumes the value, returning the child values of a list.
    #[must_use]
    pub fn into_list(self) -> Option<Vec<Value<C>>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Consumes the value, returning a custom value.
    #[must_use]
    pub fn into_custom(self) -> Option<C> {
        match self {
            Self::Custom(c) => Some(c),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Player(_) => "player",
            Self::List(_) => "list",
            Self::Custom(_) => "custom",
        }
    }

    /// Borrows the `index`th child of a list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value<C>> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Consumes a list, returning its `index`th child.
    ///
    /// Returns [`Value::None`] if this is not a list or the index is out of
    /// range, which keeps `Map` projections total.
    #[must_use]
    pub fn take(self, index: usize) -> Value<C> {
        self.into_list()
            .and_then(|items| items.into_iter().nth(index))
            .unwrap_or(Self::None)
    }
}

impl<C> From<i64> for Value<C> {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl<C> From<&str> for Value<C> {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<C> From<String> for Value<C> {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<C> From<Vec<Value<C>>> for Value<C> {
    fn from(items: Vec<Value<C>>) -> Self {
        Self::List(items)
    }
}

impl<C: fmt::Debug> fmt::Display for Value<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Player(p) => write!(f, "player#{p}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Custom(c) => write!(f, "{c:?}"),
        }
    }
}
