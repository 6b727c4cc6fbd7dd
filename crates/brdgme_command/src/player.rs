//! Player names.

use crate::enumeration::{Enum, EnumValue};
use crate::output::ParseResult;
use crate::value::Value;

/// Matches a player by a prefix of their name.
///
/// The candidates come from the names passed to each parse call rather than
/// from the grammar, so one grammar node serves every game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Player;

impl Player {
    fn candidates<C>(names: &[String]) -> Enum<C> {
        Enum::partial(
            names
                .iter()
                .enumerate()
                .map(|(index, name)| EnumValue::new(name.clone(), Value::Player(index)))
                .collect(),
        )
    }

    pub(crate) fn parse<'a, C: Clone>(self, input: &'a str, names: &[String]) -> ParseResult<'a, C> {
        Self::candidates::<C>(names).parse(input)
    }

    pub(crate) fn expected(self, names: &[String]) -> Vec<String> {
        names.to_vec()
    }
}
