use serde::Deserialize;

/// An embedded relation as the store returns it.
///
/// Depending on the cardinality the store infers, a logically singular relation
/// arrives either as an object or as an array (possibly of one element).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Nested<T> {
    /// The singular view: the object itself, or the first array element.
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::Many(items) => items.first(),
            Self::One(item) => Some(item),
        }
    }
}
