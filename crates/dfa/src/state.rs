use std::fmt;

use fa_utilities::TagIndex;

/// A unique type for the states.
pub struct StateTag;

/// The index of a state in the automaton that registered it.
pub type StateIndex = TagIndex<usize, StateTag>;

/// A state of an automaton, identified only by its name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    name: String,
}

impl State {
    /// Creates a new state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
