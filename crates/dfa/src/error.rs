use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DfaError {
    #[error("The automaton has no start state, call set_start first")]
    MissingStartState,
}
