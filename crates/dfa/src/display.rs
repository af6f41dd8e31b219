use std::fmt;

use crate::Dfa;
use crate::DfaError;

/// Printed in the transition table for a state without a transition on a
/// symbol, and for the start state when it has not been set.
pub const MISSING_TRANSITION: &str = "-";

impl Dfa {
    /// Renders the automaton as in its [`fmt::Display`] implementation, but
    /// fails when no start state has been set.
    pub fn render(&self) -> Result<String, DfaError> {
        if self.start_state().is_none() {
            return Err(DfaError::MissingStartState);
        }

        Ok(self.to_string())
    }
}

/// Prints the five components of the automaton, with the transition function
/// as a table with one row per state and one column per symbol.
impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Q
        write!(f, " Q = {{")?;
        for state in self.states() {
            write!(f, " {state}")?;
        }
        writeln!(f, " }}")?;

        // Sigma
        write!(f, "Sigma = {{")?;
        for symbol in self.sigma() {
            write!(f, " {symbol}")?;
        }
        writeln!(f, " }}")?;

        // delta
        writeln!(f, "delta =")?;
        write!(f, "\t\t")?;
        for symbol in self.sigma() {
            write!(f, "{symbol}\t")?;
        }
        writeln!(f)?;

        for state in self.states() {
            write!(f, "\t{state}")?;
            for symbol in self.sigma() {
                match self.transition(state.name(), symbol) {
                    Some(to) => write!(f, "\t{to}")?,
                    None => write!(f, "\t{MISSING_TRANSITION}")?,
                }
            }
            writeln!(f)?;
        }

        // q0
        match self.start_state() {
            Some(start) => writeln!(f, "q0 = {start}")?,
            None => writeln!(f, "q0 = {MISSING_TRANSITION}")?,
        }

        // F
        write!(f, "F = {{")?;
        for state in self.final_states() {
            write!(f, " {state}")?;
        }
        write!(f, " }}")
    }
}
