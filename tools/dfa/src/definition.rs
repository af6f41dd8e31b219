use clap::Args;
use log::info;
use thiserror::Error;

use fa_dfa::Dfa;
use fa_utilities::FaError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("State {0} is defined twice")]
    DuplicateState(String),

    #[error("Invalid transition {0}, expected <from>:<symbol>:<to>")]
    InvalidTransition(String),

    #[error("Transition {0} refers to an unknown state or symbol")]
    UnknownTransition(String),

    #[error("Start state {0} is not defined")]
    UnknownStart(String),

    #[error("Final state {0} is not defined")]
    UnknownFinal(String),
}

/// The command line arguments that define an automaton.
#[derive(Args, Debug)]
pub struct DfaArgs {
    #[arg(long, required = true, value_delimiter = ',', help = "The names of the states")]
    states: Vec<String>,

    #[arg(long, value_delimiter = ',', help = "The symbols of the alphabet")]
    sigma: Vec<char>,

    #[arg(long = "transition", help = "A transition <from>:<symbol>:<to>, can be repeated")]
    transitions: Vec<String>,

    #[arg(long, help = "The name of the start state")]
    start: String,

    #[arg(long = "final", value_delimiter = ',', help = "The names of the accepting states")]
    finals: Vec<String>,
}

impl DfaArgs {
    /// Registers everything given on the command line in a new automaton. Any
    /// rejected registration is an error.
    pub fn build(&self) -> Result<Dfa, FaError> {
        let mut dfa = Dfa::new();

        for symbol in &self.sigma {
            dfa.add_symbol(*symbol);
        }

        for state in &self.states {
            if !dfa.add_state(state) {
                return Err(DefinitionError::DuplicateState(state.clone()).into());
            }
        }

        for transition in &self.transitions {
            let (from, symbol, to) =
                read_transition(transition).ok_or_else(|| DefinitionError::InvalidTransition(transition.clone()))?;

            if !dfa.add_transition(from, to, symbol) {
                return Err(DefinitionError::UnknownTransition(transition.clone()).into());
            }
        }

        if !dfa.set_start(&self.start) {
            return Err(DefinitionError::UnknownStart(self.start.clone()).into());
        }

        for state in &self.finals {
            if !dfa.set_final(state) {
                return Err(DefinitionError::UnknownFinal(state.clone()).into());
            }
        }

        info!(
            "Defined automaton with {} states and {} transitions",
            dfa.num_of_states(),
            dfa.num_of_transitions()
        );
        Ok(dfa)
    }
}

/// Parses a transition of the form `<from>:<symbol>:<to>`, where the symbol
/// is a single character.
fn read_transition(input: &str) -> Option<(&str, char, &str)> {
    let mut parts = input.split(':');
    let from = parts.next()?.trim();
    let symbol = parts.next()?;
    let to = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }

    let mut chars = symbol.chars();
    let symbol = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    Some((from, symbol, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn ends_in_one() -> DfaArgs {
        DfaArgs {
            states: vec!["q0".into(), "q1".into()],
            sigma: vec!['0', '1'],
            transitions: vec!["q0:0:q0".into(), "q0:1:q1".into(), "q1:0:q0".into(), "q1:1:q1".into()],
            start: "q0".into(),
            finals: vec!["q1".into()],
        }
    }

    #[test]
    fn test_read_transition() {
        assert_eq!(read_transition("q0:1:q1"), Some(("q0", '1', "q1")));
        assert_eq!(read_transition("q0::q1"), None);
        assert_eq!(read_transition("q0:10:q1"), None);
        assert_eq!(read_transition("q0:1"), None);
        assert_eq!(read_transition("q0:1:q1:q2"), None);
    }

    #[test]
    fn test_build() {
        let dfa = ends_in_one().build().unwrap();

        assert!(dfa.accepts("101").unwrap());
        assert!(!dfa.accepts("100").unwrap());
    }

    #[test]
    fn test_build_failures() {
        let mut args = ends_in_one();
        args.transitions.push("q0:2:q1".into());
        assert!(args.build().is_err());

        let mut args = ends_in_one();
        args.states.push("q0".into());
        assert!(args.build().is_err());

        let mut args = ends_in_one();
        args.start = "q2".into();
        assert!(args.build().is_err());

        let mut args = ends_in_one();
        args.finals.push("q2".into());
        assert!(args.build().is_err());
    }
}
