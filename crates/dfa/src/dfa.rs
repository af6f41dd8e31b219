use log::debug;
use rustc_hash::FxHashMap;

use fa_utilities::IndexedSet;
use fa_utilities::debug_trace;

use crate::DfaError;
use crate::State;
use crate::StateIndex;

/// The input that denotes the empty string for [`Dfa::accepts`].
pub const EMPTY_STRING: &str = "e";

/// A deterministic finite automaton (Q, Sigma, delta, q0, F) over `char`
/// symbols. The transition function may be partial, a missing transition
/// rejects the input.
///
/// States are referred to by name in the public interface. Internally every
/// state has a [`StateIndex`] into the state arena, and transitions only store
/// these indices.
///
/// The registration operations take `&mut self` and the queries `&self`, so
/// queries on a shared automaton can never interleave with its construction.
#[derive(Clone, Debug, Default)]
pub struct Dfa {
    /// The states in insertion order, indexed by [`StateIndex`].
    states: Vec<State>,

    /// The outgoing transitions of every state, indexed by [`StateIndex`].
    outgoing: Vec<FxHashMap<char, StateIndex>>,

    /// Maps state names to their index.
    names: FxHashMap<String, StateIndex>,

    alphabet: IndexedSet<char>,
    initial_state: Option<StateIndex>,
    final_states: IndexedSet<StateIndex>,
}

impl Dfa {
    /// Creates an automaton without states, symbols and transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state with the given name, returns false and does nothing if a
    /// state with this name already exists.
    pub fn add_state(&mut self, name: &str) -> bool {
        if self.names.contains_key(name) {
            debug!("State {name} already exists");
            return false;
        }

        let index = StateIndex::new(self.states.len());
        self.names.insert(name.to_string(), index);
        self.states.push(State::new(name));
        self.outgoing.push(FxHashMap::default());
        true
    }

    /// Adds the symbol to the alphabet, adding it twice has no effect.
    pub fn add_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Makes the given state the (unique) start state, replacing the previous
    /// one. Returns false and leaves the start state unchanged when no state
    /// has this name.
    pub fn set_start(&mut self, name: &str) -> bool {
        match self.state_index(name) {
            Some(index) => {
                self.initial_state = Some(index);
                true
            }
            None => {
                debug!("Cannot make unknown state {name} the start state");
                false
            }
        }
    }

    /// Marks the given state as accepting. Returns false when no state has
    /// this name.
    pub fn set_final(&mut self, name: &str) -> bool {
        match self.state_index(name) {
            Some(index) => {
                self.final_states.insert(index);
                true
            }
            None => {
                debug!("Cannot make unknown state {name} accepting");
                false
            }
        }
    }

    /// Adds the transition `from --[symbol]-> to`, replacing an existing
    /// transition of `from` on `symbol`.
    ///
    /// Returns false without changing the automaton when one of the states is
    /// unknown or the symbol is not part of the alphabet.
    pub fn add_transition(&mut self, from: &str, to: &str, symbol: char) -> bool {
        let (Some(from_index), Some(to_index)) = (self.state_index(from), self.state_index(to)) else {
            debug!("Rejected transition {from} --[{symbol}]-> {to}, unknown state");
            return false;
        };

        if !self.alphabet.contains(&symbol) {
            debug!("Rejected transition {from} --[{symbol}]-> {to}, symbol not in the alphabet");
            return false;
        }

        self.outgoing[*from_index].insert(symbol, to_index);
        true
    }

    /// Returns true iff the automaton ends in an accepting state after
    /// reading the input from left to right, starting in the start state.
    ///
    /// The input [`EMPTY_STRING`] (and the actual empty string) is accepted iff
    /// the start state is accepting. Reading a symbol without a transition
    /// rejects immediately.
    pub fn accepts(&self, input: &str) -> Result<bool, DfaError> {
        let initial_state = self.initial_state.ok_or(DfaError::MissingStartState)?;
        if input == EMPTY_STRING {
            return Ok(self.final_states.contains(&initial_state));
        }

        let mut current = initial_state;
        for symbol in input.chars() {
            let Some(next) = self.next_state(current, symbol) else {
                debug_trace!("No transition for {} on {symbol}, rejecting {input}", self.states[*current]);
                return Ok(false);
            };

            debug_trace!("{} --[{symbol}]-> {}", self.states[*current], self.states[*next]);
            current = next;
        }

        Ok(self.final_states.contains(&current))
    }

    /// Returns the alphabet in insertion order.
    pub fn alphabet(&self) -> &IndexedSet<char> {
        &self.alphabet
    }

    /// Returns an iterator over the symbols of the alphabet in insertion order.
    pub fn sigma(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    /// Returns the state with the given name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.state_index(name).map(|index| &self.states[*index])
    }

    /// Iterates over all states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    /// Returns true iff the state with the given name exists and is accepting.
    pub fn is_final(&self, name: &str) -> bool {
        self.state_index(name)
            .is_some_and(|index| self.final_states.contains(&index))
    }

    /// Returns true iff the state with the given name is the start state.
    pub fn is_start(&self, name: &str) -> bool {
        self.start_state().is_some_and(|state| state.name() == name)
    }

    /// Returns the start state, if it has been set.
    pub fn start_state(&self) -> Option<&State> {
        self.initial_state.map(|index| &self.states[*index])
    }

    /// Iterates over the accepting states in the order they were marked.
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.final_states.iter().map(|index| &self.states[**index])
    }

    /// Returns the destination of the transition from the given state on the
    /// symbol, if there is one.
    pub fn transition(&self, from: &str, symbol: char) -> Option<&State> {
        let from = self.state_index(from)?;
        self.next_state(from, symbol).map(|index| &self.states[*index])
    }

    /// Returns the outgoing transitions of the given state as (symbol,
    /// destination) pairs, ordered by the alphabet. Returns None when no
    /// state has this name.
    pub fn transitions(&self, name: &str) -> Option<impl Iterator<Item = (char, &State)> + '_> {
        let index = self.state_index(name)?;
        Some(self.sigma().filter_map(move |symbol| {
            self.next_state(index, symbol)
                .map(|to| (symbol, &self.states[*to]))
        }))
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.outgoing.iter().map(|transitions| transitions.len()).sum()
    }

    /// Returns the index of the state with the given name.
    fn state_index(&self, name: &str) -> Option<StateIndex> {
        self.names.get(name).copied()
    }

    /// Returns the state reached from `state` by reading `symbol`.
    fn next_state(&self, state: StateIndex, symbol: char) -> Option<StateIndex> {
        self.outgoing[*state].get(&symbol).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use fa_utilities::random_test;

    use crate::random_dfa;
    use crate::random_word;
    use crate::test_utility::ends_in_one;

    #[test]
    fn test_ends_in_one() {
        let dfa = ends_in_one();

        assert_eq!(dfa.accepts("1"), Ok(true));
        assert_eq!(dfa.accepts("0"), Ok(false));
        assert_eq!(dfa.accepts("101"), Ok(true));
        assert_eq!(dfa.accepts("100"), Ok(false));
        assert_eq!(dfa.accepts(EMPTY_STRING), Ok(false));
        assert_eq!(dfa.accepts(""), Ok(false));
    }

    #[test]
    fn test_empty_string_accepted_by_accepting_start() {
        let mut dfa = ends_in_one();
        assert!(dfa.set_final("q0"));

        assert_eq!(dfa.accepts(EMPTY_STRING), Ok(true));
        assert_eq!(dfa.accepts("10"), Ok(true));
    }

    #[test]
    fn test_missing_start_state() {
        let mut dfa = Dfa::new();
        dfa.add_state("q0");
        dfa.add_symbol('a');

        assert_eq!(dfa.accepts("a"), Err(DfaError::MissingStartState));
        assert_eq!(dfa.accepts(EMPTY_STRING), Err(DfaError::MissingStartState));
    }

    #[test]
    fn test_missing_transition_rejects() {
        let mut dfa = Dfa::new();
        dfa.add_state("a");
        dfa.add_state("b");
        dfa.add_symbol('x');
        dfa.add_symbol('y');
        dfa.add_transition("a", "b", 'x');
        dfa.add_transition("b", "b", 'x');
        dfa.add_transition("b", "b", 'y');
        dfa.set_start("a");
        dfa.set_final("b");

        assert_eq!(dfa.accepts("xyy"), Ok(true));
        // There is no transition from a on y, the remainder is irrelevant.
        assert_eq!(dfa.accepts("yxxx"), Ok(false));
        // Symbols outside of the alphabet never have a transition.
        assert_eq!(dfa.accepts("xz"), Ok(false));
    }

    #[test]
    fn test_rejected_transitions() {
        let mut dfa = ends_in_one();
        let before = dfa.to_string();

        assert!(!dfa.add_transition("missing_state", "q1", '0'));
        assert!(!dfa.add_transition("q0", "missing_state", '0'));
        assert!(!dfa.add_transition("q0", "q1", '2'));

        assert_eq!(dfa.num_of_transitions(), 4);
        assert_eq!(dfa.to_string(), before);
    }

    #[test]
    fn test_transition_last_write_wins() {
        let mut dfa = ends_in_one();
        assert!(dfa.add_transition("q0", "q0", '1'));

        assert_eq!(dfa.num_of_transitions(), 4);
        assert_eq!(dfa.transition("q0", '1'), Some(&State::new("q0")));
        assert_eq!(dfa.accepts("1"), Ok(false));
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut dfa = ends_in_one();

        dfa.add_symbol('0');
        assert_eq!(dfa.sigma().collect::<Vec<_>>(), vec!['0', '1']);

        assert!(dfa.set_final("q1"));
        assert_eq!(dfa.final_states().count(), 1);

        assert!(!dfa.add_state("q0"));
        assert_eq!(dfa.num_of_states(), 2);
    }

    #[test]
    fn test_start_and_final_of_unknown_states() {
        let mut dfa = ends_in_one();

        assert!(!dfa.set_start("q2"));
        assert!(!dfa.set_final("q2"));
        assert!(dfa.is_start("q0"));
        assert!(!dfa.is_final("q2"));

        assert!(dfa.set_start("q1"));
        assert!(dfa.is_start("q1"));
        assert!(!dfa.is_start("q0"));
    }

    #[test]
    fn test_queries() {
        let dfa = ends_in_one();

        assert_eq!(dfa.state("q1").map(State::name), Some("q1"));
        assert_eq!(dfa.state("q2"), None);
        assert!(dfa.is_final("q1"));
        assert!(!dfa.is_final("q0"));
        assert_eq!(dfa.start_state(), Some(&State::new("q0")));
        assert_eq!(
            dfa.states().map(State::name).collect::<Vec<_>>(),
            vec!["q0", "q1"]
        );

        let outgoing: Vec<(char, &str)> = dfa
            .transitions("q1")
            .expect("q1 is a state")
            .map(|(symbol, to)| (symbol, to.name()))
            .collect();
        assert_eq!(outgoing, vec![('0', "q0"), ('1', "q1")]);
        assert!(dfa.transitions("q2").is_none());
    }

    #[test]
    fn test_random_accepts_is_pure() {
        random_test(100, |rng| {
            let dfa = random_dfa(rng, 6, &['a', 'b', 'c'], 0.8);

            for _ in 0..10 {
                let word = random_word(rng, &['a', 'b', 'c'], 8);
                assert_eq!(dfa.accepts(&word), dfa.accepts(&word));
            }
        });
    }
}
