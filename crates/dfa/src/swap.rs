use log::debug;

use crate::Dfa;

/// Returns `second` for `first`, `first` for `second`, and any other symbol
/// unchanged.
pub fn swap_symbol(symbol: char, first: char, second: char) -> char {
    if symbol == first {
        second
    } else if symbol == second {
        first
    } else {
        symbol
    }
}

impl Dfa {
    /// Constructs a new automaton in which every transition on `first` is
    /// labelled `second` and vice versa. The states, the alphabet, the start
    /// state and the accepting states are copied as is.
    ///
    /// The result accepts a word iff this automaton accepts the word with
    /// `first` and `second` exchanged. It shares nothing with this automaton.
    pub fn swap(&self, first: char, second: char) -> Dfa {
        let mut result = Dfa::new();

        for symbol in self.sigma() {
            result.add_symbol(symbol);
        }

        for state in self.states() {
            result.add_state(state.name());
        }

        if let Some(start) = self.start_state() {
            result.set_start(start.name());
        }

        for state in self.final_states() {
            result.set_final(state.name());
        }

        for state in self.states() {
            for (symbol, to) in self.transitions(state.name()).into_iter().flatten() {
                let swapped = swap_symbol(symbol, first, second);
                if !result.add_transition(state.name(), to.name(), swapped) {
                    // Only happens when the swapped symbol is not part of the alphabet.
                    debug!("Dropped transition {state} --[{swapped}]-> {to}");
                }
            }
        }

        result
    }
}
