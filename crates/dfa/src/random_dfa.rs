use rand::Rng;
use rand::seq::IndexedRandom;

use crate::Dfa;

/// Generates a random automaton with states `s0` up to `s<num_of_states - 1>`
/// over the given alphabet. Every (state, symbol) pair gets a transition to
/// a random state with the given probability, so the result is usually
/// partial. The start state is `s0` and every state is accepting with
/// probability one half.
pub fn random_dfa(rng: &mut impl Rng, num_of_states: usize, alphabet: &[char], transition_probability: f64) -> Dfa {
    assert!(num_of_states > 0, "An automaton needs at least a start state");

    let mut dfa = Dfa::new();
    for symbol in alphabet {
        dfa.add_symbol(*symbol);
    }

    let names: Vec<String> = (0..num_of_states).map(|i| format!("s{i}")).collect();
    for name in &names {
        dfa.add_state(name);
    }

    for from in &names {
        for symbol in alphabet {
            if rng.random_bool(transition_probability) {
                let to = &names[rng.random_range(0..num_of_states)];
                dfa.add_transition(from, to, *symbol);
            }
        }

        if rng.random_bool(0.5) {
            dfa.set_final(from);
        }
    }

    dfa.set_start(&names[0]);
    dfa
}

/// Generates a random word of at most `max_length` symbols from the alphabet.
pub fn random_word(rng: &mut impl Rng, alphabet: &[char], max_length: usize) -> String {
    let length = rng.random_range(0..=max_length);
    (0..length)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use fa_utilities::random_test;

    #[test]
    fn test_random_dfa() {
        random_test(100, |rng| {
            let dfa = random_dfa(rng, 5, &['0', '1'], 0.5);

            assert_eq!(dfa.num_of_states(), 5);
            assert!(dfa.num_of_transitions() <= 10);
            assert!(dfa.is_start("s0"));
            assert!(dfa.render().is_ok());
        });
    }

    #[test]
    fn test_random_word() {
        random_test(100, |rng| {
            let word = random_word(rng, &['x', 'y'], 6);

            assert!(word.len() <= 6);
            assert!(word.chars().all(|symbol| symbol == 'x' || symbol == 'y'));
        });
    }
}
