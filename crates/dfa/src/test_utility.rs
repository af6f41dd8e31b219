use crate::Dfa;

/// Binary strings ending in a 1.
pub fn ends_in_one() -> Dfa {
    let mut dfa = Dfa::new();
    assert!(dfa.add_state("q0"));
    assert!(dfa.add_state("q1"));
    dfa.add_symbol('0');
    dfa.add_symbol('1');

    assert!(dfa.add_transition("q0", "q0", '0'));
    assert!(dfa.add_transition("q0", "q1", '1'));
    assert!(dfa.add_transition("q1", "q0", '0'));
    assert!(dfa.add_transition("q1", "q1", '1'));

    assert!(dfa.set_start("q0"));
    assert!(dfa.set_final("q1"));
    dfa
}
