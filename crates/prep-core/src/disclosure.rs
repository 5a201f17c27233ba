/// Single-slot expand/collapse state for questions.
///
/// There is one "currently expanded" slot shared by every question across all
/// categories: opening a question replaces whatever was open, and clicking the
/// open question again closes it. Keys are not validated against the store.
use crate::model::QuestionKey;

pub fn toggle(current: Option<QuestionKey>, clicked: QuestionKey) -> Option<QuestionKey> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn click_sequence() {
        let k01 = QuestionKey::new(0, 1);
        let k10 = QuestionKey::new(1, 0);

        let state = toggle(None, k01);
        assert_eq!(state, Some(k01));
        assert_eq!(toggle(state, k01), None);

        let state = toggle(toggle(None, k01), k10);
        assert_eq!(state, Some(k10));
    }

    #[test]
    fn unknown_keys_are_accepted() {
        let far = QuestionKey::new(999, 999);
        assert_eq!(toggle(None, far), Some(far));
    }

    fn arb_key() -> impl Strategy<Value = QuestionKey> {
        (0usize..8, 0usize..8).prop_map(|(c, q)| QuestionKey::new(c, q))
    }

    proptest! {
        #[test]
        fn double_click_collapses(k in arb_key()) {
            prop_assert_eq!(toggle(toggle(None, k), k), None);
        }

        #[test]
        fn different_key_replaces(k1 in arb_key(), k2 in arb_key()) {
            prop_assume!(k1 != k2);
            prop_assert_eq!(toggle(Some(k1), k2), Some(k2));
        }

        #[test]
        fn at_most_one_expanded(clicks in proptest::collection::vec(arb_key(), 0..20)) {
            let mut state = None;
            for k in clicks {
                let next = toggle(state, k);
                prop_assert!(next.is_none() || next == Some(k));
                state = next;
            }
        }
    }
}
