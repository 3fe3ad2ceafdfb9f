use std::collections::HashMap;

use proptest::prelude::*;

use crate::service::ServiceRecord;
use crate::types::Protocol;

fn any_protocol() -> impl Strategy<Value = Protocol> {
    prop_oneof![
        Just(Protocol::Mrp),
        Just(Protocol::Dmap),
        Just(Protocol::AirPlay),
    ]
}

fn any_properties() -> impl Strategy<Value = HashMap<String, String>> {
    proptest::collection::hash_map("[a-d]{1,2}", "[a-z0-9]{0,4}", 0..6)
}

proptest! {
    #[test]
    fn test_merge_is_union_with_second_write_wins(
        protocol in any_protocol(),
        first in any_properties(),
        second in any_properties(),
    ) {
        let mut existing = ServiceRecord::new(protocol, Some("a".to_string()))
            .with_properties(first.clone());
        let incoming = ServiceRecord::new(protocol, Some("b".to_string()))
            .with_properties(second.clone());

        existing.merge(incoming).expect("same protocol merges");

        let mut expected = first;
        expected.extend(second);
        prop_assert_eq!(existing.properties(), &expected);
        prop_assert_eq!(existing.identifier(), Some("a"));
    }

    #[test]
    fn test_merge_mismatch_never_mutates(
        a in any_protocol(),
        b in any_protocol(),
        props in any_properties(),
    ) {
        prop_assume!(a != b);
        let mut existing = ServiceRecord::new(a, None);
        let before = existing.clone();

        let result = existing.merge(ServiceRecord::new(b, None).with_properties(props));

        prop_assert!(result.is_err());
        prop_assert_eq!(existing, before);
    }
}
