use std::collections::BTreeMap;

use objecthash::{common_json_hash, object_hash, Number, Set, Value};
use proptest::prelude::*;

fn object_text(entries: &[(String, i32)]) -> String {
    let members: Vec<String> = entries
        .iter()
        .map(|(k, v)| format!("{}:{}", serde_json::to_string(k).unwrap(), v))
        .collect();
    format!("{{{}}}", members.join(","))
}

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |x| x.is_finite())
}

proptest! {
    #[test]
    fn object_digest_ignores_member_order(map in prop::collection::btree_map(".{0,8}", any::<i32>(), 0..8)) {
        let forward: Vec<(String, i32)> = map.into_iter().collect();
        let mut backward = forward.clone();
        backward.reverse();
        prop_assert_eq!(
            common_json_hash(&object_text(&forward)).unwrap(),
            common_json_hash(&object_text(&backward)).unwrap()
        );
    }

    #[test]
    fn integer_and_float_literals_agree(k in any::<i32>()) {
        prop_assert_eq!(
            common_json_hash(&format!("[{}]", k)).unwrap(),
            common_json_hash(&format!("[{}.0]", k)).unwrap()
        );
    }

    #[test]
    fn set_digest_ignores_order_and_repeats(members in prop::collection::vec(".{0,4}", 0..10)) {
        let mut shuffled = members.clone();
        shuffled.reverse();
        shuffled.extend(members.iter().cloned());

        let plain = object_hash(&Set(members.clone())).unwrap();
        prop_assert_eq!(plain, object_hash(&Set(shuffled)).unwrap());

        let deduped: std::collections::BTreeSet<String> = members.into_iter().collect();
        prop_assert_eq!(plain, object_hash(&Set(deduped.into_iter().collect())).unwrap());
    }

    #[test]
    fn hashing_is_deterministic(entries in prop::collection::vec((".{0,6}", finite()), 0..6)) {
        let map: BTreeMap<String, f64> = entries.into_iter().collect();
        prop_assert_eq!(object_hash(&map).unwrap(), object_hash(&map).unwrap());
    }

    #[test]
    fn canonical_numbers_are_injective(a in finite(), b in finite()) {
        let (x, y) = (Number::new(a).unwrap(), Number::new(b).unwrap());
        prop_assert_eq!(a == b, x.canonical() == y.canonical());
    }

    #[test]
    fn json_numbers_round_trip_to_the_same_digest(x in finite()) {
        let text = serde_json::to_string(&x).unwrap();
        prop_assert_eq!(
            common_json_hash(&text).unwrap(),
            Value::Number(Number::new(x).unwrap()).digest()
        );
    }
}
