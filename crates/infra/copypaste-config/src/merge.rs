//! RFC 7396 JSON Merge Patch.
//!
//! - Objects merge recursively
//! - `null` in patch deletes keys from target
//! - Arrays and scalars replace

use serde_json::Value;

/// Apply an RFC 7396 merge patch to `target`.
///
/// Type mismatches (object in patch vs scalar in target) result in replacement.
///
/// ```
/// use serde_json::json;
/// use copypaste_config::merge::merge_patch;
///
/// let global = json!({"models": {"default_model": "gemini-1.5-flash"}, "logging": {"level": "warn"}});
/// let local = json!({"models": {"default_model": "gemini-2.0-flash"}, "logging": null});
/// assert_eq!(
///     merge_patch(global, local),
///     json!({"models": {"default_model": "gemini-2.0-flash"}})
/// );
/// ```
#[must_use]
pub fn merge_patch(target: Value, patch: Value) -> Value {
    match (target, patch) {
        (Value::Object(mut target_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                if patch_value.is_null() {
                    target_map.remove(&key);
                    continue;
                }

                let existing = target_map.remove(&key).unwrap_or(Value::Null);
                target_map.insert(key, merge_patch(existing, patch_value));
            }
            Value::Object(target_map)
        }
        (_, patch) => patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn nested_objects_merge() {
        let target = json!({"services": {"gemini": {"base_url": "https://a"}}, "prompt": {"template": "t"}});
        let patch = json!({"services": {"gemini": {"base_url": "https://b"}}});
        assert_eq!(
            merge_patch(target, patch),
            json!({"services": {"gemini": {"base_url": "https://b"}}, "prompt": {"template": "t"}})
        );
    }

    #[test]
    fn null_deletes_nested_key() {
        let target = json!({"scrubber": {"phrase": "x"}, "logging": {"json": true}});
        let patch = json!({"scrubber": {"phrase": null}});
        assert_eq!(
            merge_patch(target, patch),
            json!({"scrubber": {}, "logging": {"json": true}})
        );
    }

    #[test]
    fn arrays_and_scalars_replace() {
        assert_eq!(merge_patch(json!({"a": [1, 2]}), json!({"a": [3]})), json!({"a": [3]}));
        assert_eq!(merge_patch(json!({"a": {"b": 1}}), json!({"a": 7})), json!({"a": 7}));
        assert_eq!(merge_patch(json!({"a": 7}), json!({"a": {"b": 1}})), json!({"a": {"b": 1}}));
    }

    proptest! {
        #[test]
        fn empty_patch_is_identity(target in arb_object(true)) {
            prop_assert_eq!(merge_patch(target.clone(), json!({})), target);
        }

        /// Holds only for patches without deletion markers.
        #[test]
        fn merge_is_idempotent(target in arb_object(true), patch in arb_object(false)) {
            let once = merge_patch(target, patch.clone());
            let twice = merge_patch(once.clone(), patch);
            prop_assert_eq!(once, twice);
        }
    }

    fn arb_object(with_null: bool) -> impl Strategy<Value = Value> {
        prop::collection::hash_map("[a-z]{1,3}", arb_value(with_null), 0..5)
            .prop_map(|m| Value::Object(m.into_iter().collect()))
    }

    fn arb_value(with_null: bool) -> impl Strategy<Value = Value> {
        let nested = prop::collection::hash_map("[a-z]{1,2}", arb_leaf(with_null), 0..3)
            .prop_map(|m| Value::Object(m.into_iter().collect()));
        prop_oneof![arb_leaf(with_null), nested]
    }

    fn arb_leaf(with_null: bool) -> BoxedStrategy<Value> {
        let scalars = prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,10}".prop_map(Value::String),
        ];
        if with_null {
            prop_oneof![Just(Value::Null), scalars].boxed()
        } else {
            scalars.boxed()
        }
    }
}
