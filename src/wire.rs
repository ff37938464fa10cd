//! Wire-format field naming.
//!
//! The service speaks snake_case. Request bodies are assembled under the
//! client's descriptive camelCase field names and folded to the wire
//! convention in one mechanical pass, with no per-field cases.

use serde_json::Value;

/// Convert one descriptive-case key to the wire's snake_case convention.
///
/// Every ASCII uppercase letter becomes `_` plus its lowercase form; all
/// other characters pass through. Reapplying to an already-converted key is
/// a no-op.
pub(crate) fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rename the top-level keys of a JSON object to snake_case.
///
/// One level deep only: nested objects and arrays (image payloads, skeleton
/// frames) are already wire-shaped by their own encoders and pass through
/// untouched. Values and key order are preserved; non-object input is
/// returned as-is.
pub(crate) fn snake_case_keys(body: Value) -> Value {
    match body {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (to_snake_case(&key), value))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_word_passes_through() {
        assert_eq!(to_snake_case("description"), "description");
        assert_eq!(to_snake_case("seed"), "seed");
    }

    #[test]
    fn test_camel_case_converts() {
        assert_eq!(to_snake_case("imageSize"), "image_size");
        assert_eq!(to_snake_case("negativeDescription"), "negative_description");
        assert_eq!(to_snake_case("nFrames"), "n_frames");
        assert_eq!(to_snake_case("initImageStrength"), "init_image_strength");
    }

    #[test]
    fn test_conversion_is_idempotent() {
        for key in ["imageSize", "nFrames", "already_snake", "seed"] {
            let once = to_snake_case(key);
            assert_eq!(to_snake_case(&once), once);
        }
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_object_keys_renamed_values_untouched() {
        let body = json!({
            "description": "a robot",
            "imageSize": {"width": 32, "height": 32},
            "noBackground": true,
            "seed": 0,
        });

        let wire = snake_case_keys(body);
        assert_eq!(
            wire,
            json!({
                "description": "a robot",
                "image_size": {"width": 32, "height": 32},
                "no_background": true,
                "seed": 0,
            })
        );
    }

    #[test]
    fn test_nested_objects_are_not_recursed_into() {
        let body = json!({
            "initImage": {"type": "base64", "base64": "aGk=", "format": "png"},
            "skeletonKeypoints": [{"keypoints": []}],
        });

        let wire = snake_case_keys(body);
        assert_eq!(wire["init_image"]["base64"], json!("aGk="));
        assert_eq!(wire["skeleton_keypoints"], json!([{"keypoints": []}]));
    }

    #[test]
    fn test_non_object_passes_through() {
        assert_eq!(snake_case_keys(json!(null)), json!(null));
        assert_eq!(snake_case_keys(json!([1, 2])), json!([1, 2]));
        assert_eq!(snake_case_keys(json!("imageSize")), json!("imageSize"));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let body = json!({
            "zLast": 1,
            "aFirst": 2,
            "imageSize": 3,
        });

        let wire = snake_case_keys(body);
        let keys: Vec<&String> = wire.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z_last", "a_first", "image_size"]);
    }
}
