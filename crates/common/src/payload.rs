use serde::{Deserialize, Serialize, Serializer};

use crate::error::InvalidResponse;

/// Body returned by every number endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumbersPayload {
    #[serde(serialize_with = "serialize_numbers")]
    pub numbers: Vec<f64>,
}

/// Parses a response body, rejecting anything without a `numbers` array of JSON numbers.
pub fn parse_numbers(body: &[u8]) -> Result<Vec<f64>, InvalidResponse> {
    serde_json::from_slice::<NumbersPayload>(body)
        .map(|p| p.numbers)
        .map_err(|_| InvalidResponse::Format)
}

// Largest magnitude where every whole f64 is exactly representable as an integer.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Writes whole values as JSON integers (`4`, not `4.0`).
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.fract() == 0.0 && v.abs() <= MAX_EXACT {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

pub fn serialize_numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    struct Compact(f64);

    impl Serialize for Compact {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_number(&self.0, serializer)
        }
    }

    serializer.collect_seq(values.iter().map(|&v| Compact(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_array() {
        assert_eq!(
            parse_numbers(br#"{"numbers":[2,3,5,7]}"#).unwrap(),
            vec![2.0, 3.0, 5.0, 7.0]
        );
        assert!(parse_numbers(br#"{"numbers":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn accepts_any_json_number() {
        assert_eq!(parse_numbers(br#"{"numbers":[4.0,2]}"#).unwrap(), vec![4.0, 2.0]);
        assert_eq!(parse_numbers(br#"{"numbers":[2.5,4]}"#).unwrap(), vec![2.5, 4.0]);
        assert_eq!(parse_numbers(br#"{"numbers":[1e3,-7]}"#).unwrap(), vec![1000.0, -7.0]);
    }

    #[test]
    fn ignores_extra_fields() {
        let body = br#"{"numbers":[1],"windowSize":10}"#;
        assert_eq!(parse_numbers(body).unwrap(), vec![1.0]);
    }

    #[test]
    fn rejects_malformed_bodies() {
        for body in [
            &b"{}"[..],
            b"null",
            b"[1,2,3]",
            br#"{"numbers":null}"#,
            br#"{"numbers":"1,2"}"#,
            br#"{"numbers":[1,"2"]}"#,
            br#"{"numbers":[1,null]}"#,
            b"<html>",
        ] {
            assert_eq!(parse_numbers(body), Err(InvalidResponse::Format));
        }
    }

    #[test]
    fn whole_values_serialize_as_integers() {
        let payload = NumbersPayload { numbers: vec![4.0, 2.5, -0.0, 1e3] };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"numbers":[4,2.5,0,1000]}"#);
    }
}
