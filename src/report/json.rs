// src/report/json.rs
use crate::error::Result;
use crate::group::Group;

/// Formats groups as a JSON array of string arrays.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json(groups: &[Group]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(groups)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let groups = vec![Group {
            members: vec!["order_id".into(), "orderid".into()],
        }];
        let parsed: serde_json::Value = serde_json::from_str(&format_json(&groups).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!([["order_id", "orderid"]]));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_json(&[]).unwrap(), "[]\n");
    }
}
