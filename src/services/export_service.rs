//! Export service - JSON records for parsed checklist items

use crate::models::ChecklistItem;
use crate::Result;

/// Serialize items as a pretty-printed JSON array of
/// `{status, text, section_path, line_number}` records
pub fn items_to_json(items: &[ChecklistItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_str;

    #[test]
    fn test_items_to_json_layout() {
        let items = extract_str("## Setup\n- [ ] write spec\n- [x] done task\n");
        let json = items_to_json(&items).unwrap();

        let expected = r#"[
  {
    "status": " ",
    "text": "write spec",
    "section_path": "Setup",
    "line_number": 2
  },
  {
    "status": "x",
    "text": "done task",
    "section_path": "Setup",
    "line_number": 3
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_items_to_json_empty() {
        assert_eq!(items_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_json_records_have_exactly_four_fields() {
        let items = extract_str("- [~] in flight\n");
        let value: serde_json::Value = serde_json::from_str(&items_to_json(&items).unwrap()).unwrap();

        let record = value[0].as_object().unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record["status"], "~");
        assert_eq!(record["section_path"], "");
        assert_eq!(record["line_number"], 1);
    }
}
