use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use stride_core::enums::{AssignmentSort, DueFilter};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let sort: AssignmentSort = parse_enum("created", "sort").expect("sort should parse");
        assert_eq!(sort, AssignmentSort::Created);
    }

    #[test]
    fn parses_mixed_case() {
        let filter: DueFilter = parse_enum("Overdue", "filter").expect("filter should parse");
        assert_eq!(filter, DueFilter::Overdue);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<AssignmentSort>("priority", "sort").expect_err("should fail");
        assert!(err.to_string().contains("invalid sort 'priority'"));
    }
}
