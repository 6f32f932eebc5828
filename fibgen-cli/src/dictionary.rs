//! Dictionaries demo over a plain string-keyed map

use crate::error::CliError;
use std::collections::HashMap;

/// Run the demo and return the lines it prints
pub fn run_dictionaries() -> Result<Vec<String>, CliError> {
    let mut lines = Vec::new();

    // Indices
    let mut foo: HashMap<String, i64> = HashMap::new();
    foo.insert("baz".to_string(), 7);
    let qux = lookup(&foo, "baz")?;
    lines.push(format!("baz is {}", lookup(&foo, "baz")?));
    lines.push(format!("qux is {}", qux));

    // Initialization
    let mut container: HashMap<String, i64> = [("bbb", 1), ("ccc", 2), ("ddd", 3)]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

    // Contains key
    if container.contains_key("aaa") {
        lines.push("wrong".to_string());
    }
    if container.contains_key("bbb") {
        lines.push("contains bbb".to_string());
    }

    // Setting
    container.insert("aaa".to_string(), 7);
    lines.push(lookup(&container, "aaa")?.to_string());

    Ok(lines)
}

fn lookup(map: &HashMap<String, i64>, key: &str) -> Result<i64, CliError> {
    map.get(key)
        .copied()
        .ok_or_else(|| CliError::MissingKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(
            run_dictionaries().unwrap(),
            vec!["baz is 7", "qux is 7", "contains bbb", "7"]
        );
    }

    #[test]
    fn test_lookup_missing_key() {
        let map = HashMap::from([("present".to_string(), 1)]);
        assert_eq!(lookup(&map, "present").unwrap(), 1);
        assert!(matches!(lookup(&map, "absent"), Err(CliError::MissingKey(k)) if k == "absent"));
    }
}
