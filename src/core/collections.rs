use std::collections::BTreeMap;

/// Squares each number into a preallocated buffer, index by index.
pub fn squares(numbers: &[i64]) -> Vec<i128> {
    let mut out = vec![0i128; numbers.len()];
    for (i, &n) in numbers.iter().enumerate() {
        out[i] = i128::from(n) * i128::from(n);
    }
    out
}

/// Default stock for the inventory demo.
pub fn default_inventory() -> BTreeMap<String, u32> {
    [("apple", 3), ("banana", 5), ("orange", 2)]
        .into_iter()
        .map(|(fruit, count)| (fruit.to_string(), count))
        .collect()
}

/// One sentence per item, in key order.
pub fn describe_inventory(inventory: &BTreeMap<String, u32>) -> Vec<String> {
    inventory
        .iter()
        .map(|(item, count)| format!("We have {} {}(s)", count, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_one_to_five() {
        assert_eq!(squares(&[1, 2, 3, 4, 5]), vec![1, 4, 9, 16, 25]);
        assert!(squares(&[]).is_empty());
        assert_eq!(squares(&[i64::MIN])[0], i128::from(i64::MIN).pow(2));
    }

    #[test]
    fn test_inventory_lines_are_sorted_by_item() {
        let lines = describe_inventory(&default_inventory());
        assert_eq!(
            lines,
            vec![
                "We have 3 apple(s)",
                "We have 5 banana(s)",
                "We have 2 orange(s)",
            ]
        );
    }

    #[test]
    fn test_inventory_order_ignores_insertion_order() {
        let mut inventory = BTreeMap::new();
        inventory.insert("pear".to_string(), 1);
        inventory.insert("fig".to_string(), 4);
        assert_eq!(
            describe_inventory(&inventory),
            vec!["We have 4 fig(s)", "We have 1 pear(s)"]
        );
    }
}
