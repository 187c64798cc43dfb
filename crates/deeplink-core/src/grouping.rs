use std::collections::HashMap;
use std::hash::Hash;

/// Bucket `items` by the key `key_fn` returns. Items keep their input order
/// inside each bucket.
pub fn grouped_by<T, K, I, F>(items: I, mut key_fn: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_preserve_input_order() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let groups = grouped_by(words, |w| w.chars().next());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&Some('a')], ["apple", "avocado"]);
        assert_eq!(groups[&Some('b')], ["banana", "blueberry"]);
        assert_eq!(groups[&Some('c')], ["cherry"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let groups = grouped_by(Vec::<i32>::new(), |n| n % 2);
        assert!(groups.is_empty());
    }
}
