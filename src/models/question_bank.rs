//! Read-only catalog of all available items
use super::Item;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// Builds the bank keeping catalog order. On duplicate ids the first item wins the lookup.
    pub fn new(items: Vec<Item>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            index.entry(item.id.clone()).or_insert(pos);
        }
        Self { items, index }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for QuestionBank {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, explanation: &str) -> Item {
        Item {
            id: id.to_string(),
            subject: "Math".to_string(),
            stem: "?".to_string(),
            choices: vec!["a".to_string(), "b".to_string()],
            answer_index: 0,
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let bank = QuestionBank::new(vec![item("a", "x"), item("b", "y")]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get("b").map(|i| i.explanation.as_str()), Some("y"));
        assert!(bank.get("zzz").is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let bank = QuestionBank::new(vec![item("a", "first"), item("a", "second")]);
        assert_eq!(bank.get("a").unwrap().explanation, "first");
        assert_eq!(bank.items().len(), 2);
    }

    #[test]
    fn test_empty_bank() {
        let bank = QuestionBank::default();
        assert!(bank.is_empty());
        assert!(bank.get("a").is_none());
    }
}
