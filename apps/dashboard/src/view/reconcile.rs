use std::collections::HashMap;

/// How one keyed card moves between two renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyedChange {
    Retained { key: String, from: usize, to: usize },
    Inserted { key: String, at: usize },
    Removed { key: String, from: usize },
}

impl KeyedChange {
    pub fn key(&self) -> &str {
        match self {
            KeyedChange::Retained { key, .. }
            | KeyedChange::Inserted { key, .. }
            | KeyedChange::Removed { key, .. } => key,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, KeyedChange::Retained { from, to, .. } if from != to)
    }
}

/// Matches cards between two renders by key, never by position.
///
/// Changes for `next` come first in `next` order, followed by removals in
/// `prev` order. Keys are expected to be unique within each list.
pub fn reconcile<P, N>(prev: &[P], next: &[N]) -> Vec<KeyedChange>
where
    P: AsRef<str>,
    N: AsRef<str>,
{
    let prev: Vec<&str> = prev.iter().map(AsRef::<str>::as_ref).collect();
    let next: Vec<&str> = next.iter().map(AsRef::<str>::as_ref).collect();

    let prev_index: HashMap<&str, usize> = prev.iter().enumerate().map(|(i, k)| (*k, i)).collect();
    let next_index: HashMap<&str, usize> = next.iter().enumerate().map(|(i, k)| (*k, i)).collect();

    let mut changes: Vec<KeyedChange> = next
        .iter()
        .enumerate()
        .map(|(to, &key)| match prev_index.get(key) {
            Some(&from) => KeyedChange::Retained {
                key: key.to_string(),
                from,
                to,
            },
            None => KeyedChange::Inserted {
                key: key.to_string(),
                at: to,
            },
        })
        .collect();

    changes.extend(
        prev.iter()
            .enumerate()
            .filter(|(_, key)| !next_index.contains_key(*key))
            .map(|(from, key)| KeyedChange::Removed {
                key: key.to_string(),
                from,
            }),
    );

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_lists_retain_in_place() {
        let changes = reconcile(&["r1", "r2"], &["r1", "r2"]);
        assert!(changes
            .iter()
            .all(|c| matches!(c, KeyedChange::Retained { .. }) && !c.is_move()));
    }

    #[test]
    fn test_reorder_keeps_identity() {
        let changes = reconcile(&["r1", "r2", "r3"], &["r3", "r1", "r2"]);
        assert_eq!(
            changes[0],
            KeyedChange::Retained {
                key: "r3".into(),
                from: 2,
                to: 0
            }
        );
        assert_eq!(changes.iter().filter(|c| c.is_move()).count(), 3);
    }

    #[test]
    fn test_insert_and_remove() {
        let changes = reconcile(&["r1", "r2"], &["r2", "r9"]);
        assert_eq!(
            changes,
            vec![
                KeyedChange::Retained {
                    key: "r2".into(),
                    from: 1,
                    to: 0
                },
                KeyedChange::Inserted {
                    key: "r9".into(),
                    at: 1
                },
                KeyedChange::Removed {
                    key: "r1".into(),
                    from: 0
                },
            ]
        );
    }

    #[test]
    fn test_from_empty() {
        let prev: [&str; 0] = [];
        let changes = reconcile(&prev, &["a"]);
        assert_eq!(changes[0].key(), "a");
        assert!(matches!(changes[0], KeyedChange::Inserted { at: 0, .. }));
    }
}
