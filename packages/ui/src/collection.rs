//! Patch-in-place reconciliation for the list views.
//!
//! After a mutation, the local collection is updated from the response
//! instead of re-fetching the whole list. Every list view uses the same
//! strategy.

/// Replace the element with the same id, or append when absent.
pub fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> i64) {
    match items.iter_mut().find(|existing| id_of(existing) == id_of(&item)) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

/// Drop the element with the given id, if present.
pub fn remove_by_id<T>(items: &mut Vec<T>, id: i64, id_of: impl Fn(&T) -> i64) {
    items.retain(|existing| id_of(existing) != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Category;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            description: None,
        }
    }

    #[test]
    fn test_upsert_appends_created_entities() {
        let mut items = vec![category(1, "Frutas")];
        upsert_by_id(&mut items, category(2, "Verduras"), |c| c.id);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Verduras");
    }

    #[test]
    fn test_upsert_replaces_updated_entities_in_place() {
        let mut items = vec![category(1, "Frutas"), category(2, "Verduras")];
        upsert_by_id(&mut items, category(1, "Frutas frescas"), |c| c.id);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Frutas frescas");
        // Position is preserved.
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut items = vec![category(1, "Frutas"), category(2, "Verduras")];
        remove_by_id(&mut items, 1, |c| c.id);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }
}
