use farpack::model::{Item, ItemId, SeedItem, SortBy};
use farpack::stats::Stats;
use farpack::store::{CLEAR_PROMPT, ItemListStore};

fn descriptions(view: &[&Item]) -> Vec<String> {
    view.iter().map(|i| i.description.clone()).collect()
}

fn example_store() -> ItemListStore {
    ItemListStore::with_seed(SeedItem::examples())
}

#[test]
fn test_add_appends_in_order() {
    let mut store = ItemListStore::new();
    let mut expected = vec![];
    for name in ["Tent", "Map", "Boots", "Hat"] {
        let id = store.next_id();
        expected.push(id);
        store.add(Item::new(id, name, 1));
    }

    assert_eq!(store.len(), 4);
    let ids: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, expected);
    assert!(store.items().iter().all(|i| !i.packed));
}

#[test]
fn test_add_ignores_duplicate_id() {
    let mut store = ItemListStore::new();
    let id = store.next_id();
    store.add(Item::new(id, "Tent", 1));
    store.add(Item::new(id, "Another tent", 3));

    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].description, "Tent");
}

#[test]
fn test_ids_never_reused() {
    let mut store = example_store();
    let first = store.next_id();
    store.add(Item::new(first, "Tent", 1));
    store.delete(first);
    store.clear();

    let second = store.next_id();
    assert!(second > first);
    // Seed items took 1..=3
    assert_eq!(first, ItemId(4));
}

#[test]
fn test_add_with_external_id_moves_generator_forward() {
    let mut store = ItemListStore::new();
    store.add(Item::new(ItemId(41), "Tent", 1));
    assert_eq!(store.next_id(), ItemId(42));
}

#[test]
fn test_add_at_end_of_id_range_does_not_panic() {
    let mut store = ItemListStore::new();
    store.add(Item::new(ItemId(u64::MAX), "Tent", 1));
    assert!(store.is_empty());

    // The generator is untouched and keeps handing out usable ids
    let id = store.next_id();
    assert_eq!(id, ItemId(1));
    store.add(Item::new(id, "Map", 1));
    assert_eq!(store.len(), 1);

    store.add(Item::new(ItemId(u64::MAX - 1), "Boots", 1));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_delete_removes_only_match() {
    let mut store = example_store();
    store.delete(ItemId(2));

    assert_eq!(
        store.items().iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![ItemId(1), ItemId(3)]
    );
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut store = example_store();
    let before = store.items().to_vec();
    store.delete(ItemId(999));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_toggle_flips_only_packed() {
    let mut store = example_store();
    let before = store.get(ItemId(1)).cloned().unwrap();

    store.toggle(ItemId(1));
    let after = store.get(ItemId(1)).cloned().unwrap();
    assert_eq!(after.packed, !before.packed);
    assert_eq!(after.description, before.description);
    assert_eq!(after.quantity, before.quantity);
    assert_eq!(after.id, before.id);

    store.toggle(ItemId(1));
    assert_eq!(store.get(ItemId(1)), Some(&before));
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let mut store = example_store();
    let before = store.items().to_vec();
    store.toggle(ItemId(77));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_clear_declined_keeps_list() {
    let mut store = example_store();
    let before = store.items().to_vec();
    let mut asked = None;

    let cleared = store.clear_confirmed(&mut |q: &str| {
        asked = Some(q.to_string());
        false
    });

    assert!(!cleared);
    assert_eq!(store.items(), before.as_slice());
    assert_eq!(asked.as_deref(), Some(CLEAR_PROMPT));
}

#[test]
fn test_clear_confirmed_empties_list() {
    let mut store = example_store();
    assert!(store.clear_confirmed(&mut |_: &str| true));
    assert!(store.is_empty());

    // Clearing an empty list is fine too
    assert!(store.clear_confirmed(&mut |_: &str| true));
    assert!(store.is_empty());
}

#[test]
fn test_sorted_view_description() {
    let store = ItemListStore::with_seed(vec![
        SeedItem::new("Socks", 1, false),
        SeedItem::new("Passports", 1, false),
        SeedItem::new("Charger", 1, false),
    ]);
    assert_eq!(
        descriptions(&store.sorted_view(SortBy::Description)),
        vec!["Charger", "Passports", "Socks"]
    );
    // Underlying order untouched
    assert_eq!(store.items()[0].description, "Socks");
}

#[test]
fn test_sorted_view_description_ignores_case() {
    let store = ItemListStore::with_seed(vec![
        SeedItem::new("banana", 1, false),
        SeedItem::new("Apple", 1, false),
        SeedItem::new("cherry", 1, false),
        SeedItem::new("apple", 1, false),
    ]);
    assert_eq!(
        descriptions(&store.sorted_view(SortBy::Description)),
        vec!["apple", "Apple", "banana", "cherry"]
    );
}

#[test]
fn test_sorted_view_description_folds_accents() {
    let store = ItemListStore::with_seed(vec![
        SeedItem::new("Zelt", 1, false),
        SeedItem::new("Éponge", 1, false),
        SeedItem::new("Fork", 1, false),
        SeedItem::new("epee", 1, false),
        SeedItem::new("Ähre", 1, false),
    ]);
    assert_eq!(
        descriptions(&store.sorted_view(SortBy::Description)),
        vec!["Ähre", "epee", "Éponge", "Fork", "Zelt"]
    );
}

#[test]
fn test_sorted_view_description_unaccented_first_on_tie() {
    let store = ItemListStore::with_seed(vec![
        SeedItem::new("résumé", 1, false),
        SeedItem::new("resume", 1, false),
    ]);
    assert_eq!(
        descriptions(&store.sorted_view(SortBy::Description)),
        vec!["resume", "résumé"]
    );
}

#[test]
fn test_sorted_view_quantity() {
    let store = example_store();
    let quantities: Vec<u32> = store
        .sorted_view(SortBy::Quantity)
        .iter()
        .map(|i| i.quantity)
        .collect();
    assert_eq!(quantities, vec![1, 2, 12]);
}

#[test]
fn test_sorted_view_packed_is_stable() {
    let store = ItemListStore::with_seed(vec![
        SeedItem::new("A", 1, true),
        SeedItem::new("B", 1, false),
        SeedItem::new("C", 1, true),
        SeedItem::new("D", 1, false),
    ]);
    assert_eq!(
        descriptions(&store.sorted_view(SortBy::Packed)),
        vec!["B", "D", "A", "C"]
    );
}

#[test]
fn test_sorted_view_input_is_identity() {
    let store = example_store();
    assert_eq!(
        descriptions(&store.sorted_view(SortBy::Input)),
        vec!["Passports", "Socks", "Charger"]
    );
}

#[test]
fn test_stats_empty() {
    let store = ItemListStore::new();
    let stats = store.stats();
    assert_eq!(stats, Stats::Empty);
    assert_eq!(stats.percent(), None);
    assert!(stats.message().starts_with("Start adding some items"));
}

#[test]
fn test_stats_two_of_three() {
    let mut store = example_store();
    store.toggle(ItemId(1));
    let stats = store.stats();

    assert_eq!(stats.count(), 3);
    assert_eq!(stats.packed(), 2);
    assert_eq!(stats.percent(), Some(67));
    assert!(stats.message().contains("You have 3 items on your list"));
    assert!(stats.message().contains("(67%)"));
}

#[test]
fn test_stats_rounds_up_to_all_packed() {
    let seed: Vec<SeedItem> = (0..200)
        .map(|i| SeedItem::new(&format!("Item {}", i), 1, i != 0))
        .collect();
    let store = ItemListStore::with_seed(seed);
    let stats = store.stats();

    assert_eq!(stats, Stats::AllPacked { count: 200, packed: 199 });
    assert_eq!(stats.count(), 200);
    assert_eq!(stats.packed(), 199);
    assert_eq!(stats.percent(), Some(100));
    assert!(stats.message().starts_with("You got everything!"));
}

#[test]
fn test_stats_all_packed() {
    let mut store = example_store();
    store.toggle(ItemId(1));
    store.toggle(ItemId(3));
    let stats = store.stats();

    assert_eq!(stats, Stats::AllPacked { count: 3, packed: 3 });
    assert_eq!(stats.percent(), Some(100));
    assert!(stats.message().starts_with("You got everything!"));
}
