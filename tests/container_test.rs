//! Stack bookkeeping with tags from a real registry.

use gameplay_tags::{TagContainer, TagRegistry};

fn registry() -> TagRegistry {
    TagRegistry::from_paths([
        "Animal.Dog",
        "Animal.Cat",
        "Status.Burning",
        "Status.Slowed",
    ])
    .unwrap()
}

#[test]
fn dog_scenario() {
    let registry = registry();
    let dog = registry.lookup("Animal.Dog");
    let mut container = TagContainer::new();

    container.add_tag(&dog, 1);
    assert!(container.has_tag(&dog));
    assert_eq!(container.get_tag_count(&dog), 1);

    container.add_tag(&dog, 1);
    assert_eq!(container.get_tag_count(&dog), 2);

    container.remove_tag(&dog, 3);
    assert!(!container.has_tag(&dog));
    assert_eq!(container.get_tag_count(&dog), 0);
}

#[test]
fn round_trip_law_holds_for_every_tag() {
    let registry = registry();
    let mut container = TagContainer::new();
    container.add_tag(&registry.lookup("Animal.Cat"), 2);

    for tag in registry.tags() {
        for stacks in 1..4 {
            let had = container.has_tag(tag);
            let count = container.get_tag_count(tag);

            container.add_tag(tag, stacks);
            container.remove_tag(tag, stacks);

            assert_eq!(container.has_tag(tag), had, "{tag}");
            assert_eq!(container.get_tag_count(tag), count, "{tag}");
        }
    }
}

#[test]
fn lookup_miss_cannot_be_stored() {
    let registry = registry();
    let mut container = TagContainer::new();

    container.add_tag(&registry.lookup("Animal.Unicorn"), 3);
    assert!(container.is_empty());
}

#[test]
fn category_queries() {
    let registry = registry();
    let status = registry.lookup("Status");
    let animal = registry.lookup("Animal");

    let mut container = TagContainer::new()
        .with_stacks(&registry.lookup("Status.Burning"), 3)
        .with(&registry.lookup("Status.Slowed"));

    assert!(container.has_descendant_of(&status));
    assert!(!container.has_descendant_of(&animal));
    assert_eq!(container.count_descendants_of(&status), 4);

    container.clear_tag(&registry.lookup("Status.Burning"));
    assert_eq!(container.count_descendants_of(&status), 1);
}

#[test]
fn display_is_ordered_by_identifier() {
    let registry = registry();
    let container = TagContainer::new()
        .with(&registry.lookup("Status.Slowed"))
        .with_stacks(&registry.lookup("Animal.Dog"), 2);

    assert_eq!(
        container.to_string(),
        "TagSet{\n\troot.Animal.Dog#257: 2,\n\troot.Status.Slowed#514: 1\n}"
    );
}

#[test]
fn serialized_container_survives_json() {
    let registry = registry();
    let container = TagContainer::new()
        .with_stacks(&registry.lookup("Status.Burning"), 5)
        .with(&registry.lookup("Animal.Cat"));

    let json = serde_json::to_string(&container).unwrap();
    let back: TagContainer = serde_json::from_str(&json).unwrap();

    assert_eq!(back, container);
    assert_eq!(back.to_string(), container.to_string());
}
