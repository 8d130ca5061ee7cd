//! Subtree membership checks on raw identifiers.
//!
//! This example shows how to:
//! - Check if a tag is a descendant of another tag without the registry
//! - Use `id_is_descendant_of` for game logic (damage type filtering)

use gameplay_tags::{TagId, TagRegistry, id_is_descendant_of};

/// Simulated entity with damage resistance
struct Entity {
    name: &'static str,
    /// Identifiers of damage types this entity resists
    resistances: Vec<TagId>,
}

fn main() {
    let registry = TagRegistry::from_paths([
        "Physical.Blunt",
        "Physical.Slash",
        "Physical.Pierce",
        "Magical.Fire",
        "Magical.Ice",
        "Magical.Lightning",
        "True",
    ])
    .unwrap();
    let id = |path: &str| registry.lookup(path).id();

    println!("All descendants of 'Magical':");
    for tag in registry.descendants_of(id("Magical")) {
        println!("  - {}", tag.display_label());
    }
    println!();

    let entities = vec![
        Entity {
            name: "Stone Golem",
            resistances: vec![id("Physical")],
        },
        Entity {
            name: "Fire Elemental",
            resistances: vec![id("Magical.Fire")],
        },
        Entity {
            name: "Ghost",
            resistances: vec![id("Physical"), id("Magical")],
        },
    ];

    let damage_types = [
        ("Sword (Slash)", id("Physical.Slash")),
        ("Fireball (Fire)", id("Magical.Fire")),
        ("Ice Shard (Ice)", id("Magical.Ice")),
        ("Divine Smite (True)", id("True")),
    ];

    for entity in &entities {
        println!("{}:", entity.name);
        for (name, damage) in &damage_types {
            let resisted = entity
                .resistances
                .iter()
                .any(|&resistance| id_is_descendant_of(*damage, resistance));
            let status = if resisted { "RESISTED" } else { "takes damage" };
            println!("  {} -> {}", name, status);
        }
        println!();
    }
}
