//! Stacking status effects on an entity.
//!
//! This example shows how to:
//! - Add and remove stacks of tags
//! - Query counts and whole categories
//! - Print a container for debugging

use gameplay_tags::{TagContainer, TagRegistry};

fn main() {
    tracing_subscriber::fmt().init();

    let registry = TagRegistry::from_paths([
        "Status.Burning",
        "Status.Slowed",
        "Status.Stunned",
        "Buff.Haste",
    ])
    .unwrap();

    let burning = registry.lookup("Status.Burning");
    let slowed = registry.lookup("Status.Slowed");
    let haste = registry.lookup("Buff.Haste");
    let status = registry.lookup("Status");

    let mut hero = TagContainer::new();

    println!("Three fire hits and one frost hit:");
    hero.add_tag(&burning, 3);
    hero.add_tag(&slowed, 1);
    hero.add_tag(&haste, 1);
    println!("{}\n", hero);

    println!("Negative and zero stacks are ignored:");
    hero.add_tag(&burning, -2);
    hero.add_tag(&burning, 0);
    println!("  burning = {}\n", hero.get_tag_count(&burning));

    println!(
        "Any status effect? {} ({} stacks total)",
        hero.has_descendant_of(&status),
        hero.count_descendants_of(&status)
    );

    println!("\nCleanse removes more stacks than present:");
    hero.remove_tag(&burning, 10);
    hero.clear_tag(&slowed);
    println!("{}", hero);
    println!(
        "Any status effect? {}",
        hero.has_descendant_of(&status)
    );
}
