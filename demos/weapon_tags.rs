//! Registering a weapon hierarchy and inspecting identifiers.
//!
//! This example shows how to:
//! - Register dotted paths (parents are created automatically)
//! - Look tags up by path, by identifier, or with an explicit miss
//! - Read identifiers as byte paths
//!
//! Registration is logged at debug level, so the subscriber below prints
//! every created tag.

use gameplay_tags::{TagRegistry, byte_path, depth_of};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Weapon Tags Example ===\n");

    // 1. Register a list of paths
    let mut registry = TagRegistry::new();
    registry
        .register_paths(
            [
                "Weapon.Rifle.M4",
                "Weapon.Rifle.AK47",
                "Weapon.Rifle.Sniper.AWP",
                "Weapon.SMG.MP5",
                "Team.T",
                "Team.CT",
            ],
            true,
        )
        .unwrap();

    println!("Registered {} tags:", registry.len());
    for tag in registry.tags() {
        let indent = "  ".repeat(depth_of(tag.id()) as usize);
        println!(
            "  {}{:<24} id={:#010x} bytes={:?}",
            indent,
            tag.last_segment(),
            tag.id(),
            tag.byte_path()
        );
    }
    println!();

    // 2. Registration is idempotent
    let m4 = registry.lookup("Weapon.Rifle.M4");
    let again = registry.register_path("Weapon.Rifle.M4").unwrap();
    println!("Registering M4 twice gives the same tag: {}", m4 == again);

    // 3. Identifier -> tag
    let awp_id = registry.lookup("Weapon.Rifle.Sniper.AWP").id();
    println!(
        "  {:#x} -> {:?} (byte path {:?})",
        awp_id,
        registry.path_of(awp_id),
        byte_path(awp_id)
    );
    println!();

    // 4. Misses: legacy root fallback vs explicit Option
    let miss = registry.lookup("Weapon.Laser");
    println!("lookup(\"Weapon.Laser\") -> {} (valid={})", miss, miss.is_valid());
    println!("find(\"Weapon.Laser\")   -> {:?}", registry.find("Weapon.Laser"));
    println!();

    // 5. Tree dump through tracing
    registry.log_tree();
    print!("{}", registry.dump_tree());
}
