//! Basic console usage example
//!
//! Demonstrates severity thresholds, tag lists, tiered tags and the
//! legacy either-order call shape.
//!
//! Run with: cargo run --example basic_usage

use rust_console_filter::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Rust Console Filter - Basic Usage Example ===\n");

    let mut console = Console::new();

    println!("1. Logging at different severities:");
    console.debug("This is a debug message");
    console.log("This is a log message");
    console.warning(LogCall::new("This is a warning").tag("disk"));
    console.error(LogCall::new("This is an error").auxiliary(json!({"code": 500})));

    println!("\n2. Raising the threshold:");
    console.set_minimum_severity(Severity::Warning);
    console.debug("Debug message (hidden)");
    console.log("Log message (hidden)");
    console.warning("Warning message (visible)");
    console.set_minimum_severity(Severity::Debug);

    println!("\n3. Tag lists:");
    console.add_exclude_tag("chatty");
    console.log(LogCall::new("Excluded (hidden)").tag("chatty"));
    console.add_include_tag("net");
    console.log(LogCall::new("Included (visible)").tag("net"));
    console.log(LogCall::new("Not included (hidden)").tag("db"));
    console.clear_include_tags();

    println!("\n4. Tiered tags:");
    let mut tags = QuickTags::new("Net");
    tags.set_tier(&mut console, Tier::DebugLite);
    console.debug(LogCall::new("lite detail (visible)").tag(tags.lite_tag()));
    console.debug(LogCall::new("full detail (hidden)").tag(tags.full_tag()));

    println!("\n5. Legacy call shape (payload and tag in either order):");
    console.set_show_timestamps(false);
    console.log(LogCall::positional(
        "tag first",
        Some(json!("legacy")),
        Some(json!({"x": 1})),
    ));
    console.log(LogCall::positional("tag only", Some(json!("legacy")), None));

    println!(
        "\nAdmitted: {}, rejected: {}",
        console.metrics().admitted(),
        console.metrics().rejected()
    );
    console.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
