mod demo;

use anyhow::bail;
use nabu_inspect::logging::{LoggingConfig, init_logging};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default().with_default_level(log::LevelFilter::Info));

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║           NABU STUDIO v0.1             ║");
    println!("  ║   reflected types  ·  headless frames  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let registry = demo::registry();
    let demos = demo::all();
    let wanted: Vec<String> = std::env::args().skip(1).collect();

    for name in &wanted {
        if !demos.iter().any(|d| d.name == name) {
            let known: Vec<_> = demos.iter().map(|d| d.name).collect();
            bail!("unknown demo `{name}` (available: {})", known.join(", "));
        }
    }

    log::info!("{} types registered: {}", registry.len(), registry.type_names().join(", "));

    for d in demos.iter().filter(|d| wanted.is_empty() || wanted.iter().any(|w| w == d.name)) {
        println!("  [{}] {}", d.name, d.about);
        (d.run)(&registry)?;
        println!();
    }
    Ok(())
}
