//! Kairos resolution demo
//!
//! Walks the three resolution tiers end to end:
//! 1. Bare environment - stub failures and the guarded accessor
//! 2. Explicit override - the facade serves the injected engine
//! 3. Ambient fallback - override cleared, ambient engine takes over

use std::sync::Arc;

use kairos_core::{CapabilityEngine, EntityKind};
use kairos_resolve::{AmbientSlot, Resolver};
use kairos_test::MockEngine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║            Kairos Demo - Three-Tier Resolution             ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let ambient = Arc::new(AmbientSlot::new());
    let resolver = Resolver::with_ambient(ambient.clone());

    println!("-- Tier 3: bare environment");
    println!("engine available: {}", resolver.is_available());
    match resolver.facade().plain_date_time().construct() {
        Ok(_) => println!("unexpected: construction succeeded"),
        Err(err) => println!("stub construction failed:\n  {err}"),
    }
    if let Ok(held) = resolver.facade().plain_date().parse("2025-09-19") {
        match held.render() {
            Ok(text) => println!("unexpected: rendered {text}"),
            Err(err) => println!("parse alone was fine, probing the value was not:\n  {err}"),
        }
    }
    match resolver.resolve().plain_date_time() {
        Ok(_) => println!("unexpected: resolution produced a constructor"),
        Err(err) => println!("guarded accessor failed:\n  {err}"),
    }
    println!();

    println!("-- Tier 1: explicit override");
    let override_engine: Arc<dyn CapabilityEngine> = Arc::new(MockEngine::full());
    resolver.set_override(Some(override_engine));
    println!("engine available: {}", resolver.is_available());
    show_round_trip(&resolver);
    println!();

    println!("-- Tier 2: ambient fallback");
    ambient.install(Arc::new(MockEngine::full()));
    resolver.clear_override();
    println!("override cleared, facade now serves: {:?}", resolver.facade().tier());
    show_round_trip(&resolver);
    println!();

    // The cached accessor keeps its first, empty resolution on purpose.
    println!(
        "cached resolution still guarded: {}",
        resolver.resolve().plain_date_time().is_err()
    );
    println!();

    println!("slot bindings:");
    for kind in EntityKind::ALL {
        println!("  {:<15} {:?}", kind.name(), resolver.facade().binding(kind));
    }
}

fn show_round_trip(resolver: &Resolver) {
    match resolver.facade().plain_date_time().parse("2025-09-19T10:00") {
        Ok(value) => match value.render() {
            Ok(text) => println!("PlainDateTime round-trip: {text}"),
            Err(err) => println!("render failed: {err}"),
        },
        Err(err) => println!("parse failed: {err}"),
    }
}
