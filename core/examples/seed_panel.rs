//! Populates a panel database with demo data for frontend debugging.
//!
//! Run with: `cargo run -q --example seed_panel -p loadcenter_core`

use loadcenter_core::core::PanelStore;
use loadcenter_core::layout::{Column, compute_columns};
use loadcenter_core::types::{Breaker, BreakerType, Config, InterruptionType, PanelSettings};
use std::path::PathBuf;

fn main() {
    let base_path = get_default_data_path();
    println!("Using data path: {}", base_path.display());

    let config = Config { base_path };
    let mut store = PanelStore::open(&config).expect("Failed to open panel database");

    let settings = PanelSettings {
        service_rating: 200,
        breaker_count: 12,
        spaces: 24,
    };
    store
        .check_settings(&settings)
        .expect("Demo settings rejected");
    store.save_settings(&settings).expect("Failed to save settings");
    store
        .initialize_breakers(settings.breaker_count)
        .expect("Failed to initialize breakers");

    println!("\n[Labeled Circuits]");
    seed_circuits(&mut store);

    println!("\n[Layout]");
    let breakers = store.breakers().expect("Failed to load breakers");
    let layout = compute_columns(&breakers, settings.spaces);

    print_column("Left", &layout.left, layout.left_used);
    print_column("Right", &layout.right, layout.right_used);

    if let Some(report) = layout.balance {
        let side = match report.column {
            Column::Left => "left",
            Column::Right => "right",
        };
        println!(
            "\nColumns are out of balance by {} spaces; the {} column fits \
             {} more single-pole, {} double-pole or {} triple-pole breakers",
            layout.balance_delta,
            side,
            report.single_pole,
            report.double_pole,
            report.triple_pole
        );
    }
}

fn seed_circuits(store: &mut PanelStore) {
    let circuits = [
        (2, "Kitchen Lights", 15, InterruptionType::Afci, BreakerType::SinglePole),
        (3, "Bathroom Outlets", 20, InterruptionType::Gfci, BreakerType::SinglePole),
        (4, "Water Heater", 30, InterruptionType::StandardTrip, BreakerType::DoublePole),
        (5, "Laundry", 20, InterruptionType::AfciGfci, BreakerType::SinglePole),
        (6, "Range", 50, InterruptionType::StandardTrip, BreakerType::DoublePole),
    ];

    let breakers = store.breakers().expect("Failed to load breakers");
    for (id, name, amperage, interruption_type, breaker_type) in circuits {
        let Some(breaker) = breakers.iter().find(|b| b.id == id) else {
            continue;
        };
        let edited = Breaker {
            name: name.to_string(),
            amperage,
            interruption_type,
            breaker_type,
            ..breaker.clone()
        };
        store.update_breaker(&edited).expect("Failed to update breaker");
        println!("  Labeled: {} ({}A)", name, amperage);
    }
}

fn print_column(label: &str, column: &[Breaker], used: i32) {
    println!("  {} column ({} spaces used):", label, used);
    for breaker in column {
        let state = if breaker.is_on { "on " } else { "off" };
        println!(
            "    [{}] {:>3}A  {}",
            state,
            breaker.amperage,
            breaker.display_name()
        );
    }
}

fn get_default_data_path() -> PathBuf {
    std::env::var("LOADCENTER_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("loadcenter-demo"))
}
