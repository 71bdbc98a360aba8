//! Region Draw.
//!
//! Kopflose Sitzung: lädt Regionsgrenzen, spielt ein Intent-Skript ab
//! und gibt die resultierende Regionsliste aus.
//!
//! Aufruf: `region-draw <grenzen.geojson> [skript.json]`

use std::path::PathBuf;

use anyhow::Context;
use region_draw::{AppController, AppIntent, AppState, EditorOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Region Draw v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(boundary_path) = args.next().map(PathBuf::from) else {
        anyhow::bail!("Aufruf: region-draw <grenzen.geojson> [skript.json]");
    };
    let script_path = args.next().map(PathBuf::from);

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();
    controller.subscribe(|change| log::info!("Änderung: {:?}", change));

    controller.handle_intent(
        &mut state,
        AppIntent::LoadBoundariesRequested {
            path: boundary_path,
        },
    )?;

    if let Some(path) = script_path {
        let intents = read_script(&path)?;
        log::info!("Spiele {} Intents aus {} ab", intents.len(), path.display());
        for intent in intents {
            if let Err(e) = controller.handle_intent(&mut state, intent) {
                log::error!("Intent fehlgeschlagen: {:#}", e);
            }
        }
    }

    print_summary(&state);
    Ok(())
}

fn read_script(path: &std::path::Path) -> anyhow::Result<Vec<AppIntent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Ungültiges Skript: {}", path.display()))
}

fn print_summary(state: &AppState) {
    println!(
        "{} Regionen, {} selektiert, {} Features, Werkzeug: {}",
        state.region_count(),
        state.regions.selected_count(),
        state.drawn.len(),
        state.tool_state().label()
    );
    for region in state.regions.iter() {
        let marker = if region.selected { "x" } else { " " };
        println!("[{}] {:<8} {}", marker, region.code, region.name);
    }

    if let Some(summary) = &state.ui.comparison {
        println!("Vergleich:");
        for entry in &summary.entries {
            println!(
                "  {:<24} Fälle {:>6.2}%  Hospitalisiert {:>6.2}%",
                entry.name, entry.case_percentage, entry.hospitalized_percentage
            );
        }
    }
}
