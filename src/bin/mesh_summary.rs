use std::env;
use std::error::Error;
use std::process;

use tetmesh::{assess_mesh_quality, MeshConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: mesh_summary <config.toml>");
            process::exit(2);
        }
    };

    if let Err(e) = run(&path) {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let config = MeshConfig::from_file(path)?;
    config.log_summary();

    let mesh = config.build()?;
    mesh.validate()?;

    log::info!(
        "{} nodes, {} {} elements",
        mesh.num_nodes(),
        mesh.num_elements(),
        mesh.connectivity.kind()
    );

    let mut labels = mesh.connectivity.labels.clone();
    labels.sort_unstable();
    labels.dedup();
    for label in labels {
        log::info!(
            "  label {}: {} elements",
            label,
            mesh.connectivity.elements_with_label(label).len()
        );
    }

    log::info!("{}", assess_mesh_quality(&mesh).report());
    Ok(())
}
