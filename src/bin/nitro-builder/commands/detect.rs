//! `nitro-builder detect` command

use anyhow::Result;

use crate::cli::ProjectArgs;
use nitro_builder::core::BuilderId;
use nitro_builder::resolve::detect::{inspect, MARKER};
use nitro_builder::resolve::NodeModulesProbe;
use nitro_builder::util::{Shell, Status};

pub fn execute(args: ProjectArgs, shell: &Shell) -> Result<()> {
    let root = args.root_dir()?;
    let detection = inspect(&root, &NodeModulesProbe::new());

    if shell.is_json() {
        let mut event = serde_json::to_value(&detection)?;
        event["reason"] = serde_json::json!("builder-detected");
        shell.json_event(&event);
        return Ok(());
    }

    let companion = BuilderId::COMPANION;
    if detection.companion_resolvable {
        println!("{}: installed", companion.package_name());
    } else {
        println!("{}: not installed", companion.package_name());
    }

    match &detection.config_file {
        Some(path) => {
            let found = if detection.marker_found { "found" } else { "not found" };
            println!("config: {}", path.display());
            println!("`{}`: {}", MARKER, found);
        }
        None if detection.companion_resolvable => println!("config: none"),
        None => {}
    }

    println!("builder: {}", detection.builder);
    shell.status(Status::Detected, detection.builder);

    Ok(())
}
