//! `nitro-builder list` command

use anyhow::Result;

use crate::cli::ProjectArgs;
use nitro_builder::core::BuilderId;
use nitro_builder::resolve::{NodeModulesProbe, PackageProbe};
use nitro_builder::util::Shell;

pub fn execute(args: ProjectArgs, shell: &Shell) -> Result<()> {
    let root = args.root_dir()?;
    let probe = NodeModulesProbe::new();

    let rows: Vec<(BuilderId, &str)> = BuilderId::ALL
        .iter()
        .map(|&id| {
            let state = if id.is_bundled() {
                "bundled"
            } else if probe.is_resolvable(id.package_name(), &root) {
                "installed"
            } else {
                "not installed"
            };
            (id, state)
        })
        .collect();

    if shell.is_json() {
        let builders: Vec<_> = rows
            .iter()
            .map(|(id, state)| {
                serde_json::json!({
                    "builder": id,
                    "package": id.package_name(),
                    "state": state,
                })
            })
            .collect();
        shell.json_event(&serde_json::json!({
            "reason": "builder-list",
            "root": root.display().to_string(),
            "builders": builders,
        }));
        return Ok(());
    }

    for (id, state) in rows {
        println!("{:<10} {:<14} {}", id.as_str(), state, id.description());
    }

    Ok(())
}
