//! `nitro-builder check` command
//!
//! Like `resolve --builder`, but never prompts or installs.

use anyhow::Result;

use crate::cli::CheckArgs;
use nitro_builder::pm;
use nitro_builder::resolve::validate::{requires_probe, validate};
use nitro_builder::resolve::{NodeModulesProbe, PackageProbe, ResolveError};
use nitro_builder::util::{Shell, Status};

pub fn execute(args: CheckArgs, shell: &Shell) -> Result<()> {
    let root = args.project.root_dir()?;
    let id = validate(&args.builder)?;

    shell.status(Status::Checking, format!("{} in {}", id, root.display()));

    let available =
        !requires_probe(id) || NodeModulesProbe::new().is_resolvable(id.package_name(), &root);

    if !available {
        let pm = pm::detect(&root);
        shell.note(format!(
            "install it with `{} {}`",
            pm.command(),
            pm.add_dev_args(id.package_name(), &root).join(" ")
        ));
        return Err(ResolveError::MissingDependency {
            package: id.package_name().to_string(),
        }
        .into());
    }

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "builder-available",
            "builder": id,
            "package": id.package_name(),
            "bundled": id.is_bundled(),
        }));
    } else {
        let how = if id.is_bundled() { "bundled" } else { "installed" };
        shell.status(Status::Resolved, format!("{} is {}", id, how));
    }

    Ok(())
}
