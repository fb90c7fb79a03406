//! `nitro-builder resolve` command

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::cli::ResolveArgs;
use nitro_builder::pm::PackageManagerInstaller;
use nitro_builder::resolve::{
    ConfirmPrompt, DevDependencyInstaller, EnvSnapshot, NodeModulesProbe, Resolver,
};
use nitro_builder::util::config::load_for_project;
use nitro_builder::util::shell::format_duration;
use nitro_builder::util::{AutoConfirm, Shell, Status, TerminalPrompt};

pub fn execute(args: ResolveArgs, shell: &Shell, env: &EnvSnapshot) -> Result<()> {
    let root = args.project.root_dir()?;
    let config = load_for_project(&root);

    let mut options = config.build_options(&root);
    if let Some(builder) = args.builder.as_deref().filter(|b| !b.is_empty()) {
        options.builder = Some(builder.to_string());
    }
    let source = requested_from(&args, options.builder.as_deref(), env);

    let package_manager = match args.package_manager {
        Some(pm) => Some(pm),
        None => config.package_manager()?,
    };
    let installer = ProgressInstaller {
        inner: PackageManagerInstaller::new()
            .with_package_manager(package_manager)
            .stream_output(shell.is_verbose()),
        shell,
    };

    let prompt: Box<dyn ConfirmPrompt> = if args.yes {
        Box::new(AutoConfirm::accept())
    } else {
        Box::new(TerminalPrompt::new())
    };

    let probe = NodeModulesProbe::new();
    let resolver = Resolver::new(&probe, prompt.as_ref(), &installer);
    let id = resolver.resolve(&mut options, env.builder())?;

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "builder-resolved",
            "builder": id,
            "package": id.package_name(),
            "source": source,
            "root": root.display().to_string(),
        }));
    } else {
        println!("{}", id);
        shell.status(Status::Resolved, format!("{} ({})", id, source));
    }

    Ok(())
}

/// Where the requested builder came from, with the same precedence the
/// resolver applies.
fn requested_from(args: &ResolveArgs, options_builder: Option<&str>, env: &EnvSnapshot) -> &'static str {
    let given = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());

    if given(args.builder.as_deref()) {
        "cli"
    } else if given(options_builder) {
        "config"
    } else if given(env.builder()) {
        "env"
    } else {
        "detected"
    }
}

/// Installer wrapper that reports progress through the shell.
struct ProgressInstaller<'a> {
    inner: PackageManagerInstaller,
    shell: &'a Shell,
}

impl DevDependencyInstaller for ProgressInstaller<'_> {
    fn add_dev_dependency(&self, package: &str, cwd: &Path) -> Result<()> {
        let pm = self.inner.package_manager_for(cwd);
        self.shell
            .status(Status::Installing, format!("{} with {}", package, pm));

        let start = Instant::now();
        let spinner = self
            .shell
            .spinner(self.inner.command_for(package, cwd).display_command());
        let result = self.inner.add_dev_dependency(package, cwd);
        spinner.finish_and_clear();
        result?;

        self.shell.status(
            Status::Installed,
            format!("{} in {}", package, format_duration(start.elapsed())),
        );
        Ok(())
    }
}
