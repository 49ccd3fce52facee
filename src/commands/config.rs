//! `preflight config` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::platform::RailwayConfig;
use crate::settings::CheckSettings;

/// Execute the `config` command.
///
/// Without `--write`, parses and displays the project's Railway config.
/// With `--write`, generates the canonical config file.
///
/// # Errors
///
/// Returns an error string if the config file is missing or malformed,
/// or if writing the canonical file fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
    write: bool,
) -> Result<(), String> {
    let path = root.join(&settings.platform_config);

    if write {
        let rendered = RailwayConfig::canonical().render()?;
        ctx.fs
            .write(&path, &rendered)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("✅ wrote {}", path.display());
        return Ok(());
    }

    if !ctx.fs.exists(&path) {
        return Err(format!(
            "{} not found (run `preflight config --write` to create it)",
            path.display()
        ));
    }
    let contents = ctx
        .fs
        .read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let config = RailwayConfig::parse(&contents)?;

    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let timeout = config.healthcheck_timeout().map(|t| format!("{t}s"));
    let builder = config.build.as_ref().and_then(|b| b.builder.clone());
    let start = config.deploy.as_ref().and_then(|d| d.start_command.clone());
    let health_path = config.deploy.as_ref().and_then(|d| d.healthcheck_path.clone());

    println!("builder:             {}", or_dash(builder));
    println!("start command:       {}", or_dash(start));
    println!("healthcheck path:    {}", or_dash(health_path));
    println!("healthcheck timeout: {}", or_dash(timeout));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{self, FakeFileSystem};

    #[test]
    fn write_generates_a_canonical_config_with_sixty_second_timeout() {
        let fs = FakeFileSystem::new();
        let mut ctx = fake::context();
        ctx.fs = Box::new(fs.clone());

        run_with_context(&ctx, &CheckSettings::default(), Path::new("/proj"), true).unwrap();

        let written = fs.written(Path::new("/proj/railway.json")).unwrap();
        let parsed = RailwayConfig::parse(&written).unwrap();
        assert_eq!(parsed.healthcheck_timeout(), Some(60));
        assert_eq!(parsed, RailwayConfig::canonical());
    }

    #[test]
    fn display_requires_an_existing_config() {
        let mut ctx = fake::context();
        ctx.fs = Box::new(FakeFileSystem::new());
        let err = run_with_context(&ctx, &CheckSettings::default(), Path::new("/proj"), false)
            .unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn display_rejects_a_malformed_config() {
        let mut ctx = fake::context();
        ctx.fs = Box::new(FakeFileSystem::new().with_file("/proj/railway.json", "oops"));
        let err = run_with_context(&ctx, &CheckSettings::default(), Path::new("/proj"), false)
            .unwrap_err();
        assert!(err.contains("invalid railway config"));
    }

    #[test]
    fn display_accepts_a_parsed_config() {
        let mut ctx = fake::context();
        ctx.fs = Box::new(FakeFileSystem::new().with_file(
            "/proj/railway.json",
            r#"{"deploy": {"healthcheckTimeout": 60}}"#,
        ));
        run_with_context(&ctx, &CheckSettings::default(), Path::new("/proj"), false).unwrap();
    }
}
