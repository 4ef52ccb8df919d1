//! Command execution: read the changelog, extract, write JSON.
use color_eyre::eyre::{WrapErr, eyre};
use log::*;
use release_changelog::{
    Changelog, ExtractorConfig, config::DEFAULT_CONFIG_FILE,
};
use serde_json::{Value, json};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{
    cli::{Args, Command, STDIN_INPUT},
    result::Result,
};

/// Run the extraction requested by `args`.
pub fn execute(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let html = read_input(&args.input)?;

    info!("extracting changelog for release: {}", args.tag);
    let changelog = Changelog::with_config(&args.tag, &html, config);

    let json = extract(&changelog, args.command());
    let content = serde_json::to_string_pretty(&json)?;

    if let Some(out_file) = &args.out_file {
        if let Some(parent) = out_file.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        info!("writing changelog json to: {}", out_file.display());
        fs::write(out_file, &content).wrap_err_with(|| {
            format!("failed to write {}", out_file.display())
        })?;
    } else {
        println!("{content}");
    }

    Ok(())
}

/// JSON for a single subcommand.
pub fn extract(changelog: &Changelog, command: Command) -> Value {
    match command {
        Command::Summary => json!(changelog.metadata()),
        Command::PreviousTag => json!({
            "previous_release_tag": changelog.previous_release_tag(),
        }),
        Command::Components => json!({
            "coreos": changelog.coreos_version(),
            "kubernetes": changelog.kubernetes_version(),
        }),
        Command::Repositories => json!(changelog.repositories()),
        Command::PullRequests => json!(changelog.pull_requests()),
    }
}

/// An explicit config path must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    if let Some(path) = path {
        let config = ExtractorConfig::load(path)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        return config
            .ok_or_else(|| eyre!("config file not found: {}", path.display()));
    }

    let config = ExtractorConfig::load(Path::new(DEFAULT_CONFIG_FILE))
        .wrap_err_with(|| format!("invalid config {DEFAULT_CONFIG_FILE}"))?;

    if config.is_some() {
        debug!("loaded config from {DEFAULT_CONFIG_FILE}");
    }

    Ok(config.unwrap_or_default())
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIN_INPUT {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .wrap_err("failed to read changelog from stdin")?;
        return Ok(html);
    }

    fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read changelog {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
        <h2>Changes from <a href="/releasestream/4-stable/release/4.15.9">4.15.9</a></h2>
        <h3>Components</h3>
        <ul><li>Kubernetes 1.29.2</li></ul>
        <h3><a href="https://github.com/openshift/api/tree/abc">api</a></h3>
        <ul>
          <li><a href="https://github.com/openshift/api/pull/7">#7</a>: Add field</li>
          <li><a href="https://github.com/openshift/api/pull/7">#7</a>: Add field again</li>
        </ul>
    "#;

    fn args(tmp: &Path, command: Option<Command>) -> Args {
        let input = tmp.join("changelog.html");
        fs::write(&input, HTML).unwrap();

        Args {
            tag: "4.16.0".into(),
            input: input.display().to_string(),
            config: None,
            out_file: Some(tmp.join("nested/out.json")),
            debug: false,
            command,
        }
    }

    #[test]
    fn extracts_each_subcommand() {
        let changelog = Changelog::new("4.16.0", HTML);

        let json = extract(&changelog, Command::PreviousTag);
        assert_eq!(json["previous_release_tag"], "4.15.9");

        let json = extract(&changelog, Command::Components);
        assert_eq!(json["kubernetes"], "1.29.2");
        assert!(json["coreos"].is_null());

        let json = extract(&changelog, Command::Repositories);
        assert_eq!(json[0]["name"], "api");

        let json = extract(&changelog, Command::PullRequests);
        assert_eq!(json.as_array().unwrap().len(), 1);

        let json = extract(&changelog, Command::Summary);
        assert_eq!(json["release_tag"], "4.16.0");
        assert_eq!(json["pull_requests"][0]["pull_request_id"], "7");
    }

    #[test_log::test]
    fn writes_output_file() {
        let tmp = tempfile::tempdir().unwrap();
        let args = args(tmp.path(), Some(Command::PullRequests));

        execute(&args).unwrap();

        let content =
            fs::read_to_string(tmp.path().join("nested/out.json")).unwrap();
        let json: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json[0]["description"], "Add field");
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let mut args = args(tmp.path(), None);
        args.config = Some(tmp.path().join("missing.toml"));

        assert!(execute(&args).is_err());
    }

    #[test]
    fn applies_explicit_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("custom.toml");
        fs::write(&config_path, "source_control_domain = \"gitlab.com\"")
            .unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        assert_eq!(config.source_control_domain, "gitlab.com");
    }

    #[test]
    fn missing_input_is_an_error() {
        let result = read_input("/definitely/not/here.html");
        assert!(result.is_err());
    }
}
