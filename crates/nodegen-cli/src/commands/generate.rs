//! Implementation of the `nodegen generate` command.
//!
//! Responsibility: fold flags, the answers file and config defaults into
//! `Answers` and `Options`, wire the adapters into a `ScaffoldService`, and
//! display the run report. Merging and planning live in the core.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, instrument};

use nodegen_adapters::{
    FsStateReader, GitOriginResolver, IntentApplier, LocalFilesystem, StaticOriginResolver,
};
use nodegen_core::{
    application::{Filesystem, OriginResolver, RunReport, ScaffoldService},
    domain::{Answers, Feature, FeatureFlags, Options},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `nodegen generate` command.
///
/// Dispatch sequence:
/// 1. Load the answers file, overlay answer flags and config defaults
/// 2. Build options from the remaining flags
/// 3. Wire adapters (git origin lookup unless `--origin-url` is given)
/// 4. Plan (`--dry-run`) or run on a single-threaded runtime
/// 5. Print the intents and any warnings
#[instrument(skip_all, fields(dir = %args.dir.display(), dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let answers = build_answers(load_answers(args.answers.as_deref())?, &args, &config);
    let readme = args.readme.as_deref().map(read_input_file).transpose()?;
    let options = build_options(&args, &config, readme);
    debug!(?answers, ?options, "Inputs resolved");

    // absolute, so `.` still yields a directory name to fall back on
    let root = std::path::absolute(&args.dir)
        .with_cli_context(|| format!("cannot resolve {}", args.dir.display()))?;

    let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let origin: Box<dyn OriginResolver> = match &args.origin_url {
        Some(url) => Box::new(StaticOriginResolver::new(Some(url.clone()))),
        None => Box::new(GitOriginResolver::new()),
    };
    let service = ScaffoldService::new(
        root,
        Box::new(FsStateReader::new(Arc::clone(&fs))),
        origin,
        Box::new(IntentApplier::new(fs)),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "failed to start the async runtime")?;

    let report = if args.dry_run {
        runtime.block_on(service.plan(&answers, &options))
    } else {
        runtime.block_on(service.run(&answers, &options))
    }
    .with_cli_context(|| "scaffold run")?;

    info!(run_id = %report.run_id, intents = report.intents.len(), "Generate finished");
    show_report(&report, args.dry_run, &output)
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_answers(path: Option<&Path>) -> CliResult<Answers> {
    let Some(path) = path else {
        return Ok(Answers::default());
    };
    let text = read_input_file(path)?;
    serde_json::from_str(&text).map_err(|e| CliError::InvalidAnswers {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_input_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::InputFileNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::IoError {
            message: format!("cannot read {}", path.display()),
            source: e,
        },
    })
}

/// Answer flags win over the answers file; config only fills what is left.
fn build_answers(mut answers: Answers, args: &GenerateArgs, config: &AppConfig) -> Answers {
    let defaults = &config.defaults;

    overlay(&mut answers.description, &args.description);
    overlay(&mut answers.homepage, &args.homepage);
    overlay(&mut answers.author_name, &args.author_name);
    overlay(&mut answers.author_email, &args.author_email);
    overlay(&mut answers.author_url, &args.author_url);
    if !args.keywords.is_empty() {
        answers.keywords = Some(args.keywords.clone());
    }

    fill(&mut answers.author_name, &defaults.author_name);
    fill(&mut answers.author_email, &defaults.author_email);
    fill(&mut answers.author_url, &defaults.author_url);

    answers
}

fn build_options(args: &GenerateArgs, config: &AppConfig, readme: Option<String>) -> Options {
    Options {
        name: args.name.clone(),
        generate_into: args.generate_into.clone(),
        origin_url: args.origin_url.clone(),
        license_type: args
            .license_type
            .clone()
            .or_else(|| config.defaults.license_type.clone()),
        readme,
        features: feature_flags(args),
    }
}

/// Only switches that were actually passed are set, so unset features keep
/// their fixed defaults.
fn feature_flags(args: &GenerateArgs) -> FeatureFlags {
    let switches = [
        (Feature::License, args.no_license, false),
        (Feature::Editorconfig, args.no_editorconfig, false),
        (Feature::Git, args.no_git, false),
        (Feature::Travis, args.no_travis, false),
        (Feature::Boilerplate, args.no_boilerplate, false),
        (Feature::Eslint, args.no_eslint, false),
        (Feature::Coveralls, args.coveralls, true),
        (Feature::Cli, args.cli, true),
        (Feature::Jsc, args.jsc, true),
    ];

    switches
        .into_iter()
        .filter(|(_, passed, _)| *passed)
        .fold(FeatureFlags::default(), |flags, (feature, _, enabled)| {
            flags.with(feature, enabled)
        })
}

fn overlay(slot: &mut Option<String>, flag: &Option<String>) {
    if flag.is_some() {
        slot.clone_from(flag);
    }
}

fn fill(slot: &mut Option<String>, default: &Option<String>) {
    if slot.is_none() {
        slot.clone_from(default);
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn show_report(report: &RunReport, dry_run: bool, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(&report_json(report, dry_run))?;
        return Ok(());
    }

    let name = &report.options.name;
    if dry_run {
        out.header(&format!(
            "Dry run: {} change(s) planned for '{name}' in {}",
            report.intents.len(),
            report.target.display()
        ))?;
    } else {
        out.header(&format!("Scaffolding '{name}' in {}", report.target.display()))?;
    }

    for intent in &report.intents {
        out.item(&intent.to_string())?;
    }
    for diagnostic in &report.diagnostics {
        out.warning(&diagnostic.to_string())?;
    }

    if !dry_run {
        let verb = if report.new_project { "created" } else { "updated" };
        out.success(&format!("Project '{name}' {verb}"))?;
    }
    Ok(())
}

fn report_json(report: &RunReport, dry_run: bool) -> serde_json::Value {
    json!({
        "runId": report.run_id.to_string(),
        "name": report.options.name,
        "target": report.target.display().to_string(),
        "newProject": report.new_project,
        "dryRun": dry_run,
        "groups": report.plan.active_groups().map(|g| g.as_str()).collect::<Vec<_>>(),
        "intents": report.intents.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "warnings": report.diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "manifest": report.manifest.to_value(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_author(name: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.defaults.author_name = Some(name.into());
        config.defaults.license_type = Some("ISC".into());
        config
    }

    #[test]
    fn untouched_switches_leave_flags_unset() {
        assert_eq!(feature_flags(&GenerateArgs::default()), FeatureFlags::default());
    }

    #[test]
    fn switches_map_to_feature_values() {
        let args = GenerateArgs {
            no_travis: true,
            coveralls: true,
            ..Default::default()
        };
        let flags = feature_flags(&args);

        assert_eq!(flags.get(Feature::Travis), Some(false));
        assert_eq!(flags.get(Feature::Coveralls), Some(true));
        assert_eq!(flags.get(Feature::Git), None);
        assert_eq!(flags.get(Feature::Cli), None);
    }

    #[test]
    fn flags_override_answers_file_and_config_fills_gaps() {
        let file = Answers {
            description: Some("from file".into()),
            author_name: Some("File Author".into()),
            ..Default::default()
        };
        let args = GenerateArgs {
            description: Some("from flag".into()),
            keywords: vec!["a".into(), "b".into()],
            ..Default::default()
        };

        let answers = build_answers(file, &args, &config_with_author("Config Author"));

        assert_eq!(answers.description.as_deref(), Some("from flag"));
        assert_eq!(answers.author_name.as_deref(), Some("File Author"));
        assert_eq!(answers.keywords, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn config_author_used_when_nothing_else_given() {
        let answers = build_answers(
            Answers::default(),
            &GenerateArgs::default(),
            &config_with_author("Config Author"),
        );
        assert_eq!(answers.author_name.as_deref(), Some("Config Author"));
        assert_eq!(answers.keywords, None);
    }

    #[test]
    fn license_type_flag_beats_config() {
        let config = config_with_author("x");
        let from_config = build_options(&GenerateArgs::default(), &config, None);
        assert_eq!(from_config.license_type.as_deref(), Some("ISC"));

        let args = GenerateArgs {
            license_type: Some("Apache-2.0".into()),
            generate_into: Some(PathBuf::from("pkg")),
            ..Default::default()
        };
        let from_flag = build_options(&args, &config, Some("body".into()));
        assert_eq!(from_flag.license_type.as_deref(), Some("Apache-2.0"));
        assert_eq!(from_flag.generate_into, Some(PathBuf::from("pkg")));
        assert_eq!(from_flag.readme.as_deref(), Some("body"));
    }

    #[test]
    fn answers_file_is_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(
            &path,
            r#"{"name":"foo-lib","authorName":"Ada","includeCoveralls":true,"keywords":["x"]}"#,
        )
        .unwrap();

        let answers = load_answers(Some(&path)).unwrap();

        assert_eq!(answers.name.as_deref(), Some("foo-lib"));
        assert_eq!(answers.author_name.as_deref(), Some("Ada"));
        assert_eq!(answers.features.get(Feature::Coveralls), Some(true));
    }

    #[test]
    fn missing_answers_file_is_not_found() {
        let err = load_answers(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, CliError::InputFileNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn non_object_answers_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            load_answers(Some(&path)),
            Err(CliError::InvalidAnswers { .. })
        ));
    }
}
