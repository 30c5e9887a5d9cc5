//! Scaffold Service - the run orchestrator.
//!
//! One run moves through
//! `Start → StateRead → OriginResolved | OriginUnknown → ManifestResolved → PlanBuilt → Emitting → Done`
//! with no backward transitions. A malformed existing file ends the run
//! before anything is emitted; an unavailable origin does not.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::{
    application::{
        Intent, ReadmeIntent,
        ports::{ExistingStateReader, IntentSink, OriginResolver},
    },
    domain::{
        Answers, DomainError, ExistingState, Feature, FeatureSelector, GroupAction,
        MANIFEST_FILE, MergeWarning, Options, README_FILE, RenderContext, ResolvedManifest,
        ResolvedOptions, WritePlan, merge_manifest, render_readme,
    },
    error::NodegenResult,
};

/// Context variable telling the travis template to add a coveralls step.
pub const COVERALLS_VAR: &str = "INCLUDE_COVERALLS";

/// Position of a run in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Start,
    StateRead,
    OriginResolved,
    OriginUnknown,
    ManifestResolved,
    PlanBuilt,
    Emitting,
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::StateRead => "state-read",
            Self::OriginResolved => "origin-resolved",
            Self::OriginUnknown => "origin-unknown",
            Self::ManifestResolved => "manifest-resolved",
            Self::PlanBuilt => "plan-built",
            Self::Emitting => "emitting",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

/// A non-fatal condition observed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Merge(MergeWarning),
    OriginUnavailable(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge(warning) => write!(f, "{warning}"),
            Self::OriginUnavailable(reason) => write!(f, "no git origin found ({reason})"),
        }
    }
}

/// Everything one run decided.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub target: PathBuf,
    pub new_project: bool,
    pub options: ResolvedOptions,
    pub manifest: ResolvedManifest,
    pub plan: WritePlan,
    pub intents: Vec<Intent>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    destination_root: PathBuf,
    state_reader: Box<dyn ExistingStateReader>,
    origin: Box<dyn OriginResolver>,
    sink: Box<dyn IntentSink>,
}

impl ScaffoldService {
    /// Create a service writing below `destination_root`.
    ///
    /// `Options::generate_into` is resolved relative to this root.
    pub fn new(
        destination_root: impl Into<PathBuf>,
        state_reader: Box<dyn ExistingStateReader>,
        origin: Box<dyn OriginResolver>,
        sink: Box<dyn IntentSink>,
    ) -> Self {
        Self {
            destination_root: destination_root.into(),
            state_reader,
            origin,
            sink,
        }
    }

    /// Decide everything without emitting. Used for dry runs.
    pub async fn plan(&self, answers: &Answers, options: &Options) -> NodegenResult<RunReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("plan", %run_id, root = %self.destination_root.display());
        self.decide(run_id, answers, options).instrument(span).await
    }

    /// Decide, then hand every intent to the sink in plan order.
    pub async fn run(&self, answers: &Answers, options: &Options) -> NodegenResult<RunReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("scaffold", %run_id, root = %self.destination_root.display());

        async {
            let report = self.decide(run_id, answers, options).await?;

            info!(phase = %RunPhase::Emitting, intents = report.intents.len());
            for intent in &report.intents {
                debug!(%intent, "Applying intent");
                self.sink.apply(intent)?;
            }

            info!(
                phase = %RunPhase::Done,
                warnings = report.diagnostics.len(),
                "Scaffold completed"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    async fn decide(
        &self,
        run_id: Uuid,
        answers: &Answers,
        options: &Options,
    ) -> NodegenResult<RunReport> {
        info!(phase = %RunPhase::Start);

        let target = match &options.generate_into {
            Some(sub) => self.destination_root.join(sub),
            None => self.destination_root.clone(),
        };
        let resolved = ResolvedOptions::resolve(answers, options, &fallback_name(&target))?;

        let state = self.state_reader.read_state(&target)?;
        info!(
            phase = %RunPhase::StateRead,
            manifest = state.manifest.is_some(),
            readme = state.readme.is_some()
        );

        let mut diagnostics = Vec::new();
        let resolved = match self.origin.resolve_origin(&target).await {
            Ok(url) => {
                info!(phase = %RunPhase::OriginResolved, origin = %url);
                resolved.with_resolved_origin(Some(url))
            }
            Err(e) => {
                warn!(phase = %RunPhase::OriginUnknown, reason = %e.reason, "Origin unavailable");
                diagnostics.push(Diagnostic::OriginUnavailable(e.reason));
                resolved
            }
        };

        let ExistingState { manifest, readme } = state;
        let new_project = manifest.is_none();
        let outcome = merge_manifest(manifest, &resolved);
        for warning in &outcome.warnings {
            warn!(%warning, "Manifest merge");
        }
        diagnostics.extend(outcome.warnings.into_iter().map(Diagnostic::Merge));
        info!(phase = %RunPhase::ManifestResolved, new_project);

        let plan = FeatureSelector::select(&resolved);
        info!(
            phase = %RunPhase::PlanBuilt,
            groups = ?plan.active_groups().collect::<Vec<_>>()
        );

        let intents = emit_intents(&target, &resolved, &outcome.manifest, &plan, readme.is_some())?;

        Ok(RunReport {
            run_id,
            target,
            new_project,
            options: resolved,
            manifest: outcome.manifest,
            plan,
            intents,
            diagnostics,
        })
    }
}

/// Last path component, used when no name was given.
fn fallback_name(target: &Path) -> String {
    target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn emit_intents(
    target: &Path,
    options: &ResolvedOptions,
    manifest: &ResolvedManifest,
    plan: &WritePlan,
    readme_exists: bool,
) -> NodegenResult<Vec<Intent>> {
    let mut intents = vec![Intent::WriteManifest {
        path: target.join(MANIFEST_FILE),
        manifest: manifest.clone(),
    }];

    let readme_path = target.join(README_FILE);
    intents.push(Intent::Readme(if readme_exists {
        ReadmeIntent::Keep { path: readme_path }
    } else {
        ReadmeIntent::Create {
            path: readme_path,
            content: render_readme(options, plan),
        }
    }));

    let context = RenderContext::new(options.name.clone()).with_variable(
        COVERALLS_VAR,
        plan.is_active(Feature::Coveralls).to_string(),
    );

    for group in plan.active_groups() {
        let intent = match group.action() {
            GroupAction::CopyTemplates => Intent::CopyGroup {
                group,
                target: target.to_path_buf(),
                context: context.clone(),
            },
            GroupAction::Invoke(generator) => {
                let request = plan.invocation_for(generator).cloned().ok_or(
                    DomainError::UnknownSubGenerator {
                        name: generator.to_string(),
                    },
                )?;
                Intent::InvokeSubGenerator {
                    target: target.to_path_buf(),
                    request,
                }
            }
        };
        intents.push(intent);
    }

    Ok(intents)
}
