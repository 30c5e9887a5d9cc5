//! User answers, command options, and the single defaulting pass.
//!
//! Answers come from the prompt collaborator (or an answers file), options
//! from parsed flags. Neither is consulted directly by the merger or the
//! selector: [`ResolvedOptions::resolve`] folds both, plus fixed defaults,
//! into one fully-resolved record first.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError, manifest::Person, render::to_kebab_case, validation::DomainValidator,
};

/// License identifier used when neither answers nor options name one.
pub const DEFAULT_LICENSE: &str = "MIT";

/// npm's spelling for "this package carries no license".
pub const NO_LICENSE: &str = "UNLICENSED";

// ── Feature ──────────────────────────────────────────────────────────────────

/// An independently toggleable plan group.
///
/// Declaration order is the canonical plan order: the license sub-generator
/// runs first, feature sub-generators next, boilerplate last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    License,
    Editorconfig,
    Git,
    Travis,
    Coveralls,
    Eslint,
    Jsc,
    Cli,
    Boilerplate,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Feature::License,
        Feature::Editorconfig,
        Feature::Git,
        Feature::Travis,
        Feature::Coveralls,
        Feature::Eslint,
        Feature::Jsc,
        Feature::Cli,
        Feature::Boilerplate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::License => "license",
            Self::Editorconfig => "editorconfig",
            Self::Git => "git",
            Self::Travis => "travis",
            Self::Coveralls => "coveralls",
            Self::Eslint => "eslint",
            Self::Jsc => "jsc",
            Self::Cli => "cli",
            Self::Boilerplate => "boilerplate",
        }
    }

    /// Value used when neither answers nor options mention the flag.
    pub const fn default_enabled(self) -> bool {
        match self {
            Self::License
            | Self::Editorconfig
            | Self::Git
            | Self::Travis
            | Self::Eslint
            | Self::Boilerplate => true,
            Self::Coveralls | Self::Jsc | Self::Cli => false,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state feature booleans shared by [`Answers`] and [`Options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorconfig: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_coveralls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eslint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cli: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boilerplate: Option<bool>,
}

impl FeatureFlags {
    pub fn get(&self, feature: Feature) -> Option<bool> {
        match feature {
            Feature::License => self.license,
            Feature::Editorconfig => self.editorconfig,
            Feature::Git => self.git,
            Feature::Travis => self.travis,
            Feature::Coveralls => self.include_coveralls,
            Feature::Eslint => self.eslint,
            Feature::Jsc => self.jsc,
            Feature::Cli => self.cli,
            Feature::Boilerplate => self.boilerplate,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        let slot = match feature {
            Feature::License => &mut self.license,
            Feature::Editorconfig => &mut self.editorconfig,
            Feature::Git => &mut self.git,
            Feature::Travis => &mut self.travis,
            Feature::Coveralls => &mut self.include_coveralls,
            Feature::Eslint => &mut self.eslint,
            Feature::Jsc => &mut self.jsc,
            Feature::Cli => &mut self.cli,
            Feature::Boilerplate => &mut self.boilerplate,
        };
        *slot = Some(enabled);
    }

    pub fn with(mut self, feature: Feature, enabled: bool) -> Self {
        self.set(feature, enabled);
        self
    }
}

// ── Answers / Options ────────────────────────────────────────────────────────

/// Values supplied by the user, typically through prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answers {
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub origin_url: Option<String>,
    pub license_type: Option<String>,
    pub readme: Option<String>,
    #[serde(flatten)]
    pub features: FeatureFlags,
}

/// Parsed command options.
///
/// `name` here outranks `Answers::name`; for feature flags the answer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub name: Option<String>,
    pub generate_into: Option<PathBuf>,
    pub origin_url: Option<String>,
    pub license_type: Option<String>,
    pub readme: Option<String>,
    #[serde(flatten)]
    pub features: FeatureFlags,
}

// ── ResolvedOptions ──────────────────────────────────────────────────────────

/// Every answer and option with defaults applied. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub author: Person,
    pub keywords: Option<Vec<String>>,
    pub origin_url: Option<String>,
    pub license_type: String,
    pub readme: Option<String>,
    pub generate_into: PathBuf,
    features: BTreeMap<Feature, bool>,
}

impl ResolvedOptions {
    /// Fold answers, options, and defaults into one record.
    ///
    /// `fallback_name` is the path-derived name used when neither source
    /// provides one (usually the target directory's last component). It is
    /// kebab-cased first, so `MyLib` becomes `my-lib`; typed names are
    /// validated as given.
    pub fn resolve(
        answers: &Answers,
        options: &Options,
        fallback_name: &str,
    ) -> Result<Self, DomainError> {
        let name = non_empty(options.name.as_deref())
            .or_else(|| non_empty(answers.name.as_deref()))
            .or_else(|| non_empty(Some(to_kebab_case(fallback_name).as_str())))
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        DomainValidator::validate_project_name(&name)?;

        let features = Feature::ALL
            .into_iter()
            .map(|feature| {
                let enabled = answers
                    .features
                    .get(feature)
                    .or_else(|| options.features.get(feature))
                    .unwrap_or_else(|| feature.default_enabled());
                (feature, enabled)
            })
            .collect();

        let keywords = answers.keywords.as_ref().map(|words| {
            words
                .iter()
                .filter_map(|w| non_empty(Some(w.as_str())))
                .collect::<Vec<_>>()
        });

        Ok(Self {
            name,
            description: non_empty(answers.description.as_deref()),
            homepage: non_empty(answers.homepage.as_deref()),
            author: Person {
                name: non_empty(answers.author_name.as_deref()),
                email: non_empty(answers.author_email.as_deref()),
                url: non_empty(answers.author_url.as_deref()),
                ..Default::default()
            },
            keywords,
            origin_url: non_empty(answers.origin_url.as_deref())
                .or_else(|| non_empty(options.origin_url.as_deref())),
            license_type: non_empty(answers.license_type.as_deref())
                .or_else(|| non_empty(options.license_type.as_deref()))
                .unwrap_or_else(|| DEFAULT_LICENSE.to_string()),
            readme: non_empty(answers.readme.as_deref())
                .or_else(|| non_empty(options.readme.as_deref())),
            generate_into: options.generate_into.clone().unwrap_or_default(),
            features,
        })
    }

    /// Whether a feature group is switched on after defaulting.
    pub fn enabled(&self, feature: Feature) -> bool {
        self.features.get(&feature).copied().unwrap_or(false)
    }

    /// Whether the license group may run: the flag is on and a license was chosen.
    pub fn wants_license(&self) -> bool {
        self.enabled(Feature::License) && !self.license_type.eq_ignore_ascii_case(NO_LICENSE)
    }

    /// Fill in the origin from the resolver when the user gave none.
    pub fn with_resolved_origin(mut self, origin: Option<String>) -> Self {
        if self.origin_url.is_none() {
            self.origin_url = non_empty(origin.as_deref());
        }
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
