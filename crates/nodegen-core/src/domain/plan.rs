//! Feature selection: which plan groups run and in what order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::{
    answers::{Feature, ResolvedOptions},
    error::DomainError,
};

/// A runnable unit reached through the invoker's static name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubGenerator {
    License,
    Eslint,
    Jsc,
    Cli,
    Boilerplate,
}

impl SubGenerator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::License => "license",
            Self::Eslint => "eslint",
            Self::Jsc => "jsc",
            Self::Cli => "cli",
            Self::Boilerplate => "boilerplate",
        }
    }
}

impl fmt::Display for SubGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubGenerator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "license" => Ok(Self::License),
            "eslint" => Ok(Self::Eslint),
            "jsc" => Ok(Self::Jsc),
            "cli" => Ok(Self::Cli),
            "boilerplate" => Ok(Self::Boilerplate),
            other => Err(DomainError::UnknownSubGenerator {
                name: other.to_string(),
            }),
        }
    }
}

/// What activating a plan group amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    /// Copy the group's built-in templates.
    CopyTemplates,
    Invoke(SubGenerator),
}

impl Feature {
    pub const fn action(self) -> GroupAction {
        match self {
            Self::Editorconfig | Self::Git | Self::Travis | Self::Coveralls => {
                GroupAction::CopyTemplates
            }
            Self::License => GroupAction::Invoke(SubGenerator::License),
            Self::Eslint => GroupAction::Invoke(SubGenerator::Eslint),
            Self::Jsc => GroupAction::Invoke(SubGenerator::Jsc),
            Self::Cli => GroupAction::Invoke(SubGenerator::Cli),
            Self::Boilerplate => GroupAction::Invoke(SubGenerator::Boilerplate),
        }
    }
}

/// Option keys understood by the sub-generators.
pub mod keys {
    pub const GENERATE_INTO: &str = "generateInto";
    pub const NAME: &str = "name";
    pub const LICENSE: &str = "license";
    pub const AUTHOR_NAME: &str = "authorName";
    pub const AUTHOR_EMAIL: &str = "authorEmail";
    pub const AUTHOR_URL: &str = "authorUrl";
}

/// Request to run one sub-generator with string options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGeneratorRequest {
    pub generator: SubGenerator,
    pub options: BTreeMap<String, String>,
}

impl SubGeneratorRequest {
    pub fn new(generator: SubGenerator) -> Self {
        Self {
            generator,
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<String>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    fn with_opt(self, key: &str, value: Option<&String>) -> Self {
        match value {
            Some(value) => self.with_option(key, value.clone()),
            None => self,
        }
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

/// Active groups plus the ordered sub-generator invocations.
///
/// Built once per run by [`FeatureSelector::select`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    groups: BTreeMap<Feature, bool>,
    invocations: Vec<SubGeneratorRequest>,
}

impl WritePlan {
    pub fn is_active(&self, feature: Feature) -> bool {
        self.groups.get(&feature).copied().unwrap_or(false)
    }

    /// Active groups in canonical order.
    pub fn active_groups(&self) -> impl Iterator<Item = Feature> + '_ {
        self.groups
            .iter()
            .filter(|(_, active)| **active)
            .map(|(feature, _)| *feature)
    }

    pub fn groups(&self) -> &BTreeMap<Feature, bool> {
        &self.groups
    }

    pub fn invocations(&self) -> &[SubGeneratorRequest] {
        &self.invocations
    }

    pub fn invocation_for(&self, generator: SubGenerator) -> Option<&SubGeneratorRequest> {
        self.invocations.iter().find(|r| r.generator == generator)
    }
}

/// Pure decision from resolved options to a [`WritePlan`].
pub struct FeatureSelector;

impl FeatureSelector {
    pub fn select(options: &ResolvedOptions) -> WritePlan {
        let groups: BTreeMap<Feature, bool> = Feature::ALL
            .into_iter()
            .map(|feature| {
                let active = match feature {
                    Feature::License => options.wants_license(),
                    other => options.enabled(other),
                };
                (feature, active)
            })
            .collect();

        // BTreeMap iteration follows Feature's declaration order.
        let invocations = groups
            .iter()
            .filter(|(_, active)| **active)
            .filter_map(|(feature, _)| match feature.action() {
                GroupAction::Invoke(generator) => Some(Self::request(generator, options)),
                GroupAction::CopyTemplates => None,
            })
            .collect();

        WritePlan {
            groups,
            invocations,
        }
    }

    fn request(generator: SubGenerator, options: &ResolvedOptions) -> SubGeneratorRequest {
        let request = SubGeneratorRequest::new(generator)
            .with_option(
                keys::GENERATE_INTO,
                options.generate_into.to_string_lossy(),
            )
            .with_option(keys::NAME, options.name.clone());

        match generator {
            SubGenerator::License => request
                .with_option(keys::LICENSE, options.license_type.clone())
                .with_opt(keys::AUTHOR_NAME, options.author.name.as_ref())
                .with_opt(keys::AUTHOR_EMAIL, options.author.email.as_ref())
                .with_opt(keys::AUTHOR_URL, options.author.url.as_ref()),
            SubGenerator::Cli | SubGenerator::Boilerplate | SubGenerator::Eslint => request,
            SubGenerator::Jsc => request.with_opt(keys::AUTHOR_NAME, options.author.name.as_ref()),
        }
    }
}
