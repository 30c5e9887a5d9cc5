//! Field-by-field reconciliation of an existing manifest with new answers.
//!
//! | Field | Policy |
//! |-------|--------|
//! | `name` | overwrite always |
//! | `version` | keep existing; `0.0.0` only for a brand-new project |
//! | `description`, `homepage`, `files` | prefer existing, else new |
//! | `author`, `repository` | accept either shape, persist the record shape, merge sub-fields |
//! | `keywords` | existing (even `null`) wins; only a missing field takes the new value |

use std::fmt;

use crate::domain::{
    answers::ResolvedOptions,
    manifest::{
        AuthorField, ExistingManifest, INITIAL_VERSION, Person, Repository, RepositoryField,
        ResolvedManifest, Slot,
    },
};

/// Entry point written for brand-new projects.
pub const DEFAULT_MAIN: &str = "lib/index.js";

/// Published directories written for brand-new projects.
pub const DEFAULT_FILES: &[&str] = &["lib"];

/// Non-fatal condition found while merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeWarning {
    /// The field held a value outside its legal shapes; it was treated as absent.
    UnknownShape { field: &'static str },
    /// A manifest exists but carries no usable version; none was invented.
    MissingVersion,
}

impl fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape { field } => {
                write!(f, "field '{field}' has an unrecognised shape and was treated as absent")
            }
            Self::MissingVersion => {
                f.write_str("existing manifest has no valid version; leaving it unset")
            }
        }
    }
}

/// Applies the per-field policies and collects warnings along the way.
#[derive(Debug, Default)]
pub struct FieldMerger {
    warnings: Vec<MergeWarning>,
}

impl FieldMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overwrite<T>(&mut self, _existing: Slot<T>, new: T) -> T {
        new
    }

    pub fn prefer_existing<T>(
        &mut self,
        field: &'static str,
        existing: Slot<T>,
        new: Option<T>,
    ) -> Slot<T> {
        match existing {
            Slot::Present(value) => Slot::Present(value),
            Slot::Null => new.map_or(Slot::Null, Slot::Present),
            Slot::Absent => new.map_or(Slot::Absent, Slot::Present),
            Slot::Unrecognized(raw) => {
                self.warnings.push(MergeWarning::UnknownShape { field });
                new.map_or(Slot::Unrecognized(raw), Slot::Present)
            }
        }
    }

    pub fn nullable_collection<T>(
        &mut self,
        field: &'static str,
        existing: Slot<T>,
        new: Option<T>,
    ) -> Slot<T> {
        match existing {
            Slot::Null => Slot::Null,
            other => self.prefer_existing(field, other, new),
        }
    }

    /// `existing` is `None` when there was no manifest at all.
    pub fn version(&mut self, existing: Option<Slot<String>>) -> Slot<String> {
        match existing {
            None => Slot::Present(INITIAL_VERSION.to_string()),
            Some(Slot::Present(version)) => Slot::Present(version),
            Some(Slot::Unrecognized(raw)) => {
                self.warnings
                    .push(MergeWarning::UnknownShape { field: "version" });
                self.warnings.push(MergeWarning::MissingVersion);
                Slot::Unrecognized(raw)
            }
            Some(missing) => {
                self.warnings.push(MergeWarning::MissingVersion);
                missing
            }
        }
    }

    pub fn author(&mut self, existing: Slot<AuthorField>, new: &Person) -> Slot<Person> {
        let new = (!new.is_empty()).then(|| new.clone());
        match (existing.map(AuthorField::normalize), new) {
            (Slot::Present(old), Some(new)) => Slot::Present(old.or(&new)),
            (existing, new) => self.prefer_existing("author", existing, new),
        }
    }

    pub fn repository(
        &mut self,
        existing: Slot<RepositoryField>,
        new: Option<Repository>,
    ) -> Slot<Repository> {
        match (existing.map(RepositoryField::normalize), new) {
            (Slot::Present(old), Some(new)) => Slot::Present(Repository {
                kind: old.kind.or(new.kind),
                url: old.url,
                directory: old.directory.or(new.directory),
                null_keys: old.null_keys,
            }),
            (existing, new) => self.prefer_existing("repository", existing, new),
        }
    }

    pub fn finish(self) -> Vec<MergeWarning> {
        self.warnings
    }
}

/// Resolved manifest plus every warning raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub manifest: ResolvedManifest,
    pub warnings: Vec<MergeWarning>,
}

/// Build the manifest to persist from what exists and what was answered.
pub fn merge_manifest(existing: Option<ExistingManifest>, options: &ResolvedOptions) -> MergeOutcome {
    let mut merger = FieldMerger::new();
    let created = existing.is_none();
    let existing = existing.unwrap_or_default();

    let version = merger.version((!created).then_some(existing.version));

    let mut extra = existing.extra;
    if created {
        extra.insert("main".into(), DEFAULT_MAIN.into());
    }

    let manifest = ResolvedManifest {
        name: merger.overwrite(existing.name, options.name.clone()),
        version,
        description: merger.prefer_existing(
            "description",
            existing.description,
            options.description.clone(),
        ),
        homepage: merger.prefer_existing("homepage", existing.homepage, options.homepage.clone()),
        repository: merger.repository(
            existing.repository,
            options.origin_url.clone().map(Repository::git),
        ),
        author: merger.author(existing.author, &options.author),
        files: merger.prefer_existing(
            "files",
            existing.files,
            Some(DEFAULT_FILES.iter().map(|f| f.to_string()).collect()),
        ),
        keywords: merger.nullable_collection("keywords", existing.keywords, options.keywords.clone()),
        extra,
    };

    MergeOutcome {
        manifest,
        warnings: merger.finish(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::answers::{Answers, Options};

    fn options(answers: Answers) -> ResolvedOptions {
        ResolvedOptions::resolve(&answers, &Options::default(), "fallback").unwrap()
    }

    fn existing(value: Value) -> Option<ExistingManifest> {
        Some(ExistingManifest::from_value(value).unwrap())
    }

    #[test]
    fn existing_author_record_and_null_keywords_are_kept() {
        let outcome = merge_manifest(
            existing(json!({
                "version": "1.1.11",
                "name": null,
                "description": "lots of fun",
                "homepage": "http://yeoman.io",
                "repository": "yeoman/generator-node",
                "author": {
                    "name": "No Body",
                    "email": "nobody@elsewhere.net",
                    "url": "https://nobody.elsewhere.net"
                },
                "files": ["lib"],
                "keywords": null
            })),
            &options(Answers {
                name: Some("foo-lib".into()),
                ..Default::default()
            }),
        );

        let manifest = outcome.manifest;
        assert_eq!(manifest.name, "foo-lib");
        assert_eq!(manifest.version, Slot::Present("1.1.11".into()));
        assert_eq!(
            manifest.author,
            Slot::Present(Person {
                name: Some("No Body".into()),
                email: Some("nobody@elsewhere.net".into()),
                url: Some("https://nobody.elsewhere.net".into()),
                ..Default::default()
            })
        );
        assert_eq!(manifest.keywords, Slot::Null);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn brand_new_project_starts_at_zero() {
        let outcome = merge_manifest(
            None,
            &options(Answers {
                name: Some("generator-apiproxy".into()),
                description: Some("A node generator".into()),
                author_name: Some("The Yeoman Team".into()),
                origin_url: Some("ssh://git@onestash.verizon.com:7999/caov/vzatwork.git".into()),
                keywords: Some(vec!["foo".into(), "bar".into()]),
                ..Default::default()
            }),
        );

        let value = outcome.manifest.to_value();
        assert_eq!(value["version"], "0.0.0");
        assert_eq!(value["description"], "A node generator");
        assert_eq!(value["files"], json!(["lib"]));
        assert_eq!(value["keywords"], json!(["foo", "bar"]));
        assert_eq!(value["main"], "lib/index.js");
        assert_eq!(
            value["repository"],
            json!({ "type": "git", "url": "ssh://git@onestash.verizon.com:7999/caov/vzatwork.git" })
        );
        assert_eq!(value["author"], json!({ "name": "The Yeoman Team" }));
    }

    #[test]
    fn versionless_manifest_is_flagged_not_defaulted() {
        let outcome = merge_manifest(existing(json!({ "name": "x" })), &options(Answers::default()));

        assert_eq!(outcome.manifest.version, Slot::Absent);
        assert_eq!(outcome.warnings, vec![MergeWarning::MissingVersion]);
    }

    #[test]
    fn string_shorthands_are_written_as_records() {
        let outcome = merge_manifest(
            existing(json!({
                "version": "1.0.34",
                "repository": "yeoman/generator-node",
                "author": "The Yeoman Team <hi@yeoman.io>"
            })),
            &options(Answers {
                author_url: Some("http://yeoman.io".into()),
                origin_url: Some("git@github.com:someone/else.git".into()),
                ..Default::default()
            }),
        );

        let value = outcome.manifest.to_value();
        assert_eq!(
            value["repository"],
            json!({ "type": "git", "url": "yeoman/generator-node" })
        );
        assert_eq!(
            value["author"],
            json!({ "name": "The Yeoman Team", "email": "hi@yeoman.io", "url": "http://yeoman.io" })
        );
    }

    #[test]
    fn unknown_shape_warns_and_yields_to_the_new_value() {
        let outcome = merge_manifest(
            existing(json!({ "version": "1.0.0", "author": 42, "homepage": ["x"] })),
            &options(Answers {
                author_name: Some("Ann".into()),
                ..Default::default()
            }),
        );

        assert_eq!(
            outcome.manifest.author,
            Slot::Present(Person {
                name: Some("Ann".into()),
                ..Default::default()
            })
        );
        // no replacement for homepage, so the raw value survives
        assert_eq!(outcome.manifest.homepage, Slot::Unrecognized(json!(["x"])));
        assert_eq!(
            outcome.warnings,
            vec![
                MergeWarning::UnknownShape { field: "homepage" },
                MergeWarning::UnknownShape { field: "author" },
            ]
        );
    }

    #[test]
    fn keywords_absent_takes_answer_but_empty_list_is_kept() {
        let answers = Answers {
            keywords: Some(vec!["api".into()]),
            ..Default::default()
        };

        let absent = merge_manifest(existing(json!({ "version": "1.0.0" })), &options(answers.clone()));
        assert_eq!(absent.manifest.keywords, Slot::Present(vec!["api".to_string()]));

        let empty = merge_manifest(
            existing(json!({ "version": "1.0.0", "keywords": [] })),
            &options(answers),
        );
        assert_eq!(empty.manifest.keywords, Slot::Present(Vec::new()));
    }

    #[test]
    fn pass_through_keys_survive_untouched() {
        let outcome = merge_manifest(
            existing(json!({
                "version": "2.0.0",
                "main": "dist/index.js",
                "dependencies": { "lodash": "^4.17.21" }
            })),
            &options(Answers::default()),
        );

        let value = outcome.manifest.to_value();
        assert_eq!(value["main"], "dist/index.js");
        assert_eq!(value["dependencies"], json!({ "lodash": "^4.17.21" }));
    }

    #[test]
    fn merging_its_own_output_is_a_fixed_point() {
        let opts = options(Answers {
            name: Some("generator-node".into()),
            author_name: Some("The Yeoman Team".into()),
            origin_url: Some("yeoman/generator-node".into()),
            ..Default::default()
        });
        let seeds = [
            None,
            existing(json!({ "version": "1.0.34", "author": "The Yeoman Team", "keywords": ["bar"] })),
            existing(json!({ "name": null, "repository": { "url": "x" }, "keywords": null })),
        ];

        for seed in seeds {
            let first = merge_manifest(seed, &opts).manifest;
            let second = merge_manifest(existing(first.to_value()), &opts).manifest;
            assert_eq!(first.to_value(), second.to_value());
        }
    }

    #[test]
    fn null_author_sub_field_is_kept_unless_answered() {
        let seed = json!({ "version": "1.0.0", "author": { "name": "A", "email": null } });

        let kept = merge_manifest(existing(seed.clone()), &options(Answers::default()));
        assert_eq!(
            kept.manifest.to_value()["author"],
            json!({ "name": "A", "email": null })
        );

        let filled = merge_manifest(
            existing(seed),
            &options(Answers {
                author_email: Some("a@example.com".into()),
                ..Default::default()
            }),
        );
        assert_eq!(
            filled.manifest.to_value()["author"],
            json!({ "name": "A", "email": "a@example.com" })
        );
    }
}
