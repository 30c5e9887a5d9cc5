//! End-to-end runs of `ScaffoldService` over the real adapters.

use std::path::Path;
use std::sync::Arc;

use nodegen_adapters::{
    FsStateReader, IntentApplier, LocalFilesystem, MemoryFilesystem, StaticOriginResolver,
};
use nodegen_core::{
    application::{Diagnostic, Intent, ScaffoldService},
    domain::{Answers, Feature, FeatureFlags, Options, SubGenerator},
    error::ErrorCategory,
};
use serde_json::{Value, json};

const ROOT: &str = "/work/generator-apiproxy";

fn service(fs: &MemoryFilesystem, origin: StaticOriginResolver) -> ScaffoldService {
    ScaffoldService::new(
        ROOT,
        Box::new(FsStateReader::new(Arc::new(fs.clone()))),
        Box::new(origin),
        Box::new(IntentApplier::new(Arc::new(fs.clone()))),
    )
}

fn manifest(fs: &MemoryFilesystem) -> Value {
    let text = fs
        .read_file(Path::new(ROOT).join("package.json"))
        .expect("package.json written");
    serde_json::from_str(&text).expect("valid JSON")
}

fn new_project_answers() -> Answers {
    Answers {
        name: Some("generator-apiproxy".into()),
        description: Some("A node generator".into()),
        homepage: Some("http://yeoman.io".into()),
        origin_url: Some("ssh://git@onestash.verizon.com:7999/caov/vzatwork.git".into()),
        author_name: Some("The Yeoman Team".into()),
        author_email: Some("hi@yeoman.io".into()),
        author_url: Some("http://yeoman.io".into()),
        keywords: Some(vec!["foo".into(), "bar".into()]),
        features: FeatureFlags::default().with(Feature::Coveralls, true),
        ..Default::default()
    }
}

#[tokio::test]
async fn scaffolds_a_complete_new_project() {
    let fs = MemoryFilesystem::new();
    service(&fs, StaticOriginResolver::unavailable())
        .run(&new_project_answers(), &Options::default())
        .await
        .unwrap();

    for file in [
        ".travis.yml",
        ".editorconfig",
        ".gitignore",
        ".gitattributes",
        ".coveralls.yml",
        "README.md",
        "LICENSE",
        "lib/index.js",
        "__tests__/index.test.js",
        ".eslintrc.yml",
    ] {
        assert!(fs.read_file(Path::new(ROOT).join(file)).is_some(), "{file}");
    }

    let pkg = manifest(&fs);
    assert_eq!(pkg["name"], "generator-apiproxy");
    assert_eq!(pkg["version"], "0.0.0");
    assert_eq!(pkg["description"], "A node generator");
    assert_eq!(pkg["homepage"], "http://yeoman.io");
    assert_eq!(
        pkg["repository"],
        json!({ "type": "git", "url": "ssh://git@onestash.verizon.com:7999/caov/vzatwork.git" })
    );
    assert_eq!(
        pkg["author"],
        json!({ "name": "The Yeoman Team", "email": "hi@yeoman.io", "url": "http://yeoman.io" })
    );
    assert_eq!(pkg["files"], json!(["lib"]));
    assert_eq!(pkg["keywords"], json!(["foo", "bar"]));
    assert_eq!(pkg["main"], "lib/index.js");
    assert_eq!(pkg["license"], "MIT");

    let readme = fs.read_file(Path::new(ROOT).join("README.md")).unwrap();
    assert!(readme.contains("const generatorApiproxy = require('generator-apiproxy');"));
    assert!(readme.contains("> A node generator"));
    assert!(readme.contains("$ npm install --save generator-apiproxy"));
    assert!(readme.contains("© [The Yeoman Team](http://yeoman.io)"));
    assert!(readme.contains("[travis-image]: https://travis-ci.org/"));
    assert!(readme.contains("coveralls"));

    let travis = fs.read_file(Path::new(ROOT).join(".travis.yml")).unwrap();
    assert!(travis.contains("| coveralls"));
}

#[tokio::test]
async fn keeps_readme_and_extends_existing_manifest() {
    let fs = MemoryFilesystem::new()
        .with_file(
            format!("{ROOT}/package.json"),
            json!({
                "version": "1.0.34",
                "description": "lots of fun",
                "homepage": "http://yeoman.io",
                "repository": { "url": "yeoman/generator-node" },
                "author": "The Yeoman Team",
                "files": ["lib"],
                "keywords": ["bar"]
            })
            .to_string(),
        )
        .with_file(format!("{ROOT}/README.md"), "foo");

    let answers = Answers {
        name: Some("generator-node".into()),
        ..Default::default()
    };
    let report = service(&fs, StaticOriginResolver::unavailable())
        .run(&answers, &Options::default())
        .await
        .unwrap();

    let pkg = manifest(&fs);
    assert_eq!(pkg["name"], "generator-node");
    assert_eq!(pkg["version"], "1.0.34");
    assert_eq!(pkg["description"], "lots of fun");
    assert_eq!(pkg["homepage"], "http://yeoman.io");
    assert_eq!(pkg["repository"], json!({ "url": "yeoman/generator-node" }));
    assert_eq!(pkg["author"], json!({ "name": "The Yeoman Team" }));
    assert_eq!(pkg["files"], json!(["lib"]));
    assert_eq!(pkg["keywords"], json!(["bar"]));
    assert!(pkg.get("main").is_none());
    assert_eq!(
        fs.read_file(format!("{ROOT}/README.md")).as_deref(),
        Some("foo")
    );
    assert!(!report.new_project);
}

#[tokio::test]
async fn keeps_existing_author_record_and_null_keywords() {
    let fs = MemoryFilesystem::new()
        .with_file(
            format!("{ROOT}/package.json"),
            json!({
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
            })
            .to_string(),
        )
        .with_file(format!("{ROOT}/README.md"), "foo");

    let answers = Answers {
        name: Some("foo-lib".into()),
        ..Default::default()
    };
    let options = Options {
        name: Some("foo-lib".into()),
        ..Default::default()
    };
    service(&fs, StaticOriginResolver::unavailable())
        .run(&answers, &options)
        .await
        .unwrap();

    let pkg = manifest(&fs);
    assert_eq!(pkg["name"], "foo-lib");
    assert_eq!(pkg["version"], "1.1.11");
    assert_eq!(
        pkg["author"],
        json!({
            "name": "No Body",
            "email": "nobody@elsewhere.net",
            "url": "https://nobody.elsewhere.net"
        })
    );
    assert_eq!(pkg["keywords"], Value::Null);
    assert_eq!(
        pkg["repository"],
        json!({ "type": "git", "url": "yeoman/generator-node" })
    );
}

#[tokio::test]
async fn second_run_is_a_fixed_point() {
    let seeds = [
        MemoryFilesystem::new(),
        MemoryFilesystem::new().with_file(
            format!("{ROOT}/package.json"),
            r#"{"version":"1.0.34","author":"The Yeoman Team <hi@yeoman.io>","repository":"yeoman/generator-node","scripts":{"test":"jest"}}"#,
        ),
        MemoryFilesystem::new().with_file(format!("{ROOT}/package.json"), r#"{"keywords":null}"#),
    ];

    for fs in seeds {
        let options = Options {
            features: FeatureFlags::default()
                .with(Feature::Cli, true)
                .with(Feature::Jsc, true),
            ..Default::default()
        };
        let svc = service(&fs, StaticOriginResolver::new(Some("yeoman".into())));

        svc.run(&new_project_answers(), &options).await.unwrap();
        let first = fs.snapshot();
        svc.run(&new_project_answers(), &options).await.unwrap();

        assert_eq!(first, fs.snapshot());
    }
}

#[tokio::test]
async fn existing_project_files_survive_a_run() {
    let seeded = [
        (".gitignore", "node_modules\ndist\n.env\n"),
        ("LICENSE", "GNU GENERAL PUBLIC LICENSE\nVersion 3, 29 June 2007\n"),
        (".eslintrc.yml", "extends: airbnb\n"),
        (".travis.yml", "language: node_js\nnode_js:\n  - 20\n"),
        ("lib/cli.js", "#!/usr/bin/env node\nrequire('./run');\n"),
    ];
    let fs = seeded.iter().fold(
        MemoryFilesystem::new().with_file(
            Path::new(ROOT).join("package.json"),
            r#"{"name":"generator-apiproxy","version":"2.0.0","license":"GPL-3.0"}"#,
        ),
        |fs, (file, content)| fs.with_file(Path::new(ROOT).join(file), *content),
    );

    service(&fs, StaticOriginResolver::unavailable())
        .run(
            &Answers {
                features: FeatureFlags::default().with(Feature::Cli, true),
                ..Default::default()
            },
            &Options::default(),
        )
        .await
        .unwrap();

    for (file, content) in seeded {
        assert_eq!(
            fs.read_file(Path::new(ROOT).join(file)).as_deref(),
            Some(content),
            "{file}"
        );
    }
    assert_eq!(manifest(&fs)["license"], "GPL-3.0");
    // files the project lacked are still added
    assert!(fs.read_file(Path::new(ROOT).join(".gitattributes")).is_some());
}

#[tokio::test]
async fn origin_failure_is_reported_not_fatal() {
    let fs = MemoryFilesystem::new();
    let answers = Answers {
        name: Some("noop".into()),
        ..Default::default()
    };

    let report = service(&fs, StaticOriginResolver::unavailable())
        .run(&answers, &Options::default())
        .await
        .unwrap();

    assert!(manifest(&fs).get("repository").is_none());
    assert!(
        report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::OriginUnavailable(_)))
    );
}

#[tokio::test]
async fn resolved_origin_feeds_repository_and_badges() {
    let fs = MemoryFilesystem::new();
    let answers = Answers {
        name: Some("noop".into()),
        ..Default::default()
    };

    service(&fs, StaticOriginResolver::new(Some("gregswindle".into())))
        .run(&answers, &Options::default())
        .await
        .unwrap();

    assert_eq!(
        manifest(&fs)["repository"],
        json!({ "type": "git", "url": "gregswindle" })
    );
    let readme = fs.read_file(format!("{ROOT}/README.md")).unwrap();
    assert!(readme.contains("https://travis-ci.org/gregswindle/noop"));
}

#[tokio::test]
async fn malformed_manifest_aborts_before_any_write() {
    let fs = MemoryFilesystem::new().with_file(format!("{ROOT}/package.json"), "{ \"name\": ");
    let before = fs.snapshot();

    let err = service(&fs, StaticOriginResolver::unavailable())
        .run(&Answers::default(), &Options::default())
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::MalformedState);
    assert!(err.to_string().contains("package.json"));
    assert_eq!(before, fs.snapshot());
}

#[tokio::test]
async fn disabled_flags_skip_their_files() {
    let cases = [
        (Feature::Boilerplate, "lib/index.js"),
        (Feature::Editorconfig, ".editorconfig"),
        (Feature::Git, ".gitignore"),
        (Feature::Git, ".gitattributes"),
        (Feature::License, "LICENSE"),
        (Feature::Travis, ".travis.yml"),
    ];

    for (feature, file) in cases {
        let fs = MemoryFilesystem::new();
        let options = Options {
            features: FeatureFlags::default().with(feature, false),
            ..Default::default()
        };
        service(&fs, StaticOriginResolver::unavailable())
            .run(&Answers::default(), &options)
            .await
            .unwrap();

        assert!(fs.read_file(format!("{ROOT}/{file}")).is_none(), "{feature}: {file}");
        assert!(fs.read_file(format!("{ROOT}/package.json")).is_some());
    }
}

#[tokio::test]
async fn license_is_invoked_before_jsc() {
    let fs = MemoryFilesystem::new();
    let options = Options {
        features: FeatureFlags::default().with(Feature::Jsc, true),
        ..Default::default()
    };

    let report = service(&fs, StaticOriginResolver::unavailable())
        .run(&Answers::default(), &options)
        .await
        .unwrap();

    let order: Vec<SubGenerator> = report
        .intents
        .iter()
        .filter_map(|intent| match intent {
            Intent::InvokeSubGenerator { request, .. } => Some(request.generator),
            _ => None,
        })
        .collect();
    let license = order.iter().position(|g| *g == SubGenerator::License).unwrap();
    let jsc = order.iter().position(|g| *g == SubGenerator::Jsc).unwrap();
    assert!(license < jsc);
    assert!(
        fs.read_file(format!("{ROOT}/apiproxy/resources/jsc/generator-apiproxy.js"))
            .is_some()
    );
}

#[tokio::test]
async fn writes_to_a_real_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("my-lib");
    let fs = Arc::new(LocalFilesystem::new());
    let service = ScaffoldService::new(
        &target,
        Box::new(FsStateReader::new(fs.clone())),
        Box::new(StaticOriginResolver::unavailable()),
        Box::new(IntentApplier::new(fs)),
    );

    let report = service
        .run(&Answers::default(), &Options::default())
        .await
        .unwrap();

    assert_eq!(report.options.name, "my-lib");
    let pkg: Value =
        serde_json::from_str(&std::fs::read_to_string(target.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(pkg["name"], "my-lib");
    assert!(target.join("README.md").is_file());
    assert!(target.join(".gitignore").is_file());
}
