//! README content for brand-new projects.

use std::fmt::Write;

use crate::domain::{
    answers::{Feature, ResolvedOptions},
    origin::repository_slug,
    plan::WritePlan,
    render::to_camel_case,
};

pub const README_FILE: &str = "README.md";

/// Render the README for a project that has none yet.
///
/// A custom `readme` body replaces the Installation and Usage sections; the
/// title and badges are always generated. The license footer only appears
/// when the License group runs.
pub fn render_readme(options: &ResolvedOptions, plan: &WritePlan) -> String {
    let name = options.name.as_str();
    let travis = plan.is_active(Feature::Travis);
    let coveralls = plan.is_active(Feature::Coveralls);
    let slug = options
        .origin_url
        .as_deref()
        .and_then(|url| repository_slug(url, name))
        .unwrap_or_else(|| name.to_string());

    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(out, "# {name} [![NPM version][npm-image]][npm-url]");
    if travis {
        out.push_str(" [![Build Status][travis-image]][travis-url]");
    }
    if coveralls {
        out.push_str(" [![Coverage percentage][coveralls-image]][coveralls-url]");
    }
    out.push('\n');
    if let Some(description) = &options.description {
        let _ = writeln!(out, "> {description}");
    }
    out.push('\n');

    match &options.readme {
        Some(body) => {
            out.push_str(body.trim_end());
            out.push_str("\n\n");
        }
        None => {
            let camel = to_camel_case(name);
            let _ = write!(
                out,
                "## Installation\n\n```sh\n$ npm install --save {name}\n```\n\n\
                 ## Usage\n\n```js\nconst {camel} = require('{name}');\n\n{camel}('Rainbow');\n```\n\n"
            );
        }
    }

    if plan.is_active(Feature::License) {
        let _ = writeln!(out, "## License\n\n{}\n\n", license_footer(options));
    }

    let _ = writeln!(out, "[npm-image]: https://badge.fury.io/js/{name}.svg");
    let _ = writeln!(out, "[npm-url]: https://npmjs.org/package/{name}");
    if travis {
        let _ = writeln!(out, "[travis-image]: https://travis-ci.org/{slug}.svg?branch=master");
        let _ = writeln!(out, "[travis-url]: https://travis-ci.org/{slug}");
    }
    if coveralls {
        let _ = writeln!(out, "[coveralls-image]: https://coveralls.io/repos/{slug}/badge.svg");
        let _ = writeln!(out, "[coveralls-url]: https://coveralls.io/r/{slug}");
    }
    out
}

fn license_footer(options: &ResolvedOptions) -> String {
    let license = &options.license_type;
    match (&options.author.name, &options.author.url) {
        (Some(author), Some(url)) => format!("{license} © [{author}]({url})"),
        (Some(author), None) => format!("{license} © {author}"),
        _ => license.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        answers::{Answers, FeatureFlags, Options},
        plan::FeatureSelector,
    };

    fn render(answers: Answers) -> String {
        let options = ResolvedOptions::resolve(&answers, &Options::default(), "x").unwrap();
        let plan = FeatureSelector::select(&options);
        render_readme(&options, &plan)
    }

    #[test]
    fn new_readme_embeds_name_description_and_footer() {
        let readme = render(Answers {
            name: Some("generator-apiproxy".into()),
            description: Some("A node generator".into()),
            author_name: Some("The Yeoman Team".into()),
            author_url: Some("http://yeoman.io".into()),
            origin_url: Some("ssh://git@onestash.verizon.com:7999/caov/vzatwork.git".into()),
            features: FeatureFlags::default().with(Feature::Coveralls, true),
            ..Default::default()
        });

        assert!(readme.starts_with("# generator-apiproxy "));
        assert!(readme.contains("> A node generator"));
        assert!(readme.contains("$ npm install --save generator-apiproxy"));
        assert!(readme.contains("const generatorApiproxy = require('generator-apiproxy');"));
        assert!(readme.contains("MIT © [The Yeoman Team](http://yeoman.io)"));
        assert!(readme.contains("[travis-image]: https://travis-ci.org/caov/vzatwork.svg"));
        assert!(readme.contains("coveralls"));
    }

    #[test]
    fn badges_follow_the_plan() {
        let readme = render(Answers {
            features: FeatureFlags::default().with(Feature::Travis, false),
            ..Default::default()
        });

        assert!(!readme.contains("travis"));
        assert!(!readme.contains("coveralls"));
        assert!(readme.contains("[npm-image]"));
    }

    #[test]
    fn custom_body_replaces_usage_but_keeps_license() {
        let readme = render(Answers {
            readme: Some("Custom body.".into()),
            license_type: Some("ISC".into()),
            ..Default::default()
        });

        assert!(readme.contains("Custom body."));
        assert!(!readme.contains("## Usage"));
        assert!(readme.contains("## License\n\nISC\n"));
    }

    #[test]
    fn no_license_footer_without_a_license() {
        for answers in [
            Answers {
                license_type: Some("UNLICENSED".into()),
                ..Default::default()
            },
            Answers {
                features: FeatureFlags::default().with(Feature::License, false),
                ..Default::default()
            },
        ] {
            let readme = render(answers);
            assert!(!readme.contains("## License"));
            assert!(!readme.contains("MIT"));
        }
    }
}
