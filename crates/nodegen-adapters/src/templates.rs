//! Built-in template groups.
//!
//! Each copy group is a fixed set of `(relative path, template)` pairs
//! rendered through [`RenderContext`].

use nodegen_core::{
    application::COVERALLS_VAR,
    domain::{Feature, RenderContext},
};

const EDITORCONFIG: &str = "\
root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
insert_final_newline = true

[*.md]
trim_trailing_whitespace = false
";

const GITIGNORE: &str = "\
node_modules
coverage
";

const GITATTRIBUTES: &str = "\
* text=auto
";

const TRAVIS: &str = "\
language: node_js
node_js:
  - v8
  - v6
";

const TRAVIS_COVERALLS: &str = "\
after_script: cat ./coverage/lcov.info | coveralls
";

const COVERALLS: &str = "\
service_name: travis-ci
";

/// Rendered files of one copy group, relative to the target directory.
///
/// Groups that are carried out by a sub-generator have no templates here.
pub fn render_group(group: Feature, ctx: &RenderContext) -> Vec<(&'static str, String)> {
    match group {
        Feature::Editorconfig => vec![(".editorconfig", ctx.render(EDITORCONFIG))],
        Feature::Git => vec![
            (".gitignore", ctx.render(GITIGNORE)),
            (".gitattributes", ctx.render(GITATTRIBUTES)),
        ],
        Feature::Travis => {
            let mut travis = ctx.render(TRAVIS);
            if ctx.get(COVERALLS_VAR) == Some("true") {
                travis.push_str(TRAVIS_COVERALLS);
            }
            vec![(".travis.yml", travis)]
        }
        Feature::Coveralls => vec![(".coveralls.yml", ctx.render(COVERALLS))],
        Feature::License
        | Feature::Eslint
        | Feature::Jsc
        | Feature::Cli
        | Feature::Boilerplate => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travis_pipes_coverage_only_when_coveralls_is_on() {
        let with = RenderContext::new("pkg").with_variable(COVERALLS_VAR, "true");
        let without = RenderContext::new("pkg").with_variable(COVERALLS_VAR, "false");

        assert!(render_group(Feature::Travis, &with)[0].1.contains("| coveralls"));
        assert!(!render_group(Feature::Travis, &without)[0].1.contains("coveralls"));
    }

    #[test]
    fn git_group_writes_ignore_and_attributes() {
        let files: Vec<&str> = render_group(Feature::Git, &RenderContext::new("pkg"))
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(files, [".gitignore", ".gitattributes"]);
    }

    #[test]
    fn invoked_groups_have_no_templates() {
        assert!(render_group(Feature::Boilerplate, &RenderContext::new("pkg")).is_empty());
    }
}
