use serde_json::json;

use nodegen_core::error::NodegenResult;

use super::GeneratorContext;

const ESLINTIGNORE: &str = "\
coverage
node_modules
";

const ESLINTRC: &str = "\
extends: xo-space
env:
  jest: true
  node: true
plugins:
  - import
  - jest
  - security
";

pub(super) fn run(ctx: &GeneratorContext<'_>) -> NodegenResult<()> {
    ctx.extend_manifest(&json!({
        "devDependencies": {
            "eslint": "^4.19.1",
            "eslint-config-xo-space": "^0.18.0",
            "eslint-plugin-import": "^2.12.0",
            "eslint-plugin-jest": "^21.17.0",
            "eslint-plugin-jsdoc": "^3.7.1",
            "eslint-plugin-no-unsafe-innerhtml": "^1.0.16",
            "eslint-plugin-no-unsanitized": "^3.0.2",
            "eslint-plugin-node": "^6.0.1",
            "eslint-plugin-promise": "^3.8.0",
            "eslint-plugin-scanjs-rules": "^0.2.1",
            "eslint-plugin-security": "^1.4.0",
            "eslint-plugin-standard": "^3.1.0",
            "eslint-plugin-xss": "^0.1.9"
        },
        "eslintConfig": {
            "extends": "xo-space",
            "env": { "jest": true, "node": true }
        },
        "scripts": {
            "lint": "eslint .",
            "lint:fix": "eslint . --fix",
            "pretest": "npm run lint"
        }
    }))?;

    ctx.write_if_absent(".eslintignore", ESLINTIGNORE)?;
    ctx.write_if_absent(".eslintrc.yml", ESLINTRC)?;
    Ok(())
}
