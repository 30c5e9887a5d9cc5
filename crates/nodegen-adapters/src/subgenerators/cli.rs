use serde_json::{Map, Value, json};

use nodegen_core::{domain::RenderContext, error::NodegenResult};

use super::GeneratorContext;
use crate::json_extend::insert_if_absent;

const CLI_JS: &str = "\
#!/usr/bin/env node
'use strict';
const meow = require('meow');
const {{PROJECT_NAME_CAMEL}} = require('./');

const cli = meow(`
Usage
  $ {{PROJECT_NAME}} [input]

Options
  --foo  Lorem ipsum. [Default: false]

Examples
  $ {{PROJECT_NAME}}
  unicorns
  $ {{PROJECT_NAME}} rainbows
  unicorns & rainbows
`);

console.log({{PROJECT_NAME_CAMEL}}(cli.input[0] || 'unicorns'));
";

pub(super) fn run(ctx: &GeneratorContext<'_>) -> NodegenResult<()> {
    let name = ctx.project_name().to_string();
    ctx.write_if_absent("lib/cli.js", &RenderContext::new(name.as_str()).render(CLI_JS))?;

    ctx.extend_manifest(&json!({ "dependencies": { "meow": "^3.7.0" } }))?;

    let mut bin = Map::new();
    bin.insert(name, Value::String("lib/cli.js".into()));
    ctx.update_manifest(|manifest| {
        insert_if_absent(manifest, "bin", Value::Object(bin));
    })
}
