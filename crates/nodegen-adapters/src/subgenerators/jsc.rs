//! JavaScript callout skeleton for an API proxy.

use nodegen_core::{domain::RenderContext, error::NodegenResult};

use super::GeneratorContext;

const CALLOUT: &str = "\
/**
 * {{PROJECT_NAME}} JavaScript callout.
 *
 * Runs inside the proxy's JavaScript policy; `context` is provided by the
 * gateway runtime.
 */
function {{PROJECT_NAME_CAMEL}}(ctx) {
  var pathSuffix = ctx.getVariable('proxy.pathsuffix');
  ctx.setVariable('{{PROJECT_NAME_CAMEL}}.pathSuffix', pathSuffix);
  return pathSuffix;
}

if (typeof context !== 'undefined') {
  {{PROJECT_NAME_CAMEL}}(context);
}

if (typeof module !== 'undefined') {
  module.exports = {{PROJECT_NAME_CAMEL}};
}
";

const CALLOUT_TEST: &str = "\
const {{PROJECT_NAME_CAMEL}} = require('../../apiproxy/resources/jsc/{{CALLOUT_FILE}}');

describe('{{PROJECT_NAME}} callout', () => {
  it('copies the path suffix into a flow variable', () => {
    const vars = {'proxy.pathsuffix': '/ping'};
    const ctx = {
      getVariable: name => vars[name],
      setVariable: (name, value) => {
        vars[name] = value;
      }
    };

    expect({{PROJECT_NAME_CAMEL}}(ctx)).toBe('/ping');
    expect(vars['{{PROJECT_NAME_CAMEL}}.pathSuffix']).toBe('/ping');
  });
});
";

pub(super) fn run(ctx: &GeneratorContext<'_>) -> NodegenResult<()> {
    let name = ctx.project_name();
    // `@scope/pkg` files are named after `pkg`
    let file = name.rsplit('/').next().unwrap_or(name);
    let render = RenderContext::new(name).with_variable("CALLOUT_FILE", file);

    ctx.write_if_absent(
        &format!("apiproxy/resources/jsc/{file}.js"),
        &render.render(CALLOUT),
    )?;
    ctx.write_if_absent(
        &format!("__tests__/jsc/{file}.test.js"),
        &render.render(CALLOUT_TEST),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use nodegen_core::domain::{SubGenerator, SubGeneratorRequest, plan::keys};

    use super::*;
    use crate::filesystem::MemoryFilesystem;

    #[test]
    fn writes_callout_named_after_project() {
        let fs = MemoryFilesystem::new();
        let request = SubGeneratorRequest::new(SubGenerator::Jsc).with_option(keys::NAME, "noop");
        run(&GeneratorContext {
            fs: &fs,
            target: Path::new("/p"),
            request: &request,
        })
        .unwrap();

        let callout = fs.read_file("/p/apiproxy/resources/jsc/noop.js").unwrap();
        assert!(callout.contains("function noop(ctx)"));
        assert!(fs.read_file("/p/__tests__/jsc/noop.test.js").is_some());
    }

    #[test]
    fn scoped_name_uses_its_bare_segment_for_files() {
        let fs = MemoryFilesystem::new();
        let request =
            SubGeneratorRequest::new(SubGenerator::Jsc).with_option(keys::NAME, "@acme/foo");
        run(&GeneratorContext {
            fs: &fs,
            target: Path::new("/p"),
            request: &request,
        })
        .unwrap();

        assert!(fs.read_file("/p/apiproxy/resources/jsc/foo.js").is_some());
        let test = fs.read_file("/p/__tests__/jsc/foo.test.js").unwrap();
        assert!(test.contains("require('../../apiproxy/resources/jsc/foo');"));
    }
}
