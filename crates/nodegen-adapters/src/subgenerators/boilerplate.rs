use nodegen_core::{domain::RenderContext, error::NodegenResult};

use super::GeneratorContext;

const INDEX_JS: &str = "\
'use strict';

module.exports = (input, options = {}) => {
  if (typeof input !== 'string') {
    throw new TypeError(`Expected a string, got ${typeof input}`);
  }

  return `${input} & ${options.postfix || 'rainbows'}`;
};
";

const INDEX_TEST_JS: &str = "\
const {{PROJECT_NAME_CAMEL}} = require('../lib/index.js');

describe('{{PROJECT_NAME}}', () => {
  it('has a test', () => {
    expect({{PROJECT_NAME_CAMEL}}('unicorns')).toBe('unicorns & rainbows');
  });
});
";

pub(super) fn run(ctx: &GeneratorContext<'_>) -> NodegenResult<()> {
    let render = RenderContext::new(ctx.project_name());
    ctx.write_if_absent("lib/index.js", &render.render(INDEX_JS))?;
    ctx.write_if_absent("__tests__/index.test.js", &render.render(INDEX_TEST_JS))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use nodegen_core::domain::{SubGenerator, SubGeneratorRequest, plan::keys};

    use super::*;
    use crate::filesystem::MemoryFilesystem;

    #[test]
    fn writes_index_and_test_once() {
        let fs = MemoryFilesystem::new().with_file("/p/lib/index.js", "module.exports = 42;\n");
        let request =
            SubGeneratorRequest::new(SubGenerator::Boilerplate).with_option(keys::NAME, "foo-lib");
        run(&GeneratorContext {
            fs: &fs,
            target: Path::new("/p"),
            request: &request,
        })
        .unwrap();

        assert_eq!(fs.read_file("/p/lib/index.js").as_deref(), Some("module.exports = 42;\n"));
        let test = fs.read_file("/p/__tests__/index.test.js").unwrap();
        assert!(test.contains("const fooLib = require('../lib/index.js');"));
    }
}
