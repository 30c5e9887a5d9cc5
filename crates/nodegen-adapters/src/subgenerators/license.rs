//! LICENSE file and the manifest's `license` field.

use chrono::Datelike;
use serde_json::Value;

use nodegen_core::{
    domain::{DEFAULT_LICENSE, plan::keys},
    error::NodegenResult,
};

use super::GeneratorContext;
use crate::json_extend::insert_if_absent;

const MIT: &str = "\
The MIT License (MIT)

Copyright (c) {year} {holder}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.
";

const ISC: &str = "\
ISC License

Copyright (c) {year} {holder}

Permission to use, copy, modify, and/or distribute this software for any
purpose with or without fee is hereby granted, provided that the above
copyright notice and this permission notice appear in all copies.

THE SOFTWARE IS PROVIDED \"AS IS\" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
";

const APACHE_2: &str = "\
Copyright {year} {holder}

Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
";

const OTHER: &str = "\
Copyright (c) {year} {holder}

Licensed under the {license} license.
See https://spdx.org/licenses/{license}.html for the full text.
";

pub(super) fn run(ctx: &GeneratorContext<'_>) -> NodegenResult<()> {
    let license = ctx.request.option(keys::LICENSE).unwrap_or(DEFAULT_LICENSE);
    let year = chrono::Local::now().year();
    ctx.write_if_absent("LICENSE", &license_text(license, year, &holder(ctx)))?;

    ctx.update_manifest(|manifest| {
        insert_if_absent(manifest, "license", Value::String(license.to_string()));
    })
}

/// `Name <email> (url)` with whichever parts are known.
fn holder(ctx: &GeneratorContext<'_>) -> String {
    let request = ctx.request;
    let mut holder = request
        .option(keys::AUTHOR_NAME)
        .unwrap_or(ctx.project_name())
        .to_string();
    if let Some(email) = request.option(keys::AUTHOR_EMAIL) {
        holder.push_str(&format!(" <{email}>"));
    }
    if let Some(url) = request.option(keys::AUTHOR_URL) {
        holder.push_str(&format!(" ({url})"));
    }
    holder
}

fn license_text(license: &str, year: i32, holder: &str) -> String {
    let template = match license.to_ascii_uppercase().as_str() {
        "MIT" => MIT,
        "ISC" => ISC,
        "APACHE-2.0" => APACHE_2,
        _ => OTHER,
    };
    template
        .replace("{year}", &year.to_string())
        .replace("{holder}", holder)
        .replace("{license}", license)
}
