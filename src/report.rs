use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::RestResult;
use crate::transport::RestResponse;

const INDENT: &[u8] = b"    ";

/// Classified result of one request.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// 200 with a JSON body.
    Success(Value),
    /// Any other status, with the body as raw text.
    HttpError { status: u16, body: String },
}

impl Outcome {
    /// Parse failures on a 200 are returned as errors rather than reported.
    pub fn from_response(response: RestResponse) -> RestResult<Self> {
        if response.is_ok() {
            Ok(Self::Success(response.json::<Value>()?))
        } else {
            Ok(Self::HttpError {
                status: response.status(),
                body: response.text(),
            })
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Four-space indented JSON with non-ASCII left as-is. Numbers keep their
/// source text and objects keep first-seen key order; a repeated key takes
/// the last value.
pub fn pretty_json(value: &Value) -> RestResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render<W: Write>(outcome: &Outcome, out: &mut W) -> RestResult<()> {
    match outcome {
        Outcome::Success(value) => {
            let body = pretty_json(value)?;
            writeln!(out, "Response:")?;
            writeln!(out, "{body}")?;
        }
        Outcome::HttpError { status, body } => {
            writeln!(out, "Error: {status}")?;
            writeln!(out, "Response: {body}")?;
        }
    }
    out.flush()?;
    Ok(())
}
