use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::prelude::*;

/// Generic API response envelope.
#[serde_as]
#[derive(Deserialize)]
pub struct Response<R> {
    /// Zero on success. The portal sends it either as a number or as a numeric string.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "Status")]
    status: i64,

    /// Error message when the status is non-zero.
    #[serde(rename = "Result")]
    result: Option<serde_json::Value>,

    #[serde(rename = "Data")]
    data: Option<R>,
}

impl<R> From<Response<R>> for Result<R> {
    fn from(response: Response<R>) -> Self {
        match (response.status, response.data) {
            (0, Some(data)) => Ok(data),
            (0, None) => bail!("Envertech response contains no data"),
            (status, _) => match response.result {
                Some(serde_json::Value::String(message)) => {
                    bail!(r#"Envertech error {status} ("{message}")"#)
                }
                Some(result) if !result.is_null() => bail!("Envertech error {status} ({result})"),
                _ => bail!("Envertech error {status}"),
            },
        }
    }
}
