//! Multipart POST of markup bytes to the validator endpoint.

use anyhow::{Context, Result};
use std::time::Duration;

/// POSTs `bytes` to `endpoint` as a multipart form and returns the raw
/// response body.
///
/// Form layout matches what the Nu validator expects: a `file` part carrying
/// the markup (declared `text/html`, named after the target), plus `out=json`
/// and `showsource=yes` fields.
pub(crate) fn submit(
    endpoint: &str,
    upload_name: &str,
    bytes: &[u8],
    insecure_tls: bool,
) -> Result<Vec<u8>> {
    let mut form = curl::easy::Form::new();
    form.part("file")
        .buffer(upload_name, bytes.to_vec())
        .content_type("text/html")
        .add()
        .map_err(|e| anyhow::anyhow!("multipart form: {}", e))?;
    form.part("out")
        .contents(b"json")
        .add()
        .map_err(|e| anyhow::anyhow!("multipart form: {}", e))?;
    form.part("showsource")
        .contents(b"yes")
        .add()
        .map_err(|e| anyhow::anyhow!("multipart form: {}", e))?;

    let mut easy = curl::easy::Easy::new();
    easy.url(endpoint).context("invalid validator endpoint")?;
    easy.httppost(form)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(120))?;
    if insecure_tls {
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("POST request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("POST {} returned HTTP {}", endpoint, code);
    }

    Ok(body)
}
