use crate::core::DashError;

/// Check the response status and read the body as text.
///
/// Non-2xx statuses become [`DashError::Status`] so callers never have to
/// inspect a body they are not going to get valid data from.
pub(crate) async fn ok_text(resp: reqwest::Response) -> Result<String, DashError> {
    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
