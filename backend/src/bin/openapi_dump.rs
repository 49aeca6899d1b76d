//! Print the OpenAPI document as JSON.

use backend::doc::ApiDoc;
use utoipa::OpenApi;

#[expect(
    clippy::print_stdout,
    reason = "the document is this binary's only output"
)]
fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
