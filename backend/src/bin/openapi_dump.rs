//! Print the OpenAPI document as JSON.

use utoipa::OpenApi;
use videogame_api::ApiDoc;

#[expect(clippy::print_stdout, reason = "the document is this tool's output")]
fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
