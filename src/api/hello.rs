//! Hello world Lambda handler, used as a liveness endpoint.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::application::HelloWorldUseCase;
use crate::core::models::ApiResponse;

pub use self::function_handler as handler;

#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    info!("Hello world lambda invoked");
    Ok(HelloWorldUseCase.execute())
}
