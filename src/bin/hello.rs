use mention_relay::api::hello::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    mention_relay::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
