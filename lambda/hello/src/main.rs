mod requests;

use crate::requests::GreetingResponse;

use aws_lambda_res::response::{not_found, ok};

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

fn json_headers() -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

#[instrument(name = "lambda.hello.greeting_handler", skip(event))]
async fn greeting_handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let name = event
        .payload
        .query_string_parameters
        .first("name")
        .unwrap_or("world")
        .to_string();

    let greeting = GreetingResponse {
        message: format!("hello, {}", name),
    };
    let res = ok().with(Some(&greeting), Some(json_headers()))?;
    Ok(ApiGatewayProxyResponse::try_from(res)?)
}

#[instrument(name = "lambda.hello.handler", skip(event))]
async fn handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    debug!("handling lambda req: {:?}", event.context.request_id);
    let resource = event.payload.resource.clone().unwrap_or_default();
    match resource.as_str() {
        "/hello" => greeting_handler(event).await,
        _ => {
            info!("Path not handled: {}", resource);
            let res = not_found().with(Some(&"Not Found"), None)?;
            Ok(ApiGatewayProxyResponse::try_from(res)?)
        }
    }
}

// Custom allocator configuration
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    info!("Starting hello function");
    lambda_runtime::run(service_fn(handler)).await
}
