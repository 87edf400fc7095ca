//! AWS Lambda handler exposing the growth calculator over HTTP
//!
//! POST a JSON body with any of contribution/years/frequency/annual_rate
//! (missing fields fall back to the standard plan) and receive the summary,
//! final value, and trajectory as JSON

use auto_invest::growth::{GrowthCalculator, GrowthConfig};
use auto_invest::plan::PlanParams;
use auto_invest::report::InvestmentSummary;
use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct ComputeRequest {
    #[serde(flatten)]
    params: PlanParams,

    /// Record the trajectory for annual plans too
    #[serde(default)]
    annual_trajectory: bool,
}

#[derive(Debug, Serialize)]
struct ComputeResponse {
    summary: InvestmentSummary,
    final_value: f64,
    trajectory: Vec<f64>,
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    if event.method() != Method::POST {
        return json_response(405, &serde_json::json!({ "error": "POST required" }));
    }

    let request: ComputeRequest = match serde_json::from_slice(event.body().as_ref()) {
        Ok(request) => request,
        Err(e) => {
            return json_response(400, &serde_json::json!({ "error": e.to_string() }));
        }
    };

    let plan = match request.params.build() {
        Ok(plan) => plan,
        Err(e) => {
            return json_response(400, &serde_json::json!({ "error": e.to_string() }));
        }
    };

    let config = GrowthConfig {
        record_annual_trajectory: request.annual_trajectory,
    };
    let result = GrowthCalculator::new(config).compute(&plan)?;

    json_response(
        200,
        &ComputeResponse {
            summary: InvestmentSummary::new(&plan, &result),
            final_value: result.final_value,
            trajectory: result.trajectory,
        },
    )
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body)?))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    run(service_fn(handler)).await
}
