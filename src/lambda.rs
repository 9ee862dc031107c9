#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::Serialize;
#[cfg(feature = "lambda")]
use sheet_reminder::utils::logger;
#[cfg(feature = "lambda")]
use sheet_reminder::{run_once, ReminderConfig};

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub channel: String,
    pub tasks_notified: usize,
}

/// 排程事件的內容不會被使用
#[cfg(feature = "lambda")]
async fn function_handler(_event: LambdaEvent<serde_json::Value>) -> Result<Response, Error> {
    tracing::info!("Starting reminder Lambda function");

    let config = ReminderConfig::from_env()?;
    let today = chrono::Local::now().date_naive();

    let report = run_once(&config, today, false).await.map_err(|e| {
        tracing::error!(category = ?e.category(), "❌ Reminder failed: {}", e);
        e
    })?;

    tracing::info!("Reminder Lambda function completed successfully");
    Ok(Response {
        message: "Reminder posted".to_string(),
        channel: report.channel,
        tasks_notified: report.notified_tasks,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
