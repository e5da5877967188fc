use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use predict::{Answers, BackendStatus, ErrorBody, QUESTIONS, Question, QuestionKind, RiskModel, RiskPrediction, RiskReport, ScanArea, XrayReport};
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("answers file must contain a JSON object")]
    AnswersNotObject,
    #[error("answer `{0}` must be a string, number, or boolean")]
    UnsupportedAnswer(String),
    #[error("invalid answers: {0}")]
    InvalidAnswers(String),
}

#[derive(Parser, Debug)]
#[command(name = "aarogya-cli", about = "Aarogya AI prediction CLI")]
struct Cli {
    #[arg(long, env = "AAROGYA_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server and the prediction backend behind it.
    Ping,
    /// List the questionnaire fields.
    Questions {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Scan an X-ray image.
    Xray {
        #[arg(long)]
        area: ScanArea,
        file: PathBuf,
    },
    /// Score a questionnaire answers file (JSON object keyed by question id).
    Risk {
        answers: PathBuf,
        #[arg(long)]
        model: Option<RiskModel>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Questions { json } => run_questions(json),
        Command::Xray { area, file } => run_xray(&base_url, area, &file).await,
        Command::Risk { answers, model } => run_risk(&base_url, &answers, model).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");

    let backend: BackendStatus = expect_success(client.get(format!("{base_url}/api/backend/status")).send().await?).await?;
    let state = if backend.reachable { "reachable" } else { "unreachable" };
    println!("backend {state} at {}", backend.backend_url);
    Ok(())
}

fn run_questions(json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(QUESTIONS)?);
        return Ok(());
    }
    for question in QUESTIONS {
        println!("{}", describe_question(question));
    }
    Ok(())
}

async fn run_xray(base_url: &str, area: ScanArea, path: &Path) -> Result<(), CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("upload").to_owned();

    let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    if let Some(mime) = image_content_type(path) {
        part = part.mime_str(mime)?;
    }
    let form = reqwest::multipart::Form::new().part("file", part);

    let url = format!("{base_url}/api/predict/xray/{}", area.slug());
    let response = reqwest::Client::new().post(url).multipart(form).send().await?;
    let report: XrayReport = expect_success(response).await?;

    println!("Area: {}", report.area);
    println!("Assessment: {}", report.assessment.message());
    if let Some(label) = &report.label {
        println!("Finding: {label}");
    }
    println!("Confidence: {}", report.confidence.percent());
    Ok(())
}

async fn run_risk(base_url: &str, path: &Path, model: Option<RiskModel>) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    let answers = answers_from_json(&raw)?;
    let issues = answers.validate();
    if !issues.is_empty() {
        let joined = issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        return Err(CliError::InvalidAnswers(joined));
    }

    let client = reqwest::Client::new();
    match model {
        Some(model) => {
            let url = format!("{base_url}/api/predict/risk/{}", model.slug());
            let prediction: RiskPrediction = expect_success(client.post(url).json(&answers).send().await?).await?;
            println!("{}: {:.2}%", model.title(), prediction.risk_percentage);
        }
        None => {
            let url = format!("{base_url}/api/predict/risk");
            let report: RiskReport = expect_success(client.post(url).json(&answers).send().await?).await?;
            for (model, percentage) in report.entries() {
                println!("{}: {percentage:.2}%", model.title());
            }
        }
    }
    Ok(())
}

async fn expect_success<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError { status: status.as_u16(), message: server_message(&body) });
    }
    Ok(response.json::<T>().await?)
}

fn server_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_owned(), |parsed| parsed.error)
}

/// Build answers from a JSON object; numbers and booleans are stringified, nulls skipped.
fn answers_from_json(raw: &str) -> Result<Answers, CliError> {
    let Value::Object(map) = serde_json::from_str::<Value>(raw)? else {
        return Err(CliError::AnswersNotObject);
    };
    let mut answers = Answers::new();
    for (id, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(true) => "Yes".to_owned(),
            Value::Bool(false) => "No".to_owned(),
            Value::Array(_) | Value::Object(_) => return Err(CliError::UnsupportedAnswer(id)),
        };
        answers.set(id, value);
    }
    Ok(answers)
}

fn image_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn describe_question(question: &Question) -> String {
    let answer = match question.kind {
        QuestionKind::Select => question.options.join(" | "),
        QuestionKind::Number => "number".to_owned(),
    };
    let optional = if question.optional { " (optional)" } else { "" };
    format!("{:<30} {}{optional}\n{:<30} {answer}", question.id, question.label, "")
}
