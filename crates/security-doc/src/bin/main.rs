//! AMF security documentation CLI
//!
//! Prints the documentation view of security schemes found in an AMF model.
//! JSON goes to stdout; logs go to stderr so output can be piped.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use amf_security::{oauth2, AmfDocument, SecurityDocumentation, Term};
use security_doc::{render_summary, CliError, ModelSource, SchemeListing};

/// Render documentation for AMF security schemes
#[derive(Parser, Debug)]
#[command(name = "amf-security-doc")]
#[command(version)]
#[command(about = "Render documentation for security schemes of an AMF model")]
struct Args {
    /// Path or http(s) URL of the AMF model (JSON-LD, expanded or compact)
    #[arg(long, short, env = "AMF_SECURITY_MODEL")]
    model: String,

    /// Disable logging
    #[arg(long, short)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List declared security schemes
    List,
    /// Show the documentation of a declared security scheme
    Show {
        /// Scheme name
        name: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Show the security applied to an operation
    Operation {
        /// Endpoint path, e.g. /users/{id}
        path: String,
        /// HTTP method
        method: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Show one OAuth 2 flow of a declared scheme
    Flow {
        /// Scheme name
        name: String,
        /// Grant type, e.g. authorizationCode
        grant: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if !args.quiet {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            )
            .init();
    }

    let source = ModelSource::from_arg(&args.model);
    let document = source.load().await?;

    match args.command {
        Command::List => print_json(&SchemeListing::collect(&document))?,
        Command::Show { name, format } => {
            let view = document
                .documentation(&name)
                .ok_or_else(|| CliError::SchemeNotFound(name.clone()))?;
            print_view(&view, format)?;
        }
        Command::Operation {
            path,
            method,
            format,
        } => {
            let view = operation_view(&document, &path, &method).ok_or(
                CliError::OperationNotFound {
                    path: path.clone(),
                    method: method.clone(),
                },
            )?;
            print_view(&view, format)?;
        }
        Command::Flow { name, grant } => {
            let graph = document.accessor();
            let scheme = document
                .lookup_security(&name)
                .ok_or_else(|| CliError::SchemeNotFound(name.clone()))?;
            let flow = graph
                .sub_object(scheme, Term::Settings)
                .and_then(|settings| document.lookup_flow(settings, &grant))
                .ok_or(CliError::FlowNotFound {
                    scheme: name.clone(),
                    grant: grant.clone(),
                })?;
            print_json(&oauth2::project_flow(&graph, Some(flow)))?;
        }
    }

    info!("Done");
    Ok(())
}

fn operation_view(document: &AmfDocument, path: &str, method: &str) -> Option<SecurityDocumentation> {
    let requirements = document.lookup_operation_security(path, method)?;
    debug!("{} {} has {} security requirement(s)", method, path, requirements.len());
    let requirements = serde_json::Value::Array(requirements.into_iter().cloned().collect());
    SecurityDocumentation::project(&document.accessor(), &requirements)
}

fn print_view(view: &SecurityDocumentation, format: Format) -> Result<(), CliError> {
    match format {
        Format::Json => print_json(view),
        Format::Text => {
            print!("{}", render_summary(view));
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
