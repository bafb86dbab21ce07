//! Kitchen Units
//!
//! An MCP server for recipe unit conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use kitchen_units::config::Config;
use kitchen_units::mcp::KitchenService;
use kitchen_units::service_info::ServiceInfo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kitchen_units=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!("Starting {} on stdio", ServiceInfo::new(&config).summary());

    let service = KitchenService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
