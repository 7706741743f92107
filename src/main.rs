use std::error::Error;

use amap_mcp::AmapService;
use amap_mcp::amap::AmapClient;
use amap_mcp::config::AmapConfig;
use amap_mcp::resolver::Resolver;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AmapConfig::from_env()?;
    let client = AmapClient::new(&config)?;
    let resolver = Resolver::new(client.clone());
    let service = AmapService::new(client, resolver);

    println!("start server, connect to standard input/output");

    let server = service.serve(stdio()).await?;
    let reason = server.waiting().await?;
    eprintln!("MCP server stopped: {:?}", reason);

    Ok(())
}
