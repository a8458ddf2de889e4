//! Server command implementation

use std::path::Path;

use anyhow::Result;
use balanza_server::ServerConfig;

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16, no_auth: bool) -> Result<()> {
    println!("🚀 Starting Balanza web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else {
        println!(
            "   🔒 Authentication: bearer tokens ({} must be set)",
            balanza_server::JWT_SECRET_ENV
        );
    }

    let db = open_db(db_path)?;
    let config = ServerConfig::from_env(!no_auth)?;

    balanza_server::serve_with_config(db, host, port, config).await
}
