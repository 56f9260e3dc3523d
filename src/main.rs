mod config;

use config::Args;

use cota_rpc::rpc::{CotaRpc, CotaRpcImpl};

use anyhow::{anyhow, Result};
use clap::Parser;
use jsonrpc_core::IoHandler;
use jsonrpc_http_server::ServerBuilder;
use jsonrpc_server_utils::cors::AccessControlAllowOrigin;
use jsonrpc_server_utils::hosts::DomainsValidation;

use std::sync::mpsc::channel;

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        // should recognize RUST_LOG_STYLE environment variable
        env_logger::Builder::from_default_env()
            .filter(None, log::LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }

    start(Args::parse())
}

pub fn start(args: Args) -> Result<()> {
    let bind_addr = args.bind_addr();
    let mut io_handler = IoHandler::new();
    io_handler.extend_with(CotaRpcImpl::new().to_delegate());
    let server = ServerBuilder::new(io_handler)
        .threads(args.threads)
        .cors(DomainsValidation::AllowOnly(vec![
            AccessControlAllowOrigin::Null,
            AccessControlAllowOrigin::Any,
        ]))
        .health_api(("/ping", "ping"))
        .start_http(&bind_addr)
        .map_err(|err| anyhow!("start jsonrpc http server on {}: {}", bind_addr, err))?;
    log::info!("cota entries parser started: {}", bind_addr);

    let (tx, rx) = channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })?;
    log::info!("Waiting for Ctrl-C...");
    rx.recv()?;
    server.close();
    log::info!("Closing!");
    Ok(())
}
