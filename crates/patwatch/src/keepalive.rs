use crate::prelude::*;
use chrono::Datelike;

use patwatch_core::keepalive::{KeepAlive, KeepAliveToken};

/// Token for the current local calendar month
pub fn current_token() -> KeepAliveToken {
    KeepAliveToken::for_month(chrono::Local::now().month())
}

pub async fn run(_global: crate::Global) -> Result<()> {
    let record = KeepAlive {
        gh_keepalive: current_token(),
    };
    log::debug!("Keep-alive token {}", record.gh_keepalive);
    print_json(&record)
}
