use std::sync::Arc;

use clap::{Args, Subcommand};
use railmeal_app::{
    database::{self, Db},
    domain::{
        lifecycle::{EmptyOrderPolicy, OrderLifecycle},
        orders::PgOrderRecordsService,
    },
};

mod cancel;
mod show;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    Show(show::ShowOrderArgs),
    Cancel(cancel::CancelOrderArgs),
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::Show(args) => show::run(args).await,
        OrderSubcommand::Cancel(args) => cancel::run(args).await,
    }
}

async fn lifecycle(database_url: &str) -> Result<OrderLifecycle, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(OrderLifecycle::new(
        Arc::new(PgOrderRecordsService::new(Db::new(pool))),
        EmptyOrderPolicy::default(),
    ))
}
