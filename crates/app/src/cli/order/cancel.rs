use clap::Args;
use railmeal_app::pnr::Pnr;

#[derive(Debug, Args)]
pub(crate) struct CancelOrderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Reservation code of a pending order
    #[arg(long)]
    pnr: Pnr,
}

pub(crate) async fn run(args: CancelOrderArgs) -> Result<(), String> {
    let pnr = args.pnr.clone();

    super::lifecycle(&args.database_url)
        .await?
        .cancel(args.pnr)
        .await
        .map_err(|error| format!("failed to cancel order: {error}"))?;

    println!("cancelled order {pnr}");

    Ok(())
}
