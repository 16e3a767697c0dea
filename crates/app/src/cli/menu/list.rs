use clap::Args;
use railmeal_app::{
    database::{self, Db},
    domain::menu::{MenuService, PgMenuService},
};

#[derive(Debug, Args)]
pub(crate) struct ListMenuArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListMenuArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let entries = PgMenuService::new(Db::new(pool))
        .list_menu()
        .await
        .map_err(|error| format!("failed to list menu: {error}"))?;

    if entries.is_empty() {
        println!("menu is empty");
        return Ok(());
    }

    for entry in entries {
        println!("{}\t{}\t{}", entry.id, entry.name, entry.unit_price);
    }

    Ok(())
}
