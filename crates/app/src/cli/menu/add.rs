use clap::Args;
use railmeal::menu::MenuEntry;
use railmeal_app::{
    database::{self, Db},
    domain::menu::{MenuService, PgMenuService},
};
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct AddMenuEntryArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Catalogue identifier
    #[arg(long)]
    id: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. `120.50`
    #[arg(long)]
    price: Decimal,

    /// Image location
    #[arg(long, default_value = "")]
    image: String,
}

pub(crate) async fn run(args: AddMenuEntryArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgMenuService::new(Db::new(pool));

    let entry = service
        .add_entry(MenuEntry::new(args.id, args.name, args.price, args.image))
        .await
        .map_err(|error| format!("failed to add menu entry: {error}"))?;

    println!("id: {}", entry.id);
    println!("name: {}", entry.name);
    println!("unit_price: {}", entry.unit_price);

    Ok(())
}
