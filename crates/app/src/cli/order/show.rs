use clap::Args;
use railmeal::lifecycle::available_actions;
use railmeal_app::pnr::Pnr;

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Reservation code
    #[arg(long)]
    pnr: Pnr,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let record = super::lifecycle(&args.database_url)
        .await?
        .fetch(args.pnr)
        .await
        .map_err(|error| format!("failed to fetch order: {error}"))?;

    println!("pnr: {}", record.pnr);
    println!("name: {}", record.name);
    println!("phone_number: {}", record.phone_number);
    println!("email: {}", record.contact_email().unwrap_or("none"));
    println!("berth: {} seat: {}", record.berth_number, record.seat_number);
    println!("station: {}", record.selected_station);
    println!("payment_method: {}", record.payment_method);

    let Some(summary) = &record.order_summary else {
        println!("status: not ordered yet");
        return Ok(());
    };

    println!("status: {}", summary.order_status);
    println!("order_date: {}", summary.order_date);

    for item in &summary.items {
        println!(
            "  {} x{} @ {} = {}",
            item.foodname, item.quantity, item.price, item.total_price
        );
    }

    println!("total_items: {}", summary.total_items);
    println!("total_amount: {}", summary.total_amount);

    let actions: Vec<String> = available_actions(record.status())
        .iter()
        .map(ToString::to_string)
        .collect();

    if !actions.is_empty() {
        println!("actions: {}", actions.join(", "));
    }

    Ok(())
}
