//! Command line interface
//!
//! Commands return their output lines so they can be tested without a
//! terminal; `main` prints them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solid_application::registry::list_strategies;
use solid_application::use_cases::{ButtonPanel, Cage, InvoiceService, PaymentService};
use solid_domain::ports::RemoteApiCapability;
use solid_domain::{Invoice, Product};
use solid_infrastructure::AppContext;

/// Command line interface for the SOLID capability playground
#[derive(Parser, Debug)]
#[command(name = "solid")]
#[command(about = "Compose objects from swappable strategies")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the strategy catalogue
    Strategies,
    /// Show which strategy each capability resolves to
    Capabilities,
    /// Build a cage and feed the animals
    Cage,
    /// Print and save an invoice
    Invoice {
        /// Product prices
        #[arg(long = "price", default_values_t = [99.0, 9.0, 999.0])]
        prices: Vec<f64>,
        /// Discount in percent
        #[arg(long, default_value_t = 20.0)]
        discount: f64,
    },
    /// Make a payment
    Pay {
        #[arg(long, default_value_t = 200.0)]
        amount: f64,
    },
    /// Press the panel buttons
    Buttons,
    /// Call the remote API
    Fetch,
}

/// Run a command against an initialized application
pub async fn run_command(context: &AppContext, command: &Command) -> anyhow::Result<Vec<String>> {
    let composer = &context.composer;
    let lines = match command {
        Command::Strategies => list_strategies()
            .into_iter()
            .map(|(capability, name, description)| {
                format!("{capability:<20} {name:<18} {description}")
            })
            .collect(),
        Command::Capabilities => context
            .registry
            .capabilities()
            .into_iter()
            .map(|descriptor| {
                let selected = context
                    .registry
                    .default_implementation(descriptor.name)
                    .unwrap_or_default();
                format!("{descriptor} -> {selected}")
            })
            .collect(),
        Command::Cage => {
            let cage: Cage = composer.compose_default()?;
            let mut lines = vec![cage.describe()];
            lines.extend(cage.feed());
            lines
        }
        Command::Invoice { prices, discount } => {
            let service: InvoiceService = composer.compose_default()?;
            let products = prices.iter().copied().map(Product::new).collect();
            let invoice = Invoice::new(products, *discount);
            let mut lines: Vec<String> =
                service.print(&invoice).lines().map(str::to_string).collect();
            lines.push(format!("saved to {}", service.save(&invoice)?));
            lines
        }
        Command::Pay { amount } => {
            let service: PaymentService = composer.compose_default()?;
            let receipt = service.make_payment(*amount)?;
            vec![serde_json::to_string(&receipt)?]
        }
        Command::Buttons => {
            let panel: ButtonPanel = composer.compose_default()?;
            vec![panel.tap(), panel.double_tap()]
        }
        Command::Fetch => {
            let api = context.registry.resolve::<RemoteApiCapability>()?;
            vec![api.fetch().await?]
        }
    };
    Ok(lines)
}
