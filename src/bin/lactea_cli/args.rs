//! Command-line surface for `lactea-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use lactea::config::Overrides;
use lactea::domain::types::{ProductCategory, TicketKind, TicketStatus, Warehouse};

#[derive(Parser, Debug)]
#[command(name = "lactea-cli", version, about = "Lácteos storefront data and admin CLI", long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "LACTEA_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Remote data-service base URL, e.g. <https://example.supabase.co>
    #[arg(long, env = "LACTEA_SITE_URL")]
    pub site: Option<String>,

    /// Publishable API key, read from the environment; the flag is hidden
    /// so the key does not end up in shell history
    #[arg(long = "api-key", hide = true, env = "LACTEA_API_KEY")]
    pub api_key: Option<String>,

    /// Override the session record path.
    #[arg(long = "session-file", value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Override the product fallback-cache path.
    #[arg(long = "product-cache-file", value_name = "PATH")]
    pub product_cache_file: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSON logs instead of the compact format.
    #[arg(long = "log-json", action = clap::ArgAction::SetTrue)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.site.clone(),
            api_key: self.api_key.clone(),
            session_file: self.session_file.clone(),
            product_cache_file: self.product_cache_file.clone(),
            log_level: self.log_level.clone(),
            log_json: self.log_json.then_some(true),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open an admin session
    Login {
        #[arg(long)]
        email: String,
        /// Password from env when omitted on the command line
        #[arg(long, env = "LACTEA_ADMIN_PASSWORD")]
        password: String,
    },
    /// Close and clear the persisted session
    Logout,
    /// Show the restored session, if any
    Whoami,
    /// Product catalog (list and stats are public, writes need a session)
    Products(ProductsArgs),
    /// PQRS ticket board (admin)
    Tickets(TicketsArgs),
    /// Inventory board (admin)
    Inventory(InventoryArgs),
    /// Visitor feedback submission, gated by the verification code
    Feedback(FeedbackArgs),
}

#[derive(Parser, Debug)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub action: ProductsCmd,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCmd {
    /// List active products, newest first
    List {
        #[arg(long)]
        categoria: Option<CategoryArg>,
        #[arg(long)]
        disponible: Option<bool>,
        #[arg(long)]
        destacado: Option<bool>,
        /// Case-insensitive substring over name and description
        #[arg(long)]
        busqueda: Option<String>,
    },
    /// Create a product
    Add {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: String,
        /// Whole COP
        #[arg(long)]
        precio: i64,
        #[arg(long)]
        categoria: CategoryArg,
        #[arg(long)]
        imagen_url: Option<String>,
        #[arg(long)]
        badge: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue)]
        destacado: bool,
    },
    /// Merge-patch a product by id
    Update {
        id: i64,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        descripcion: Option<String>,
        #[arg(long)]
        precio: Option<i64>,
        #[arg(long)]
        categoria: Option<CategoryArg>,
        #[arg(long)]
        imagen_url: Option<String>,
        #[arg(long)]
        badge: Option<String>,
        #[arg(long)]
        disponible: Option<bool>,
        #[arg(long)]
        destacado: Option<bool>,
    },
    /// Soft-delete a product (stays queryable by id, drops out of lists)
    Remove { id: i64 },
    /// Catalog stats
    Stats,
}

#[derive(Parser, Debug)]
pub struct TicketsArgs {
    #[command(subcommand)]
    pub action: TicketsCmd,
}

#[derive(Subcommand, Debug)]
pub enum TicketsCmd {
    /// List all tickets, newest first
    List,
    /// Change a ticket's workflow status, optionally attaching a response
    SetStatus {
        id: Uuid,
        estado: StatusArg,
        #[arg(long)]
        respuesta: Option<String>,
    },
    /// Ticket counts by status
    Stats,
}

#[derive(Parser, Debug)]
pub struct InventoryArgs {
    #[command(subcommand)]
    pub action: InventoryCmd,
}

#[derive(Subcommand, Debug)]
pub enum InventoryCmd {
    /// List inventory records (rides the resilience ladder, never fails)
    List,
    /// Merge-patch the record(s) for a product id
    UpdateStock {
        producto_id: i64,
        #[arg(long)]
        cantidad_disponible: Option<u32>,
        #[arg(long)]
        cantidad_minima: Option<u32>,
        #[arg(long)]
        precio_referencia: Option<i64>,
        #[arg(long)]
        ubicacion: Option<WarehouseArg>,
    },
    /// Hard-delete the record(s) for a product id
    Remove { producto_id: i64 },
    /// Inventory stats
    Stats,
}

#[derive(Parser, Debug)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub action: FeedbackCmd,
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCmd {
    /// Submit a ticket after transcribing the verification code
    Submit {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        correo: String,
        #[arg(long)]
        telefono: Option<String>,
        #[arg(long)]
        tipo: KindArg,
        #[arg(long)]
        descripcion: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Queso,
    Yogurt,
    Postres,
    Otros,
}

impl From<CategoryArg> for ProductCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Queso => ProductCategory::Queso,
            CategoryArg::Yogurt => ProductCategory::Yogurt,
            CategoryArg::Postres => ProductCategory::Postres,
            CategoryArg::Otros => ProductCategory::Otros,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pendiente,
    EnProceso,
    Resuelto,
}

impl From<StatusArg> for TicketStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pendiente => TicketStatus::Pendiente,
            StatusArg::EnProceso => TicketStatus::EnProceso,
            StatusArg::Resuelto => TicketStatus::Resuelto,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Peticion,
    Queja,
    Reclamo,
    Sugerencia,
}

impl From<KindArg> for TicketKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Peticion => TicketKind::Peticion,
            KindArg::Queja => TicketKind::Queja,
            KindArg::Reclamo => TicketKind::Reclamo,
            KindArg::Sugerencia => TicketKind::Sugerencia,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WarehouseArg {
    Pasto,
    LaFlorida,
}

impl From<WarehouseArg> for Warehouse {
    fn from(arg: WarehouseArg) -> Self {
        match arg {
            WarehouseArg::Pasto => Warehouse::Pasto,
            WarehouseArg::LaFlorida => Warehouse::LaFlorida,
        }
    }
}
