use clap::{Parser, Subcommand};
use silk_storefront::commands::*;
use silk_storefront::core::{
    command_init::StoreContext, error::Result, filter::SortKey, output::print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "silk-storefront")]
#[command(about = "Browse the silk saree catalog, manage your bag and run the back-office")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with numbers for add/show
    Products {
        /// Category name or slug (e.g. "kanchipuram-silk")
        #[arg(long)]
        category: Option<String>,
        /// Collection name or slug (e.g. "bridal-heritage")
        #[arg(long)]
        collection: Option<String>,
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// URL-style filters, e.g. "category=Mysore+Silk&sort=price-asc"
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one product by listing number or id
    Show { product: String },
    /// New arrivals, best sellers and featured pieces
    Home,
    /// Add products to the bag (e.g. "1 3-5,8" or "sg-003")
    Add { products: Vec<String> },
    /// Show, open, close or clear the bag
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Set a bag line's quantity; 0 or less removes it
    Qty {
        /// Bag line number or product id
        line: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Increase a bag line by one
    Inc { line: String },
    /// Decrease a bag line by one, never below one
    Dec { line: String },
    /// Remove a bag line
    Remove { line: String },
    /// Place an order for the bag
    Checkout,
    /// Create an account and sign in
    Signup {
        email: String,
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign in
    Login { email: String, password: String },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Show or update your profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Manage saved addresses
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },
    /// Your order history
    Orders,
    /// Back-office (admin accounts only)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

fn run(ctx: &mut StoreContext, command: Commands) -> Result<()> {
    match command {
        Commands::Products {
            category,
            collection,
            sort,
            query,
        } => execute_products(
            ctx,
            ProductsArgs {
                category,
                collection,
                sort,
                query,
            },
        ),
        Commands::Show { product } => execute_show(ctx, &product),
        Commands::Home => execute_home(ctx),
        Commands::Add { products } => execute_add(ctx, products),
        Commands::Cart { action } => execute_cart(ctx, action),
        Commands::Qty { line, quantity } => execute_qty(ctx, &line, &quantity),
        Commands::Inc { line } => execute_inc(ctx, &line),
        Commands::Dec { line } => execute_dec(ctx, &line),
        Commands::Remove { line } => execute_remove(ctx, &line),
        Commands::Checkout => execute_checkout(ctx),
        Commands::Signup {
            email,
            password,
            name,
        } => execute_signup(ctx, &email, &password, name.as_deref()),
        Commands::Login { email, password } => execute_login(ctx, &email, &password),
        Commands::Logout => execute_logout(ctx),
        Commands::Whoami => execute_whoami(ctx),
        Commands::Profile { name, phone } => {
            execute_profile(ctx, name.as_deref(), phone.as_deref())
        }
        Commands::Address { action } => execute_address(ctx, action),
        Commands::Orders => execute_orders(ctx),
        Commands::Admin { action } => execute_admin(ctx, action),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = StoreContext::initialize().and_then(|mut ctx| run(&mut ctx, cli.command));
    if let Err(e) = result {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
