//! Shopping cart commands.
//!
//! The cart view is auth-gated, mirroring the original route guard.

use clap::Subcommand;

use tienda_core::ProductId;
use tienda_storefront::catalog::CatalogApi;
use tienda_storefront::services::{AuthService, CartService};
use tienda_storefront::state::AppState;

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart contents and total
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,

        /// Number of units
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Overwrite the quantity of a cart line (0 removes it)
    SetQty {
        /// Product ID
        id: String,

        /// New quantity
        qty: u32,
    },
}

pub async fn run(state: &AppState, action: CartAction) -> tienda_storefront::Result<()> {
    let auth = AuthService::load(state.store());
    auth.require_authenticated()?;

    let mut cart = CartService::load(state.store());

    match action {
        CartAction::Show => show(&cart),
        CartAction::Add { id, qty } => {
            let product = state.catalog().fetch_product(&ProductId::new(id)).await?;
            cart.add_item(&product, qty)?;
            println!("{} x{} agregado al carrito.", product.name, qty);
            show(&cart);
        }
        CartAction::Remove { id } => {
            cart.remove_item(&ProductId::new(id))?;
            show(&cart);
        }
        CartAction::SetQty { id, qty } => {
            cart.set_quantity(&ProductId::new(id), qty)?;
            show(&cart);
        }
    }
    Ok(())
}

fn show(cart: &CartService) {
    if cart.is_empty() {
        println!("Tu carrito está vacío.");
        return;
    }
    for line in cart.items() {
        println!(
            "#{:<6} {:<40} {} x ${} = ${}",
            line.product_id,
            line.name,
            line.quantity,
            line.price,
            line.total()
        );
    }
    println!("Total ({} artículos): ${}", cart.item_count(), cart.total());
}
