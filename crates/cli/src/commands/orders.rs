//! Checkout and order-history commands (auth-gated).

use tienda_storefront::services::{AuthService, CartService, CheckoutService};
use tienda_storefront::state::AppState;

pub fn checkout(state: &AppState) -> tienda_storefront::Result<()> {
    let auth = AuthService::load(state.store());
    auth.require_authenticated()?;

    let mut cart = CartService::load(state.store());
    let checkout = CheckoutService::new(state.store(), state.config().checkout_policy());

    let order = checkout.checkout(&mut cart)?;
    println!("¡Compra realizada con éxito!");
    println!("Orden #{} - total ${}", order.id, order.total);
    Ok(())
}

pub fn list(state: &AppState) -> tienda_storefront::Result<()> {
    let auth = AuthService::load(state.store());
    auth.require_authenticated()?;

    let checkout = CheckoutService::new(state.store(), state.config().checkout_policy());
    let orders = checkout.order_history();

    if orders.is_empty() {
        println!("Aún no has realizado ninguna compra.");
        return Ok(());
    }

    for order in orders {
        println!(
            "Orden #{} - {} - ${} - {}",
            order.id,
            order.date.format("%Y-%m-%d %H:%M"),
            order.total,
            order.status
        );
        for line in &order.items {
            println!("    {} x{} = ${}", line.name, line.quantity, line.total());
        }
    }
    Ok(())
}
