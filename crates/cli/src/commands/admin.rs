//! Catalog administration commands (admin role required).

use clap::Subcommand;
use rust_decimal::Decimal;

use tienda_core::{ProductId, Role};
use tienda_storefront::models::ProductInput;
use tienda_storefront::services::{AuthService, ProductWorkflow};
use tienda_storefront::state::AppState;

use super::products::print_line;

#[derive(Subcommand)]
pub enum AdminAction {
    /// Create a product
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Category label
        #[arg(long, default_value = "general")]
        category: String,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Update a product
    Update {
        /// Product ID
        id: String,

        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Category label
        #[arg(long, default_value = "general")]
        category: String,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
}

pub async fn run(state: &AppState, action: AdminAction) -> tienda_storefront::Result<()> {
    let auth = AuthService::load(state.store());
    auth.require_role(Role::Admin)?;

    let mut workflow = ProductWorkflow::new(state.catalog().clone());

    match action {
        AdminAction::Add {
            name,
            price,
            description,
            category,
            image,
        } => {
            let created = workflow
                .add_product(ProductInput {
                    name,
                    price,
                    description,
                    category,
                    image,
                })
                .await?;
            println!("Producto creado:");
            print_line(&created);
        }
        AdminAction::Update {
            id,
            name,
            price,
            description,
            category,
            image,
        } => {
            let updated = workflow
                .update_product(
                    &ProductId::new(id),
                    ProductInput {
                        name,
                        price,
                        description,
                        category,
                        image,
                    },
                )
                .await?;
            println!("Producto actualizado:");
            print_line(&updated);
        }
        AdminAction::Delete { id } => {
            let id = ProductId::new(id);
            workflow.delete_product(&id).await?;
            println!("Producto #{id} eliminado.");
        }
    }
    Ok(())
}
