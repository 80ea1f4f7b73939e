//! Catalog browsing commands.

use clap::Subcommand;

use tienda_core::ProductId;
use tienda_storefront::catalog::CatalogApi;
use tienda_storefront::models::Product;
use tienda_storefront::services::ProductWorkflow;
use tienda_storefront::state::AppState;

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List all products, optionally filtered by category
    List {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product by ID
    Show {
        /// Product ID
        id: String,
    },
    /// List the distinct category labels
    Categories,
}

pub async fn run(state: &AppState, action: ProductsAction) -> tienda_storefront::Result<()> {
    match action {
        ProductsAction::List { category } => list(state, category.as_deref()).await,
        ProductsAction::Show { id } => show(state, &ProductId::new(id)).await,
        ProductsAction::Categories => categories(state).await,
    }
}

async fn list(state: &AppState, category: Option<&str>) -> tienda_storefront::Result<()> {
    let products = match category {
        Some(category) => state.catalog().fetch_products_by_category(category).await?,
        None => {
            let mut workflow = ProductWorkflow::new(state.catalog().clone());
            workflow.refresh().await?;
            workflow.products().to_vec()
        }
    };

    if products.is_empty() {
        println!("No hay productos.");
        return Ok(());
    }
    for product in &products {
        print_line(product);
    }
    Ok(())
}

async fn show(state: &AppState, id: &ProductId) -> tienda_storefront::Result<()> {
    let product = state.catalog().fetch_product(id).await?;
    println!("#{}  {}", product.id, product.name);
    println!("  precio:    ${}", product.price);
    println!("  categoría: {}", product.category);
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
    if let Some(rating) = &product.rating {
        println!("  rating: {} ({} reseñas)", rating.rate, rating.count);
    }
    Ok(())
}

async fn categories(state: &AppState) -> tienda_storefront::Result<()> {
    let categories = state.catalog().fetch_categories().await?;
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

pub(crate) fn print_line(product: &Product) {
    println!(
        "#{:<6} {:<40} ${:>8}  [{}]",
        product.id, product.name, product.price, product.category
    );
}
