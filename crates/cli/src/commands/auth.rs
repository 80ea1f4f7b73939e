//! Session commands.

use clap::Subcommand;

use tienda_storefront::models::RegisterProfile;
use tienda_storefront::services::AuthService;
use tienda_storefront::state::AppState;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account (signed in immediately, role `user`)
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (min 6 characters)
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
}

pub fn run(state: &AppState, action: AuthAction) -> tienda_storefront::Result<()> {
    let mut auth = AuthService::load(state.store());

    match action {
        AuthAction::Login { email, password } => {
            let user = auth.login(&email, &password)?;
            println!("Hola, {} ({})", user.name, user.role);
        }
        AuthAction::Register {
            name,
            email,
            password,
        } => {
            let user = auth.register(RegisterProfile {
                name,
                email,
                password,
            })?;
            println!("Cuenta creada para {} ({})", user.name, user.email);
        }
        AuthAction::Logout => {
            auth.logout()?;
            println!("Sesión cerrada.");
        }
        AuthAction::Whoami => match auth.current_user() {
            Some(user) => println!("{} <{}> rol: {}", user.name, user.email, user.role),
            None => println!("No has iniciado sesión."),
        },
    }
    Ok(())
}
