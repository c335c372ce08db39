pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::{ActionType, Category, Phase, names};
}

pub mod model {
    pub mod action_registry;
    pub use action_registry::{ActionRegistry, RegistryEntry};
}

pub mod logging;
pub use logging::LoggerBuilder;

pub use error::AppError;

pub use controller::actions::{ActionType, Category, Phase, names};

pub use model::action_registry::ActionRegistry;
