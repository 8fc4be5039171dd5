pub mod cli;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod tui;
pub mod utils;
pub mod view;

pub use config::Config;
pub use models::Todo;
pub use storage::Storage;
pub use store::TodoStore;
pub use utils::Profile;
pub use view::Filter;
