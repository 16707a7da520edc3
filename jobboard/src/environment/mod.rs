use jobboard_di::provider;
use types::Database;

pub mod types;

provider! {
    /// The default provider, capable of providing every feature service
    pub Provider {
        database: Database,
    }
}
