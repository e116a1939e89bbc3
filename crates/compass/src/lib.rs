mod client;
pub mod error;
pub mod wizard;

pub use client::base::ApiUrl;
pub use client::base::AssessClient;
pub use client::base::BaseClient;
pub use client::base::Config;
pub use client::base::PublicClient;
pub use client::simple::SimpleClient;
