mod client;
mod endpoint;
pub mod parser;
mod transport;

pub use client::AnalysisClient;
pub use endpoint::{CookEndpoint, Endpoint, NutritionEndpoint};
pub use transport::{RawResponse, ReqwestTransport, Transport};
