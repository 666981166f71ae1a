//! Client library for the Weather Underground API.
//!
//! This crate defines:
//! - Location queries (`Query`) for the eight lookup modes
//! - An HTTP client (`WugClient`) returning raw bodies or typed records
//! - Response records for conditions, forecasts and hourly forecasts
//! - Configuration & credentials handling for front ends
//!
//! It is used by `wug-cli`, but can also be reused by other binaries or services.
//!
//! ```no_run
//! # async fn run() -> Result<(), wug_core::WugError> {
//! use wug_core::{Query, WugClient};
//!
//! let client = WugClient::new().expect("HTTP client");
//! let query = Query::by_us_state_city("API_KEY", "ca", "san francisco");
//! let conditions = client.get_conditions(&query).await?;
//! println!("{}", conditions.current_observation.weather);
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod transport;

pub use category::RequestCategory;
pub use client::{DEFAULT_BASE_URL, WugClient};
pub use config::Config;
pub use error::{TransportError, UnknownCategory, WugError};
pub use model::{Conditions, Forecast, ForecastTenDay, Hourly, HourlyTenDay};
pub use query::{Query, QueryMode};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
