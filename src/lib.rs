pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::forms::{bmi_category, CalculatorForms};
pub use config::ClientConfig;
pub use core::{ApiGateway, Service};
pub use domain::model::{
    BmiInput, BmiRequest, BmiResponse, CaloriesInput, CaloriesRequest, CaloriesResponse,
    ContactMessage, MacroRequest,
};
pub use domain::ports::Presenter;
pub use utils::error::{ClientError, Result};
