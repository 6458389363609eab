pub mod gateway;

pub use crate::domain::model::{BmiInput, CaloriesInput, ContactMessage, MacroRequest};
pub use crate::domain::ports::Presenter;
pub use crate::utils::error::Result;
pub use gateway::{ApiGateway, Service};
