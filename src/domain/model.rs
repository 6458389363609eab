use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive, Validate};
use serde::{Deserialize, Serialize};

/// Input for the macro calculation endpoint. Field names follow the
/// backend's camelCase wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
}

impl Validate for MacroRequest {
    fn validate(&self) -> Result<()> {
        validate_positive("weight", self.weight)?;
        validate_positive("height", self.height)?;
        validate_positive("age", f64::from(self.age))?;
        validate_non_empty_string("gender", &self.gender)?;
        validate_non_empty_string("activityLevel", &self.activity_level)?;
        validate_non_empty_string("goal", &self.goal)?;
        Ok(())
    }
}

/// Raw values read from the BMI calculator form. `None` models an empty
/// input field.
#[derive(Debug, Clone, Default)]
pub struct BmiInput {
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BmiRequest {
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
}

/// Raw values read from the calorie calculator form.
#[derive(Debug, Clone, Default)]
pub struct CaloriesInput {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub activity: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaloriesRequest {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub activity: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaloriesResponse {
    pub calories: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
