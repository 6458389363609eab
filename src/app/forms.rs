use crate::core::{ApiGateway, Presenter};
use crate::domain::model::{
    BmiInput, BmiRequest, CaloriesInput, CaloriesRequest, ContactMessage,
};
use crate::utils::error::{ClientError, Result};

pub const FILL_FIELDS_MESSAGE: &str = "Please fill in all fields with positive values.";
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// BMI category banding. Boundary values sit in the upper band, so a
/// BMI of exactly 25.0 reads as Overweight.
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal Weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

/// Form submission flows for the calculator and contact pages.
///
/// Each flow validates its inputs before any network call, flips the
/// busy indicator around the call, and renders either a human-readable
/// result or a generic retry message. The page itself sits behind the
/// [`Presenter`] port.
pub struct CalculatorForms<P: Presenter> {
    gateway: ApiGateway,
    presenter: P,
}

impl<P: Presenter> CalculatorForms<P> {
    pub fn new(gateway: ApiGateway, presenter: P) -> Self {
        Self { gateway, presenter }
    }

    fn reject_input(&self) -> ClientError {
        self.presenter.render_error(FILL_FIELDS_MESSAGE);
        ClientError::Validation {
            message: FILL_FIELDS_MESSAGE.to_string(),
        }
    }

    /// Submit the BMI form. Weight and height must both be present and
    /// strictly positive or the request is never issued.
    pub async fn submit_bmi(&self, input: &BmiInput) -> Result<()> {
        let request = match (input.weight, input.height) {
            (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
                BmiRequest { weight, height }
            }
            _ => return Err(self.reject_input()),
        };

        self.presenter.set_busy(true);
        let result = self.gateway.calculate_bmi(&request).await;
        self.presenter.set_busy(false);

        match result {
            Ok(response) => {
                self.presenter.render_result(&format!(
                    "Your BMI is {:.1} ({})",
                    response.bmi,
                    bmi_category(response.bmi)
                ));
                Ok(())
            }
            Err(e) => {
                self.presenter.render_error(RETRY_MESSAGE);
                Err(e)
            }
        }
    }

    /// Submit the calorie calculator form.
    pub async fn submit_calories(&self, input: &CaloriesInput) -> Result<()> {
        let request = match (input.weight, input.height, input.age, input.activity.as_deref()) {
            (Some(weight), Some(height), Some(age), Some(activity))
                if weight > 0.0 && height > 0.0 && age > 0 && !activity.trim().is_empty() =>
            {
                CaloriesRequest {
                    weight,
                    height,
                    age,
                    activity: activity.to_string(),
                }
            }
            _ => return Err(self.reject_input()),
        };

        self.presenter.set_busy(true);
        let result = self.gateway.calculate_calories(&request).await;
        self.presenter.set_busy(false);

        match result {
            Ok(response) => {
                self.presenter.render_result(&format!(
                    "Estimated daily calories: {:.0}",
                    response.calories
                ));
                Ok(())
            }
            Err(e) => {
                self.presenter.render_error(RETRY_MESSAGE);
                Err(e)
            }
        }
    }

    /// Submit the contact form. Busy state and the input fields are
    /// reset whether or not the request succeeds.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<()> {
        if message.name.trim().is_empty()
            || message.email.trim().is_empty()
            || message.message.trim().is_empty()
        {
            return Err(self.reject_input());
        }

        self.presenter.set_busy(true);
        let result = self.gateway.send_contact(message).await;
        self.presenter.set_busy(false);
        self.presenter.clear_inputs();

        match result {
            Ok(()) => {
                self.presenter.render_result("Thanks! Your message has been sent.");
                Ok(())
            }
            Err(e) => {
                self.presenter.render_error(RETRY_MESSAGE);
                Err(e)
            }
        }
    }
}
