use crate::config::ClientConfig;
use crate::domain::model::{
    BmiRequest, BmiResponse, CaloriesRequest, CaloriesResponse, ContactMessage, MacroRequest,
};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

/// Which backend an operation targets. The mapping is fixed at
/// construction; there is no runtime routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Nutrition tracking service: nutrition records, meals, goals, food search.
    Tracking,
    /// Food catalogue and BMI calculator service.
    Food,
    /// Local tools service backing the calculator and contact forms.
    Tools,
}

/// HTTP/JSON gateway to the nutrition backends.
///
/// Every operation issues exactly one request: build the URL from the
/// service's base, send with a JSON content type, map the outcome to
/// one of the three error kinds, and hand back the parsed body
/// untouched. No retries, no caching, no auth.
pub struct ApiGateway {
    client: Client,
    config: ClientConfig,
}

impl ApiGateway {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Tracking => &self.config.tracking_base_url,
            Service::Food => &self.config.food_base_url,
            Service::Tools => &self.config.tools_base_url,
        }
    }

    fn builder(
        &self,
        method: Method,
        service: Service,
        path: &str,
        query: Option<(&str, &str)>,
        body: Option<&Value>,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(service).trim_end_matches('/'), path);
        let mut builder = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(pair) = query {
            builder = builder.query(&[pair]);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder
    }

    /// Send and classify the outcome. Transport failures surface from
    /// `send`, non-2xx responses become status errors with the body
    /// deliberately left unread, and an unparseable body on a 2xx
    /// response is a decode error.
    async fn execute(builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    /// The one primitive every public operation goes through.
    ///
    /// `op` names the operation and `detail` the relevant identifier,
    /// so a failure is logged with enough context to trace it before
    /// the same error is handed back to the caller.
    async fn request(
        &self,
        op: &'static str,
        detail: &str,
        method: Method,
        service: Service,
        path: &str,
        query: Option<(&str, &str)>,
        body: Option<&Value>,
    ) -> Result<Value> {
        tracing::debug!("{}: {} {}{}", op, method, self.base_url(service), path);
        let builder = self.builder(method, service, path, query, body);

        match Self::execute(builder).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("Error in {} ({}): {}", op, detail, e);
                Err(e)
            }
        }
    }

    // ---- Tracking service ----

    /// Fetch all users' nutrition records.
    pub async fn fetch_all_nutrition_data(&self) -> Result<Value> {
        self.request(
            "fetch_all_nutrition_data",
            "all",
            Method::GET,
            Service::Tracking,
            "/nutrition",
            None,
            None,
        )
        .await
    }

    /// Fetch nutrition data for one user.
    pub async fn fetch_user_nutrition(&self, user_id: &str) -> Result<Value> {
        self.request(
            "fetch_user_nutrition",
            &format!("user {}", user_id),
            Method::GET,
            Service::Tracking,
            &format!("/nutrition/{}", user_id),
            None,
            None,
        )
        .await
    }

    /// Fetch a user's nutrition data for one date (`YYYY-MM-DD`, passed
    /// through unvalidated).
    pub async fn fetch_nutrition_by_date(&self, user_id: &str, date: &str) -> Result<Value> {
        self.request(
            "fetch_nutrition_by_date",
            &format!("date {}", date),
            Method::GET,
            Service::Tracking,
            &format!("/nutrition/{}/{}", user_id, date),
            None,
            None,
        )
        .await
    }

    pub async fn create_nutrition_record(&self, nutrition_data: &Value) -> Result<Value> {
        self.request(
            "create_nutrition_record",
            "new record",
            Method::POST,
            Service::Tracking,
            "/nutrition",
            None,
            Some(nutrition_data),
        )
        .await
    }

    pub async fn update_nutrition_record(
        &self,
        record_id: &str,
        update_data: &Value,
    ) -> Result<Value> {
        self.request(
            "update_nutrition_record",
            &format!("record {}", record_id),
            Method::PUT,
            Service::Tracking,
            &format!("/nutrition/{}", record_id),
            None,
            Some(update_data),
        )
        .await
    }

    pub async fn delete_nutrition_record(&self, record_id: &str) -> Result<Value> {
        self.request(
            "delete_nutrition_record",
            &format!("record {}", record_id),
            Method::DELETE,
            Service::Tracking,
            &format!("/nutrition/{}", record_id),
            None,
            None,
        )
        .await
    }

    pub async fn fetch_meals(&self) -> Result<Value> {
        self.request(
            "fetch_meals",
            "all",
            Method::GET,
            Service::Tracking,
            "/meals",
            None,
            None,
        )
        .await
    }

    pub async fn create_meal(&self, meal_data: &Value) -> Result<Value> {
        self.request(
            "create_meal",
            "new meal",
            Method::POST,
            Service::Tracking,
            "/meals",
            None,
            Some(meal_data),
        )
        .await
    }

    /// Daily nutrition summary for a user and date.
    pub async fn fetch_daily_summary(&self, user_id: &str, date: &str) -> Result<Value> {
        self.request(
            "fetch_daily_summary",
            &format!("user {} date {}", user_id, date),
            Method::GET,
            Service::Tracking,
            &format!("/nutrition/summary/{}/{}", user_id, date),
            None,
            None,
        )
        .await
    }

    pub async fn fetch_nutrition_goals(&self, user_id: &str) -> Result<Value> {
        self.request(
            "fetch_nutrition_goals",
            &format!("user {}", user_id),
            Method::GET,
            Service::Tracking,
            &format!("/goals/{}", user_id),
            None,
            None,
        )
        .await
    }

    pub async fn update_nutrition_goals(&self, user_id: &str, goals_data: &Value) -> Result<Value> {
        self.request(
            "update_nutrition_goals",
            &format!("user {}", user_id),
            Method::PUT,
            Service::Tracking,
            &format!("/goals/{}", user_id),
            None,
            Some(goals_data),
        )
        .await
    }

    /// Free-text food search. The term goes into the `q` query parameter
    /// percent-encoded; no sanitization or length limit is applied.
    pub async fn search_foods(&self, search_term: &str) -> Result<Value> {
        self.request(
            "search_foods",
            &format!("term \"{}\"", search_term),
            Method::GET,
            Service::Tracking,
            "/foods/search",
            Some(("q", search_term)),
            None,
        )
        .await
    }

    pub async fn fetch_food_details(&self, food_id: &str) -> Result<Value> {
        self.request(
            "fetch_food_details",
            &format!("food {}", food_id),
            Method::GET,
            Service::Tracking,
            &format!("/foods/{}", food_id),
            None,
            None,
        )
        .await
    }

    // ---- Food / BMI service ----

    pub async fn get_all_foods(&self) -> Result<Value> {
        self.request(
            "get_all_foods",
            "all",
            Method::GET,
            Service::Food,
            "/food",
            None,
            None,
        )
        .await
    }

    pub async fn get_food_by_id(&self, id: &str) -> Result<Value> {
        self.request(
            "get_food_by_id",
            &format!("food {}", id),
            Method::GET,
            Service::Food,
            &format!("/food/{}", id),
            None,
            None,
        )
        .await
    }

    pub async fn create_food(&self, food_data: &Value) -> Result<Value> {
        self.request(
            "create_food",
            "new food",
            Method::POST,
            Service::Food,
            "/food",
            None,
            Some(food_data),
        )
        .await
    }

    pub async fn update_food(&self, id: &str, food_data: &Value) -> Result<Value> {
        self.request(
            "update_food",
            &format!("food {}", id),
            Method::PUT,
            Service::Food,
            &format!("/food/{}", id),
            None,
            Some(food_data),
        )
        .await
    }

    pub async fn delete_food(&self, id: &str) -> Result<Value> {
        self.request(
            "delete_food",
            &format!("food {}", id),
            Method::DELETE,
            Service::Food,
            &format!("/food/{}", id),
            None,
            None,
        )
        .await
    }

    /// Calculate BMI and macro targets from body stats and goal.
    pub async fn calculate_macros(&self, data: &MacroRequest) -> Result<Value> {
        let body = serde_json::to_value(data)?;
        self.request(
            "calculate_macros",
            &format!("goal {}", data.goal),
            Method::POST,
            Service::Food,
            "/bmicalculator/calculate-macros",
            None,
            Some(&body),
        )
        .await
    }

    // ---- Tools service (calculator and contact form backends) ----

    pub async fn calculate_bmi(&self, data: &BmiRequest) -> Result<BmiResponse> {
        let body = serde_json::to_value(data)?;
        let value = self
            .request(
                "calculate_bmi",
                "bmi form",
                Method::POST,
                Service::Tools,
                "/api/bmi",
                None,
                Some(&body),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn calculate_calories(&self, data: &CaloriesRequest) -> Result<CaloriesResponse> {
        let body = serde_json::to_value(data)?;
        let value = self
            .request(
                "calculate_calories",
                "calories form",
                Method::POST,
                Service::Tools,
                "/api/calories",
                None,
                Some(&body),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Submit the contact form. Only the status matters here; a 2xx
    /// response body is not decoded.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<()> {
        let body = serde_json::to_value(message)?;
        let builder = self.builder(
            Method::POST,
            Service::Tools,
            "/api/contact",
            None,
            Some(&body),
        );

        let result: Result<()> = async {
            let response = builder.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                });
            }
            Ok(())
        }
        .await;

        if let Err(e) = &result {
            tracing::error!("Error in send_contact (from {}): {}", message.email, e);
        }
        result
    }
}
