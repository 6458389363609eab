use clap::{Parser, Subcommand};
use nutrition_client::utils::logger;
use nutrition_client::utils::validation::Validate;
use nutrition_client::{
    ApiGateway, BmiInput, CalculatorForms, ClientConfig, MacroRequest, Presenter,
};

#[derive(Debug, Parser)]
#[command(name = "nutrition-client")]
#[command(about = "Command-line client for the nutrition tracking backends")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    /// Load base URLs from a TOML file instead of flags
    #[arg(long)]
    config_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Log in JSON format")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search foods on the tracking service
    Search { term: String },
    /// Fetch food details by id from the tracking service
    Food { food_id: String },
    /// List all foods from the food service
    Foods,
    /// Daily nutrition summary for a user and date (YYYY-MM-DD)
    Summary { user_id: String, date: String },
    /// Calculate BMI and macro targets via the food service
    Macros {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        #[arg(long, default_value = "moderate")]
        activity_level: String,
        #[arg(long, default_value = "maintain")]
        goal: String,
    },
    /// Run the BMI calculator form flow against the tools service
    Bmi {
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
}

/// Presents form output on the terminal.
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn set_busy(&self, busy: bool) {
        if busy {
            println!("Calculating...");
        }
    }

    fn render_result(&self, text: &str) {
        println!("✅ {}", text);
    }

    fn render_error(&self, text: &str) {
        eprintln!("❌ {}", text);
    }

    fn clear_inputs(&self) {}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = match &cli.config_file {
        Some(path) => ClientConfig::from_file(path)?,
        None => cli.config.clone(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if cli.verbose {
        tracing::debug!("Client config: {:?}", config);
    }

    let gateway = ApiGateway::new(config)?;

    let outcome = match cli.command {
        Command::Search { term } => gateway.search_foods(&term).await,
        Command::Food { food_id } => gateway.fetch_food_details(&food_id).await,
        Command::Foods => gateway.get_all_foods().await,
        Command::Summary { user_id, date } => gateway.fetch_daily_summary(&user_id, &date).await,
        Command::Macros {
            weight,
            height,
            age,
            gender,
            activity_level,
            goal,
        } => {
            let request = MacroRequest {
                weight,
                height,
                age,
                gender,
                activity_level,
                goal,
            };
            if let Err(e) = request.validate() {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            gateway.calculate_macros(&request).await
        }
        Command::Bmi { weight, height } => {
            let forms = CalculatorForms::new(gateway, TerminalPresenter);
            match forms.submit_bmi(&BmiInput { weight, height }).await {
                Ok(()) => return Ok(()),
                Err(_) => std::process::exit(2),
            }
        }
    };

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }
}
