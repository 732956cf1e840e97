//! Command line front-end: decodes a list URL query, loads the matching
//! contract page and prints quick-search suggestions as JSON.
//!
//! Usage: `quick-search [QUERY_STRING] [TERM]`. A `page` key in the query
//! string selects the zero-based list page.

use std::env;

use config::Config;
use dotenvy::dotenv;
use serde_json::json;

use contract_filters::dto::contracts::{ListPageOutcome, ListPageQuery};
use contract_filters::models::config::AppConfig;
use contract_filters::query::QueryParams;
use contract_filters::repository::JsonRepository;
use contract_filters::services::contracts::{
    load_contract_list, load_reference_data, refresh_summary,
};
use contract_filters::suggestions;

const PAGE_KEY: &str = "page";

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let mut args = env::args().skip(1);
    let mut params = QueryParams::parse(&args.next().unwrap_or_default());
    let term = args.next().unwrap_or_default();
    let page = params.remove(PAGE_KEY);

    let repo = match JsonRepository::from_path(&app_config.dataset_path) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to load dataset {}: {e}", app_config.dataset_path);
            std::process::exit(1);
        }
    };

    let summary = refresh_summary(&repo);
    let references = match load_reference_data(&repo) {
        Ok(references) => references,
        Err(e) => {
            log::error!("Failed to load reference data: {e}");
            std::process::exit(1);
        }
    };
    let ctx = references.search_context(&summary.linked);

    let outcome = match load_contract_list(
        &repo,
        ListPageQuery { page, params },
        app_config.page_size,
    ) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Failed to load contracts: {e}");
            std::process::exit(1);
        }
    };

    let list = match outcome {
        ListPageOutcome::Page(data) => json!(data),
        ListPageOutcome::Redirect { page, query_params } => json!({
            "redirect": {
                "page": page,
                "query": query_params.map(|params| params.to_query_string()),
            }
        }),
    };

    let output = json!({
        "summary": summary.summary,
        "list": list,
        "suggestions": suggestions::suggest(&term, &ctx),
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            log::error!("Failed to render output: {e}");
            std::process::exit(1);
        }
    }
}
