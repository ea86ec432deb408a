use market_scout::agent::Agent;
use market_scout::config::Config;
use market_scout::credentials;
use market_scout::output;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn read_line(prompt: &str) -> Option<String> {
    print!("{} ", prompt);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    output::startup_banner();
    output::config_item("Brain", &config.gemini_model);
    output::config_item("Eyes", "Tavily Search API");
    output::info("Keys are never stored. They are used only for this session.");
    println!();

    let secrets_dir = Path::new(&config.secrets_dir);
    let mut prompt = |env_key: &str| read_line(&format!("Enter {}:", env_key));
    let tavily = credentials::resolve_credential(
        secrets_dir,
        "tavily_api_key",
        "TAVILY_API_KEY",
        &mut prompt,
    );
    let gemini = credentials::resolve_credential(
        secrets_dir,
        "gemini_api_key",
        "GEMINI_API_KEY",
        &mut prompt,
    );

    let (tavily, gemini) = match (tavily, gemini) {
        (Some(tavily), Some(gemini)) => (tavily, gemini),
        _ => {
            output::error(
                "Both API keys are required. Set TAVILY_API_KEY and GEMINI_API_KEY, \
                 or place tavily_api_key and gemini_api_key in the secret store.",
            );
            std::process::exit(1);
        }
    };

    let agent = Agent::new(&config, tavily.value, gemini.value);

    loop {
        println!();
        let Some(query) = read_line("Research topic (\"exit\" to quit):") else {
            break;
        };
        if query == "exit" || query == "quit" {
            break;
        }
        if query.is_empty() {
            output::warn("Please enter a research topic.");
            continue;
        }

        let spinner = output::spinner("Agent is working...");
        let result = agent.research(&query).await;
        spinner.finish_and_clear();

        match result {
            Ok(report) => {
                output::success("Analysis complete");
                if let Some(e) = &report.search_error {
                    output::warn(&format!(
                        "Search failed, the summary below reflects the error text: {}",
                        e
                    ));
                }
                output::report(&report.summary);
                output::raw_data_panel(&report.raw_data);
            }
            Err(e) => {
                output::error(&format!("AI Error: {}", e));
            }
        }
    }

    output::status("Session closed.");
}
