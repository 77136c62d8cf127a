use std::io::{self, BufRead, Write};

use clap::Subcommand;
use serde_json::json;

use crate::api::ApiClient;
use crate::cli::utils::{output_data, output_error, output_success};
use crate::cli::OutputFormat;
use crate::models::auth::LoginRequest;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login with email or username")]
    Login {
        #[arg(help = "Email or username")]
        identifier: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Clear the stored session")]
    Logout,

    #[command(about = "Show current session status")]
    Status,

    #[command(about = "Show the current user's decoded claims")]
    Whoami,
}

pub async fn handle(
    cmd: AuthCommands,
    client: &ApiClient,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { identifier, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };

            let response = client
                .login(&LoginRequest {
                    identifier,
                    password,
                    ip_address: String::new(),
                    device: "opsdeck-cli".to_string(),
                })
                .await?;

            if response.success && client.session().is_logged_in() {
                output_success(
                    output_format,
                    "Logged in",
                    Some(json!({
                        "userCode": response.user_code,
                        "companyId": response.company_id,
                    })),
                )
            } else {
                let message = if response.message.is_empty() {
                    "Login failed"
                } else {
                    response.message.as_str()
                };
                output_error(output_format, message)
            }
        }
        AuthCommands::Logout => {
            client.session().logout();
            output_success(output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let session = client.session();
            output_data(
                output_format,
                &json!({
                    "loggedIn": session.is_logged_in(),
                    "tokenExpired": session.is_token_expired(),
                    "role": session.user_role(),
                }),
            )
        }
        AuthCommands::Whoami => match client.session().current_user() {
            Some(user) => output_data(output_format, &user),
            None => output_error(output_format, "Not logged in"),
        },
    }
}

fn prompt_password() -> anyhow::Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut password = String::new();
    io::stdin().lock().read_line(&mut password)?;
    Ok(password.trim_end().to_string())
}
