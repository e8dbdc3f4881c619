//! Interactive chat against an OpenAI-compatible completion endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! parley-chat
//!
//! # Specify a model and endpoint
//! parley-chat --model gpt-4o --endpoint https://api.openai.com/v1
//!
//! # Give the assistant a role and pick a theme
//! parley-chat --system "You are a terse code reviewer" --theme dark
//!
//! # Disable colors (useful for piping output)
//! parley-chat --no-color
//! ```
//!
//! The API key is never read from the command line or the environment.
//! Enter it with `/key` once the chat starts; type `/help` for the other
//! commands.

use std::sync::{Arc, Mutex, PoisonError};

use arrrg::CommandLine;
use dialoguer::Password;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use parley::chat::{
    ASSISTANT_NAME, ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer,
    draw_transcript, help_text, parse_command,
};
use parley::{CompletionBackend, CompletionClient, Credential};

/// Main entry point for the parley-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("parley-chat [OPTIONS]");
    let config = match ChatConfig::try_from(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("parley-chat: {err}");
            std::process::exit(2);
        }
    };
    init_tracing(config.verbose)?;

    let use_color = config.use_color;
    let theme = config.theme;
    let client = CompletionClient::new()?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color).with_theme(theme);
    let mut rl = DefaultEditor::new()?;

    // Ctrl+C cancels whichever completion call is in flight.
    let cancel = Arc::new(Mutex::new(CancellationToken::new()));
    let handler_cancel = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        handler_cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    })?;

    println!(
        "Parley Chat - {ASSISTANT_NAME}, your AI assistant (model: {})",
        session.model_config().model
    );
    println!("Ask me anything and I'll do my best to answer!");
    println!("Type /key to enter your API key, /help for commands, /quit to exit");
    println!(
        "parley v{} | Powered by OpenAI-compatible chat completions\n",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Key => {
                            prompt_for_key(&mut session, &mut renderer);
                        }
                        ChatCommand::ShowRole => {
                            renderer.print_info(&format!("Role: {}", session.system_prompt()));
                        }
                        ChatCommand::SetRole(role) => match session.set_system_prompt(role) {
                            Ok(()) => renderer
                                .print_info("Role updated; it applies from your next message."),
                            Err(err) => renderer.print_error(&err.to_string()),
                        },
                        ChatCommand::DefaultRole => {
                            session.restore_system_prompt();
                            renderer.print_info(&format!(
                                "Role restored: {}",
                                session.system_prompt()
                            ));
                        }
                        ChatCommand::Theme(theme) => {
                            session.set_theme(theme);
                            renderer.set_theme(theme);
                            renderer.print_info(&format!("Theme changed to: {theme}"));
                            draw_transcript(session.state(), &mut renderer);
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Reset => {
                            session.reset();
                            renderer.set_theme(session.state().theme());
                            renderer.print_info(
                                "Session reset. Enter your API key again with /key.",
                            );
                        }
                        ChatCommand::Retry => {
                            if session.state().pending_human().is_none() {
                                renderer.print_info("Nothing to retry.");
                            } else {
                                converse(&mut session, &mut renderer, &cancel, None).await;
                            }
                        }
                        ChatCommand::History => {
                            if session.state().is_empty() {
                                renderer.print_info("(no messages yet)");
                            } else {
                                draw_transcript(session.state(), &mut renderer);
                            }
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(model_name) => {
                            match session.set_model(model_name.as_str()) {
                                Ok(()) => renderer
                                    .print_info(&format!("Model changed to: {}", model_name)),
                                Err(err) => renderer.print_error(&err.to_string()),
                            }
                        }
                        ChatCommand::Temperature(value) => match session.set_temperature(value) {
                            Ok(()) => {
                                renderer.print_info(&format!("temperature set to {:.2}", value))
                            }
                            Err(err) => renderer.print_error(&err.to_string()),
                        },
                        ChatCommand::Endpoint(url) => match session.set_endpoint(url.as_str()) {
                            Ok(()) => renderer.print_info(&format!("Endpoint changed to: {url}")),
                            Err(err) => renderer.print_error(&err.to_string()),
                        },
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::ShowConfig => {
                            print_config(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to API
                converse(&mut session, &mut renderer, &cancel, Some(line)).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if verbose {
        EnvFilter::new("parley=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Sends `input`, or resends the pending message when `input` is `None`.
///
/// A missing or rejected key triggers one key prompt and one more attempt.
async fn converse<B: CompletionBackend>(
    session: &mut ChatSession<B>,
    renderer: &mut PlainTextRenderer,
    cancel: &Mutex<CancellationToken>,
    input: Option<&str>,
) {
    for attempt in 0..2 {
        let token = fresh_token(cancel);
        let result = match input {
            Some(text) => session.submit(text, renderer, &token).await,
            None => session.retry(renderer, &token).await,
        };
        match result {
            Ok(_) => return,
            Err(err) if err.is_authentication() => {
                if attempt > 0 {
                    return;
                }
                prompt_for_key(session, renderer);
                if session.state().credential().is_empty() {
                    return;
                }
            }
            Err(err) if err.is_upstream() => {
                renderer.print_info("Type /retry (or send the same message) to try again.");
                return;
            }
            // Blank input is ignored; configuration errors are already rendered.
            Err(_) => return,
        }
    }
}

fn fresh_token(slot: &Mutex<CancellationToken>) -> CancellationToken {
    let token = CancellationToken::new();
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = token.clone();
    token
}

fn prompt_for_key<B: CompletionBackend>(
    session: &mut ChatSession<B>,
    renderer: &mut PlainTextRenderer,
) {
    // Ctrl+C is held by the cancellation handler, so an empty key is the way out.
    let entered = Password::new()
        .with_prompt("API key (empty to cancel)")
        .allow_empty_password(true)
        .interact();
    match entered {
        Ok(key) => {
            let credential = Credential::new(key);
            if credential.is_empty() {
                renderer.print_warning("No API key entered.");
                return;
            }
            renderer.print_info(&format!("API key set ({}).", credential.masked()));
            session.set_credential(credential);
        }
        Err(dialoguer::Error::IO(err)) if err.kind() == std::io::ErrorKind::Interrupted => {
            renderer.print_warning("API key entry cancelled.");
        }
        Err(err) => renderer.print_error(&format!("Could not read API key: {err}")),
    }
}

fn print_stats<B: CompletionBackend>(session: &ChatSession<B>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", stats.model);
    println!("      Messages: {} ({} turns)", stats.message_count, stats.turn_count);
    println!(
        "      Requests: {} ({} failed, {} cancelled)",
        stats.total_requests, stats.failed_requests, stats.cancelled_requests
    );
    println!(
        "      Total tokens: {} in / {} out",
        stats.total_prompt_tokens, stats.total_completion_tokens
    );
    if let Some(usage) = stats.last_turn_usage {
        println!(
            "      Last turn tokens: {} in / {} out",
            usage.prompt_tokens, usage.completion_tokens
        );
    }
    println!(
        "      API key: {}",
        if stats.credential_set { "set" } else { "not set" }
    );
}

fn print_config<B: CompletionBackend>(session: &ChatSession<B>) {
    let stats = session.stats();
    let style = stats.theme.style();
    println!("    Current Configuration:");
    println!("      Model: {}", stats.model);
    println!("      Endpoint: {}", stats.endpoint);
    println!("      Temperature: {:.2}", stats.temperature);
    println!("      Timeout: {}s", stats.timeout_secs);
    match stats.history_window {
        Some(window) => println!("      History window: {window} messages"),
        None => println!("      History window: (all)"),
    }
    println!(
        "      Theme: {} (background {}, text {})",
        stats.theme,
        style.background.to_hex(),
        style.foreground.to_hex()
    );
    println!("      Role: {}", session.system_prompt());
    println!("      API key: {}", session.state().credential().masked());
}
