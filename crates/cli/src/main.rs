use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use ideas_cli::api::dto::Idea;
use ideas_cli::api::{ApiClient, IdeasApi};
use ideas_cli::cli::{Cli, Commands};
use ideas_cli::config::CliConfig;
use ideas_cli::identity_store::FileIdentityStore;
use ideas_cli::shell::{BannerKind, Shell};
use ideas_core::tags;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load()?.with_api_url(cli.api_url);

    let api: Arc<dyn IdeasApi> = Arc::new(ApiClient::new(&config.api_url)?);
    let identity = FileIdentityStore::default_location()?;
    let mut shell = Shell::new(api.clone(), Box::new(identity))?;

    run(cli.command, &mut shell, api.as_ref()).await
}

async fn run(command: Commands, shell: &mut Shell, api: &dyn IdeasApi) -> Result<()> {
    match command {
        Commands::Register {
            full_name,
            phone,
            password,
            confirm_password,
        } => {
            shell.show_register();
            shell.register_form.full_name = full_name;
            shell.register_form.phone_number = phone;
            shell.register_form.password = password;
            shell.register_form.confirm_password = confirm_password;
            shell.submit_register(Instant::now()).await;
            report(shell)?;
        }
        Commands::Login {
            phone,
            password,
            remember,
        } => {
            shell.login_form.phone_number = phone;
            shell.login_form.password = password;
            shell.login_form.remember_me = remember;
            let signed_in = shell.submit_login().await?;
            report(shell)?;
            if signed_in && !remember {
                println!("Identity not remembered; pass --remember to stay signed in.");
            }
        }
        Commands::Logout => {
            shell.logout()?;
            println!("Signed out.");
        }
        Commands::Whoami => match shell.user() {
            Some(user) => println!("{} ({}) #{}", user.full_name, user.phone_number, user.id),
            None => println!("Not logged in."),
        },
        Commands::Submit {
            text,
            project,
            module,
            section,
        } => {
            shell.idea_form.text = text;
            shell.idea_form.project = project;
            shell.idea_form.module = module;
            shell.idea_form.section = section;
            shell.submit_idea(Instant::now()).await?;
            report(shell)?;
            print_ideas(shell.my_ideas());
        }
        Commands::Mine => {
            if shell.user().is_none() {
                bail!("Not logged in. Run `ideas login` first.");
            }
            let ideas = shell.refresh_my_ideas().await?;
            if ideas.is_empty() {
                println!("No ideas submitted yet.");
            }
            print_ideas(ideas);
        }
        Commands::Ideas => {
            for entry in api.list_ideas().await? {
                print_idea(&entry.idea);
                println!("      owner: {} ({})", entry.owner.full_name, entry.owner.phone_number);
            }
        }
        Commands::Status { id, status } => {
            let idea = api.update_status(id, &status).await?;
            println!("Idea status updated successfully");
            print_idea(&idea);
        }
        Commands::Users => {
            for user in api.list_users().await? {
                println!(
                    "#{:<4} {:<24} {:<16} joined {}",
                    user.id,
                    user.full_name,
                    user.phone_number,
                    user.created_at.format("%Y-%m-%d")
                );
            }
        }
        Commands::Options => {
            for (title, vocabulary) in [
                ("Projects", tags::PROJECTS),
                ("Modules", tags::MODULES),
                ("Sections", tags::SECTIONS),
            ] {
                println!("{title}:");
                for (value, label) in vocabulary {
                    println!("  {value:<16} {label}");
                }
            }
        }
    }
    Ok(())
}

/// Print the shell's banner; an error banner fails the command.
fn report(shell: &Shell) -> Result<()> {
    match shell.banner(Instant::now()) {
        Some(banner) if banner.kind == BannerKind::Error => bail!("{}", banner.text),
        Some(banner) => {
            println!("{}", banner.text);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_ideas(ideas: &[Idea]) {
    for idea in ideas {
        print_idea(idea);
    }
}

fn print_idea(idea: &Idea) {
    println!(
        "#{:<4} [{:<11}] {} ({}/{}/{}) by {}, {}",
        idea.id,
        idea.status.as_str(),
        idea.text,
        idea.project,
        idea.module,
        idea.section,
        idea.submitted_by,
        idea.created_at.format("%Y-%m-%d %H:%M")
    );
}
