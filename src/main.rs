use clap::Parser;
use dialoguer::Confirm;
use holidays::application::init::init;
use holidays::application::{
    ConfigService, DeleteOutcome, EntryRepository, FormController, ListPresenter, SubmitOutcome,
};
use holidays::cli::{format_change, format_entry, Cli, Commands};
use holidays::domain::UuidSource;
use holidays::error::{HolidaysError, Result};
use holidays::infrastructure::{Config, HolidaysDir, JsonFileStore};
use holidays::telemetry;

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the holidays directory and open its configured slot
fn open_repository() -> Result<(Config, EntryRepository<JsonFileStore>)> {
    let dir = HolidaysDir::discover()?;
    let config = dir.load_config()?;
    let repository = EntryRepository::open(dir.store(&config))?;
    Ok((config, repository))
}

fn confirm(question: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()
        .map_err(|e| HolidaysError::Prompt(format!("Could not ask for confirmation: {}", e)))
}

fn submit(
    form: &mut FormController<UuidSource>,
    repository: &mut EntryRepository<JsonFileStore>,
    verb: &str,
) -> Result<()> {
    match form.submit(repository)? {
        SubmitOutcome::Saved(entry) => {
            println!("{}", format_change(verb, &entry));
            Ok(())
        }
        SubmitOutcome::Blocked => Err(HolidaysError::IncompleteForm),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized holidays directory at {}", path.display());
            Ok(())
        }
        Commands::List => {
            let (_, repository) = open_repository()?;
            println!("{}", ListPresenter::new(&repository).render().trim_end());
            Ok(())
        }
        Commands::Show { key } => {
            let (_, repository) = open_repository()?;
            let entry = ListPresenter::new(&repository).resolve(&key)?;
            print!("{}", format_entry(entry));
            Ok(())
        }
        Commands::Add { date, descr } => {
            let (_, mut repository) = open_repository()?;
            let mut form = FormController::new(UuidSource);
            form.set_descr(descr);
            form.set_date(Some(date));
            submit(&mut form, &mut repository, "Added")
        }
        Commands::Edit { key, date, descr } => {
            let (_, mut repository) = open_repository()?;
            let intent = ListPresenter::new(&repository).edit_intent(&key)?;
            let mut form = FormController::new(UuidSource);
            form.apply(intent);
            if let Some(date) = date {
                form.set_date(Some(date));
            }
            if let Some(descr) = descr {
                form.set_descr(descr);
            }
            submit(&mut form, &mut repository, "Updated")
        }
        Commands::Delete { key, yes } => {
            let (config, mut repository) = open_repository()?;
            let intent = ListPresenter::new(&repository).delete_intent(&key)?;
            let mut form = FormController::new(UuidSource);
            let Some(request) = form.apply(intent) else {
                return Ok(());
            };

            let confirmed = yes || !config.confirm_delete || confirm(&request.question())?;
            match form.resolve_delete(&mut repository, confirmed)? {
                DeleteOutcome::Deleted(entry) => println!("{}", format_change("Deleted", &entry)),
                DeleteOutcome::Declined => println!("Cancelled"),
                DeleteOutcome::NothingPending => {}
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let dir = HolidaysDir::discover()?;
            let service = ConfigService::new(dir);

            if list {
                let config = service.list()?;
                println!("slot = {}", config.slot);
                println!("confirm_delete = {}", config.confirm_delete);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: holidays config [--list | <key> [<value>]]");
                println!("Valid keys: slot, confirm_delete");
                Ok(())
            }
        }
    }
}
