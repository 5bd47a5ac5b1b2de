//! Interiorswala console: drive the studio store, admin vault and AI designer from a terminal.
//!
//! Usage:
//!   interiorswala-console suggest [--enquire <name> <email> <phone> [<project_type>] --] <prompt...>
//!   interiorswala-console enquire <name> <email> <phone> <project_type> <message...>
//!   interiorswala-console show projects|queries|studio
//!   interiorswala-console admin <user> <pass> <action> [args...]
//!
//! Vault: STUDIO_DATA_PATH (default ./data/interiorswala_vault). AI key: API_KEY.

use interiorswala_core::{
    AccessGate, DesignAssistant, GeminiProvider, HandoffBridge, LeadCaptureForm, LogNavigator, LoginOutcome,
    ProjectDraft, SledStorage, StudioConfig, StudioDetails, StudioStore, SuggestionPipeline,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> CliResult {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = StudioConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    let storage = Arc::new(SledStorage::open(Some(&config.data_path))?);
    let mut store = StudioStore::open(storage);
    tracing::info!(path = %config.data_path.display(), "studio vault opened");

    match command.as_str() {
        "suggest" => {
            let provider = Arc::new(GeminiProvider::with_endpoint(&config.api_base, &config.model));
            let pipeline =
                SuggestionPipeline::new(provider, config.api_key.clone()).with_timeout(config.request_timeout);
            suggest(&pipeline, &mut store, rest).await
        }
        "enquire" => enquire(&mut store, rest),
        "show" => show(&store, rest.first().map(String::as_str)),
        "admin" => admin(&config, &mut store, rest),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    eprintln!("Interiorswala console");
    eprintln!("  suggest [--enquire <name> <email> <phone> [<type>] --] <prompt...>");
    eprintln!("                                                        Generate an AI design concept, optionally");
    eprintln!("                                                        sending it with a consultation request");
    eprintln!("  enquire <name> <email> <phone> <type> <message...>    Submit a consultation request");
    eprintln!("  show projects|queries|studio                          Print a collection as JSON");
    eprintln!("  admin <user> <pass> <action> [args...]                Run an admin action:");
    eprintln!("      add-project <title> <category> <image> <description> [link]");
    eprintln!("      update-project <id> <title> <category> <image> <description> [link]");
    eprintln!("      delete-project <id> | cycle-status <id> | delete-query <id> | clear-queries");
    eprintln!("      set-studio <email> <phone> <address> <instagram> <whatsapp> <facebook>");
}

/// Contact details given to `suggest --enquire`.
#[derive(Debug, PartialEq, Eq)]
struct Enquirer {
    name: String,
    email: String,
    phone: String,
    project_type: Option<String>,
}

/// Split `suggest` arguments into an optional enquirer and the prompt words.
fn parse_suggest_args(args: &[String]) -> Option<(Option<Enquirer>, &[String])> {
    let Some(("--enquire", rest)) = args.split_first().map(|(f, r)| (f.as_str(), r)) else {
        return Some((None, args));
    };
    let sep = rest.iter().position(|a| a == "--")?;
    let (contact, prompt) = (&rest[..sep], &rest[sep + 1..]);
    let enquirer = match contact {
        [name, email, phone] => Enquirer {
            name: name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            project_type: None,
        },
        [name, email, phone, project_type] => Enquirer {
            name: name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            project_type: Some(project_type.clone()),
        },
        _ => return None,
    };
    Some((Some(enquirer), prompt))
}

async fn suggest(pipeline: &SuggestionPipeline, store: &mut StudioStore, args: &[String]) -> CliResult {
    let Some((enquirer, prompt)) = parse_suggest_args(args) else {
        print_usage();
        return Ok(());
    };

    let mut assistant = DesignAssistant::new();
    assistant.prompt = prompt.join(" ");
    if let Err(e) = assistant.submit(pipeline).await {
        eprintln!("{}", e);
        return Ok(());
    }
    if let Some(s) = assistant.suggestion() {
        println!("{}", serde_json::to_string_pretty(s)?);
    }

    let bridge = HandoffBridge::new(LogNavigator);
    let mut form = LeadCaptureForm::new();
    if assistant.request_quote(&bridge, store).is_none() || !form.observe(store) {
        return Ok(());
    }
    println!("\nLead message: {}", form.message);

    let Some(enquirer) = enquirer else {
        return Ok(());
    };
    form.name = enquirer.name;
    form.email = enquirer.email;
    form.phone = enquirer.phone;
    if let Some(project_type) = enquirer.project_type {
        form.project_type = project_type;
    }
    match form.submit(store) {
        Ok(query) => println!("Vision captured with AI design: {}", query.id),
        Err(e) => eprintln!("{}", e),
    }
    Ok(())
}

fn enquire(store: &mut StudioStore, args: &[String]) -> CliResult {
    let [name, email, phone, project_type, message @ ..] = args else {
        print_usage();
        return Ok(());
    };
    let mut form = LeadCaptureForm::new();
    form.name = name.clone();
    form.email = email.clone();
    form.phone = phone.clone();
    form.project_type = project_type.clone();
    form.message = message.join(" ");
    match form.submit(store) {
        Ok(query) => println!("Vision captured: {}", query.id),
        Err(e) => eprintln!("{}", e),
    }
    Ok(())
}

fn show(store: &StudioStore, what: Option<&str>) -> CliResult {
    let out = match what {
        Some("projects") => serde_json::to_string_pretty(store.projects())?,
        Some("queries") => serde_json::to_string_pretty(store.queries())?,
        Some("studio") => serde_json::to_string_pretty(store.studio_details())?,
        _ => {
            print_usage();
            return Ok(());
        }
    };
    println!("{}", out);
    Ok(())
}

fn admin(config: &StudioConfig, store: &mut StudioStore, args: &[String]) -> CliResult {
    let [user, pass, action, rest @ ..] = args else {
        print_usage();
        return Ok(());
    };
    let mut gate = AccessGate::new(config.credential_verifier());
    gate.navigate("#admin");
    if let LoginOutcome::Denied(notice) = gate.submit_credentials(user, pass) {
        eprintln!("{}", notice);
        return Ok(());
    }

    let handled = run_admin_action(store, action, rest);
    if !handled {
        print_usage();
    }
    gate.logout();
    Ok(())
}

/// Runs one admin action; false when the action or its arguments are not recognised.
/// Record-replacing actions require every field so nothing is blanked by omission.
fn run_admin_action(store: &mut StudioStore, action: &str, args: &[String]) -> bool {
    match (action, args) {
        ("add-project", [title, category, image, description, link @ ..]) if link.len() <= 1 => {
            let mut draft = ProjectDraft::new(title, category, image, description);
            draft.link = link.first().cloned();
            match store.add_project(draft) {
                Some(id) => println!("Added {}", id),
                None => eprintln!("A project needs at least a title and an image."),
            }
        }
        ("update-project", [id, title, category, image, description, link @ ..]) if link.len() <= 1 => {
            let Some(mut project) = store.project(id).cloned() else {
                eprintln!("No project {}", id);
                return true;
            };
            project.title = title.clone();
            project.category = category.clone();
            project.image = image.clone();
            project.description = description.clone();
            project.link = link.first().filter(|l| !l.trim().is_empty()).cloned();
            store.update_project(project);
            println!("Updated {}", id);
        }
        ("delete-project", [id]) => report(store.delete_project(id), "project", id),
        ("cycle-status", [id]) => match store.cycle_query_status(id) {
            Some(status) => println!("{} -> {}", id, status),
            None => eprintln!("No query {}", id),
        },
        ("delete-query", [id]) => report(store.delete_query(id), "query", id),
        ("clear-queries", []) => {
            store.clear_queries();
            println!("Consultation history cleared.");
        }
        ("set-studio", [email, phone, address, instagram, whatsapp, facebook]) => {
            store.update_studio_details(StudioDetails {
                email: email.clone(),
                phone: phone.clone(),
                address: address.clone(),
                instagram: instagram.clone(),
                whatsapp: whatsapp.clone(),
                facebook: facebook.clone(),
            });
            println!("Studio details updated successfully.");
        }
        _ => return false,
    }
    true
}

fn report(found: bool, kind: &str, id: &str) {
    if found {
        println!("Deleted {} {}", kind, id);
    } else {
        eprintln!("No {} {}", kind, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use interiorswala_core::{DesignProvider, MemoryStorage, ProviderFailure, ProviderReply};

    const KEY: &str = "AIzaSyConsoleKey-0123456789";

    struct FixedProvider;

    #[async_trait]
    impl DesignProvider for FixedProvider {
        async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<ProviderReply, ProviderFailure> {
            let body = serde_json::json!({
                "style": "Himalayan Modern",
                "description": "Stone, wool and timber.",
                "palette": [ { "name": "Slate Mist", "hex": "#708090" } ],
                "keyElements": ["Exposed beams"],
                "furnitureIdeas": ["Woven daybed"]
            });
            Ok(ProviderReply::text(body.to_string()))
        }
    }

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn store() -> StudioStore {
        StudioStore::open(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn partial_set_studio_is_refused() {
        let mut store = store();
        let before = store.studio_details().clone();
        assert!(!run_admin_action(&mut store, "set-studio", &args(&["new@studio.in"])));
        assert_eq!(store.studio_details(), &before);

        let full = args(&["a@b.in", "+91 1", "Siliguri", "ig", "wa", "fb"]);
        assert!(run_admin_action(&mut store, "set-studio", &full));
        assert_eq!(store.studio_details().email, "a@b.in");
        assert_eq!(store.studio_details().facebook, "fb");
    }

    #[test]
    fn update_project_replaces_fields_and_keeps_id() {
        let mut store = store();
        let update = args(&["2", "Emerald Plaza II", "Commercial", "https://img/2.jpg", "Refit", "https://ig/2"]);
        assert!(run_admin_action(&mut store, "update-project", &update));
        let project = store.project("2").unwrap();
        assert_eq!(project.title, "Emerald Plaza II");
        assert_eq!(project.description, "Refit");
        assert_eq!(project.link.as_deref(), Some("https://ig/2"));
        assert_eq!(store.projects().len(), 2);

        assert!(!run_admin_action(&mut store, "update-project", &args(&["2", "Only title"])));
        assert_eq!(store.project("2").unwrap().title, "Emerald Plaza II");
    }

    #[test]
    fn suggest_arguments_split_contact_from_prompt() {
        let a = args(&["--enquire", "Ravi", "ravi@example.in", "+91 98", "--", "warm", "loft"]);
        let (enquirer, prompt) = parse_suggest_args(&a).unwrap();
        assert_eq!(enquirer.unwrap().name, "Ravi");
        assert_eq!(prompt, &args(&["warm", "loft"])[..]);

        let plain = args(&["warm", "loft"]);
        assert_eq!(parse_suggest_args(&plain).unwrap().0, None);
        assert!(parse_suggest_args(&args(&["--enquire", "Ravi", "warm"])).is_none());
    }

    #[tokio::test]
    async fn suggest_with_enquiry_records_query_carrying_the_design() {
        let mut store = store();
        let pipeline = SuggestionPipeline::new(Arc::new(FixedProvider), Some(KEY.to_string()));
        let a = args(&["--enquire", "Ravi", "ravi@example.in", "+91 98000 00000", "Hospitality", "--", "mountain", "lodge"]);
        suggest(&pipeline, &mut store, &a).await.unwrap();

        let query = &store.queries()[0];
        assert_eq!(query.project_type, "Hospitality");
        assert_eq!(query.ai_design.as_ref().map(|d| d.style.as_str()), Some("Himalayan Modern"));
        assert!(query.message.contains("Himalayan Modern"));
    }
}
