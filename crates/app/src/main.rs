use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffdir_app::config::AppConfig;
use staffdir_app::routes::Route;
use staffdir_app::session::{FormMode, Session, SubmitOutcome};
use staffdir_app::views;
use staffdir_client::RecordStoreClient;
use staffdir_core::state::DraftField;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffdir_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env();
    tracing::info!(store_url = %config.store_url, "Starting staffdir admin");

    let mut session = Session::new(RecordStoreClient::new(config.store_url));

    println!("staffdir admin -- type 'help' for commands");
    navigate(&mut session, Route::EmployeeList).await;

    loop {
        let Some(line) = read_line("staffdir> ") else {
            break;
        };
        let mut parts = line.split_whitespace();

        match (parts.next(), parts.next()) {
            (Some("list") | Some("l"), _) => {
                navigate(&mut session, Route::EmployeeList).await;
            }
            (Some("view") | Some("v"), Some(id)) => {
                navigate(&mut session, Route::EmployeeProfile(id.to_string())).await;
            }
            (Some("create") | Some("c"), _) => {
                navigate(&mut session, Route::CreateEmployee).await;
            }
            (Some("edit") | Some("e"), Some(id)) => {
                navigate(&mut session, Route::EditEmployee(id.to_string())).await;
            }
            (Some("delete") | Some("d"), Some(id)) => {
                delete_flow(&mut session, id).await;
            }
            (Some("go"), Some(path)) => match Route::parse(path) {
                Route::NotFound => print!("{}", views::render_not_found(path)),
                route => navigate(&mut session, route).await,
            },
            (Some("help") | Some("h"), _) => print_help(),
            (Some("quit") | Some("q"), _) => break,
            (None, _) => {}
            _ => println!("Unknown command; type 'help'"),
        }
    }

    println!("Bye.");
}

/// Dispatch a navigation target to its view or workflow.
async fn navigate(session: &mut Session, route: Route) {
    match route {
        Route::EmployeeList => {
            session.load_employees().await;
            print!("{}", views::render_list(&session.state));
            let _ = session.take_notice();
        }
        Route::CreateEmployee => {
            session.enter_create();
            run_form(session, FormMode::Create).await;
        }
        Route::EditEmployee(id) => {
            session.enter_edit(&id);
            run_form(session, FormMode::Edit(id)).await;
        }
        Route::EmployeeProfile(id) => {
            print!("{}", views::render_detail(&session.state, &id));
        }
        Route::NotFound => {
            print!("{}", views::render_not_found("the requested path"));
        }
    }
}

/// Drive the form until it is saved or the user leaves it.
async fn run_form(session: &mut Session, mode: FormMode) {
    let title = match &mode {
        FormMode::Create => "Create Employee".to_string(),
        FormMode::Edit(id) => format!("Update Employee {id}"),
    };
    println!("-- {title} (empty input keeps the shown value, /cancel leaves the form)");

    loop {
        for (field, label) in [
            (DraftField::Name, "Name"),
            (DraftField::Email, "Email"),
            (DraftField::PhoneNumber, "Phone number"),
            (DraftField::Address, "Address"),
        ] {
            let current = match field {
                DraftField::Name => session.state.draft.name.clone(),
                DraftField::Email => session.state.draft.email.clone(),
                DraftField::PhoneNumber => session.state.draft.phone_number.clone(),
                DraftField::Address => session.state.draft.address.clone(),
            };
            let Some(value) = prompt_field(label, &current) else {
                session.leave_form();
                println!("Form cancelled.");
                return;
            };
            session.set_field(field, value);
        }

        match session.submit(mode.clone()).await {
            SubmitOutcome::Saved => {
                println!("Saved.");
                // Back to the list view.
                session.load_employees().await;
                print!("{}", views::render_list(&session.state));
                return;
            }
            SubmitOutcome::Invalid => {
                print_field_errors(session);
            }
            SubmitOutcome::Failed => {
                if let Some(error) = &session.state.form_error {
                    println!("{error}");
                }
                let retry = read_line("Retry? [y/N]: ").unwrap_or_default();
                if !retry.eq_ignore_ascii_case("y") {
                    session.leave_form();
                    return;
                }
            }
        }
    }
}

/// The two-phase deletion workflow with its confirmation prompt.
async fn delete_flow(session: &mut Session, id: &str) {
    session.request_delete(id.to_string());

    let answer = read_line(&format!("Delete employee {id}? [y/N]: ")).unwrap_or_default();
    if !answer.eq_ignore_ascii_case("y") {
        session.cancel_delete();
        return;
    }

    session.confirm_delete().await;

    // Blocking acknowledgment on success; failures are already logged.
    if let Some(notice) = session.take_notice() {
        read_line(&format!("{notice} -- press Enter to continue")).unwrap_or_default();
        print!("{}", views::render_list(&session.state));
    } else {
        println!("Delete failed; the record was left unchanged.");
    }
}

fn print_field_errors(session: &Session) {
    let errors = &session.state.errors;
    for message in [
        &errors.name,
        &errors.email,
        &errors.phone_number,
        &errors.address,
    ] {
        if !message.is_empty() {
            println!("  ! {message}");
        }
    }
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 list (l)          show all employees\n\
         \x20 view <id> (v)     show one employee's profile\n\
         \x20 create (c)        create a new employee\n\
         \x20 edit <id> (e)     edit an existing employee\n\
         \x20 delete <id> (d)   delete an employee (asks for confirmation)\n\
         \x20 go <path>         navigate by path, e.g. /employee-profile/3\n\
         \x20 quit (q)          exit"
    );
}

/// Prompt for one field; empty input keeps the current value, `/cancel`
/// leaves the form.
fn prompt_field(label: &str, current: &str) -> Option<String> {
    let shown = if current.is_empty() {
        String::new()
    } else {
        format!(" [{current}]")
    };

    let input = read_line(&format!("{label}{shown}: "))?;
    if input == "/cancel" {
        return None;
    }

    Some(if input.is_empty() {
        current.to_string()
    } else {
        input
    })
}

/// Read one trimmed line from stdin; `None` on EOF or I/O error.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}
