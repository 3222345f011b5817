//! Line-oriented terminal driver.
//!
//! Reads one command per line from stdin, translates it into an
//! [`Event`], and executes the actions the handler returns. Markup goes to
//! stdout; diagnostics go to stderr via tracing. The driver makes no
//! decisions of its own: every behavior lives in the handler and the
//! renderers where it can be tested.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use vouch::app::{handle_event, Action, AppState, Event};
use vouch::domain::{NewPerson, NewReview};
use vouch::ui::components::render_notice;
use vouch::{initialize, observability, Config};

fn main() {
    let exit_code = match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("vouch: {e}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run() -> vouch::Result<()> {
    let config = Config::load()?;
    observability::init_tracing(config.trace_level.as_deref().unwrap_or("info"));
    tracing::debug!(base_url = %config.api_base_url, "starting");

    let mut gateway = initialize(&config)?;
    let mut state = AppState::new(config.notice_ttl());

    dispatch(&mut state, &mut gateway, &Event::PageLoad)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "vouch> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{USAGE}");
                continue;
            }
            _ => {}
        }

        match parse_command(line) {
            Ok(event) => dispatch(&mut state, &mut gateway, &event)?,
            Err(usage) => println!("{usage}"),
        }
    }

    Ok(())
}

const USAGE: &str = "\
commands:
  search <query>                                    find people
  show <person-id>                                  person profile with reviews
  login <username> <password>
  register <username> <email> <password> <confirm> [full name...]
  add-person <name> | [company] | [job] | [city] | [area] | [category] | [phone] | [whatsapp]
  review <person-id> <rating 1-5> <comment> | [title] | [category]
  logout
  help
  quit";

/// Runs one event through the handler, then shows notices and executes the
/// returned actions in order.
fn dispatch(state: &mut AppState, gateway: &mut vouch::Gateway, event: &Event) -> vouch::Result<()> {
    let actions = handle_event(state, gateway, event)?;

    state.notices.sweep(Instant::now());
    for notice in state.notices.active() {
        println!("{}", render_notice(notice));
    }

    for action in actions {
        match action {
            Action::Display(markup) => println!("{markup}"),
            Action::Navigate(route) => println!("→ {route}"),
            Action::NavigateAfter { route, delay } => {
                std::thread::sleep(delay);
                println!("→ {route}");
            }
        }
    }

    Ok(())
}

/// Parses one input line into an event.
///
/// Returns a usage string when the line does not form a complete command.
fn parse_command(line: &str) -> Result<Event, String> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "search" => {
            if rest.is_empty() {
                return Err("usage: search <query>".to_string());
            }
            Ok(Event::SubmitSearch { query: rest.to_string() })
        }

        "show" => {
            if rest.is_empty() {
                return Err("usage: show <person-id>".to_string());
            }
            Ok(Event::ViewPerson { id: rest.to_string() })
        }

        "login" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts[..] {
                [username, password] => Ok(Event::SubmitLogin {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                _ => Err("usage: login <username> <password>".to_string()),
            }
        }

        "register" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            if parts.len() < 4 {
                return Err(
                    "usage: register <username> <email> <password> <confirm> [full name...]"
                        .to_string(),
                );
            }
            let full_name = if parts.len() > 4 {
                Some(parts[4..].join(" "))
            } else {
                None
            };
            Ok(Event::SubmitRegister {
                username: parts[0].to_string(),
                email: parts[1].to_string(),
                full_name,
                password: parts[2].to_string(),
                confirm_password: parts[3].to_string(),
            })
        }

        "add-person" => {
            let fields: Vec<Option<String>> = rest.split('|').map(optional_field).collect();
            let name = match fields.first().cloned().flatten() {
                Some(name) => name,
                None => return Err("usage: add-person <name> | [company] | [job] | [city] | [area] | [category] | [phone] | [whatsapp]".to_string()),
            };
            let field = |i: usize| fields.get(i).cloned().flatten();
            Ok(Event::SubmitPerson(NewPerson {
                name,
                company: field(1),
                job_title: field(2),
                city: field(3),
                area: field(4),
                category: field(5),
                phone: field(6),
                whatsapp_number: field(7),
            }))
        }

        "review" => {
            let parts: Vec<&str> = rest.splitn(3, char::is_whitespace).collect();
            let usage = "usage: review <person-id> <rating 1-5> <comment> | [title] | [category]";
            let [person_id, rating, remainder] = parts[..] else {
                return Err(usage.to_string());
            };
            let rating: u8 = rating.parse().map_err(|_| usage.to_string())?;

            let mut sections = remainder.split('|').map(optional_field);
            let comment = match sections.next().flatten() {
                Some(comment) => comment,
                None => return Err(usage.to_string()),
            };
            Ok(Event::SubmitReview(NewReview {
                person_id: person_id.to_string(),
                rating,
                comment,
                title: sections.next().flatten(),
                category: sections.next().flatten(),
            }))
        }

        "logout" => Ok(Event::Logout),

        other => Err(format!("unknown command {other:?} (try `help`)")),
    }
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_command;
    use vouch::app::Event;

    #[test]
    fn search_takes_the_rest_of_the_line() {
        assert_eq!(
            parse_command("search asha the plumber"),
            Ok(Event::SubmitSearch {
                query: "asha the plumber".to_string()
            })
        );
    }

    #[test]
    fn register_joins_trailing_words_into_the_full_name() {
        let event = parse_command("register asha asha@example.com pw pw Asha K").expect("parse");
        match event {
            Event::SubmitRegister { full_name, .. } => {
                assert_eq!(full_name.as_deref(), Some("Asha K"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn add_person_maps_pipe_fields_and_skips_blanks() {
        let event = parse_command("add-person Ravi T | Acme | | Pune").expect("parse");
        match event {
            Event::SubmitPerson(person) => {
                assert_eq!(person.name, "Ravi T");
                assert_eq!(person.company.as_deref(), Some("Acme"));
                assert_eq!(person.job_title, None);
                assert_eq!(person.city.as_deref(), Some("Pune"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn review_splits_comment_title_and_category() {
        let event = parse_command("review p1 5 Great work throughout. | Reliable | plumbing")
            .expect("parse");
        match event {
            Event::SubmitReview(review) => {
                assert_eq!(review.person_id, "p1");
                assert_eq!(review.rating, 5);
                assert_eq!(review.comment, "Great work throughout.");
                assert_eq!(review.title.as_deref(), Some("Reliable"));
                assert_eq!(review.category.as_deref(), Some("plumbing"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn malformed_commands_return_usage() {
        assert!(parse_command("login asha").is_err());
        assert!(parse_command("review p1 notanumber hello").is_err());
        assert!(parse_command("frobnicate").is_err());
    }
}
