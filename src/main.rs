use clap::Parser;
use coursenotes::application::{init::init, ConfigService, Notebook};
use coursenotes::cli::{
    format_course_list, format_note_list, format_reading_view, format_text_list,
    format_textbook_list, Cli, Commands, CourseAction, NoteAction, TextAction, TextbookAction,
};
use coursenotes::error::CoursenotesError;
use coursenotes::infrastructure::{logging, JsonFileStore, Workspace};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the workspace, start logging at the configured level and load all collections
fn open_notebook() -> Result<Notebook<JsonFileStore>, CoursenotesError> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    logging::init(&config.log_level);

    Ok(Notebook::open(workspace.store(&config), config.references))
}

fn run(cli: Cli) -> Result<(), CoursenotesError> {
    match cli.command {
        Commands::Init { path } => {
            logging::init("warn");
            let workspace = init(&path)?;
            println!(
                "Initialized coursenotes workspace at {}",
                workspace.root().display()
            );
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("data_dir = {}", config.data_dir.display());
                println!("references = {}", config.references);
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: coursenotes config [--list | <key> [<value>]]");
                println!("Valid keys: data_dir, references, log_level, created");
            }
            Ok(())
        }
        Commands::Course { action } => {
            let mut notebook = open_notebook()?;
            match action {
                CourseAction::Add { name } => {
                    let course = notebook.create_course(&name)?;
                    println!("Added course {}: {}", course.id, course.course_name);
                }
                CourseAction::List => {
                    print!("{}", ensure_newline(format_course_list(notebook.list_courses())));
                }
            }
            Ok(())
        }
        Commands::Textbook { action } => {
            let mut notebook = open_notebook()?;
            match action {
                TextbookAction::Add { course, name } => {
                    let textbook = notebook.create_textbook(course, &name)?;
                    println!(
                        "Added textbook {}: {}",
                        textbook.id, textbook.textbook_name
                    );
                }
                TextbookAction::List { course } => {
                    let textbooks = notebook.textbooks_for_course(course);
                    print!("{}", ensure_newline(format_textbook_list(&textbooks)));
                }
            }
            Ok(())
        }
        Commands::Text { action } => {
            let mut notebook = open_notebook()?;
            match action {
                TextAction::Add {
                    course,
                    textbook,
                    content,
                } => {
                    let text = notebook.create_original_text(course, textbook, &content)?;
                    println!("Added text {}", text.id);
                }
                TextAction::List { course, textbook } => {
                    let texts = notebook.texts_for_course_and_textbook(course, textbook);
                    print!("{}", ensure_newline(format_text_list(&texts)));
                }
            }
            Ok(())
        }
        Commands::Note { action } => {
            let mut notebook = open_notebook()?;
            match action {
                NoteAction::Add {
                    course,
                    textbook,
                    text,
                    note,
                } => {
                    let note = notebook.create_note(course, textbook, text, &note)?;
                    println!("Added note {}", note.id);
                }
                NoteAction::List {
                    course,
                    textbook,
                    text,
                } => {
                    let notes = notebook.notes_for_text(course, textbook, text);
                    print!("{}", ensure_newline(format_note_list(&notes)));
                }
            }
            Ok(())
        }
        Commands::Show { course, textbook } => {
            let notebook = open_notebook()?;
            let view = notebook.reading_view(course, textbook);
            print!("{}", ensure_newline(format_reading_view(&view)));
            Ok(())
        }
    }
}

fn ensure_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
