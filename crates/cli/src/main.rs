use std::process::ExitCode;

use clap::Parser;
use log::debug;

use roster_cli::cli_args::Args;
use roster_cli::interaction::input;
use roster_cli::interaction::{MenuChoice, Ui};
use roster_core::config;
use roster_core::error::Result;
use roster_core::roster::{DeleteOutcome, Roster};
use roster_core::student::{Student, StudentUpdate};

fn execute() -> Result<()> {
    let args = Args::parse();

    let capacity = config::get_capacity(&args.capacity);
    debug!("Roster capacity: {capacity}");

    let mut roster = Roster::with_capacity(capacity);
    let ui = Ui::new(!args.no_color);

    loop {
        ui.clear_screen()?;
        ui.header()?;
        ui.menu()?;

        let selection = input::prompt_menu_choice(&ui)?;

        match MenuChoice::from_selection(selection) {
            Some(MenuChoice::AddStudent) => {
                add_student(&mut roster, &ui)?;
                input::pause(&ui)?;
            }
            Some(MenuChoice::ListStudents) => {
                list_students(&roster, &ui)?;
                input::pause(&ui)?;
            }
            Some(MenuChoice::DeleteStudent) => {
                delete_student(&mut roster, &ui)?;
                input::pause(&ui)?;
            }
            Some(MenuChoice::SearchStudents) => {
                search_students(&roster, &ui)?;
                input::pause(&ui)?;
            }
            Some(MenuChoice::ModifyStudent) => {
                modify_student(&mut roster, &ui)?;
                input::pause(&ui)?;
            }
            Some(MenuChoice::Exit) => {
                ui.status("Exiting. Thank you for using our system!")?;
                return Ok(());
            }
            None => {
                ui.error("Invalid choice. Please enter a number between 1 and 6.")?;
                input::pause(&ui)?;
            }
        }
    }
}

fn add_student(roster: &mut Roster, ui: &Ui) -> Result<()> {
    if roster.is_full() {
        ui.warning(&format!(
            "Maximum student limit ({}) reached! Cannot add more students.",
            roster.capacity()
        ))?;
        return Ok(());
    }

    ui.section("Add New Student")?;

    let name = input::prompt_required(ui, "Enter student name: ", "Name")?;
    let phone = input::prompt_required(ui, "Enter phone number: ", "Phone number")?;
    let id = input::prompt_new_id(ui, roster)?;
    let department = input::prompt_required(ui, "Enter department: ", "Department")?;

    match roster.add(Student::new(name, phone, id, department)) {
        Ok(()) => ui.success("Student added successfully!"),
        Err(e) => ui.error(&e.to_string()),
    }
}

fn list_students(roster: &Roster, ui: &Ui) -> Result<()> {
    if roster.is_empty() {
        ui.warning("No student records found.")?;
        return Ok(());
    }

    ui.section(&format!("Student List ({} records)", roster.len()))?;
    for (position, student) in roster.iter().enumerate() {
        ui.record(position, student)?;
    }

    Ok(())
}

fn delete_student(roster: &mut Roster, ui: &Ui) -> Result<()> {
    ui.section("Delete Student")?;
    let id = input::prompt_line(ui, "Enter Student ID to delete: ")?;

    let Some(student) = roster.find_by_id(&id) else {
        ui.error(&format!("Student with ID '{id}' not found."))?;
        return Ok(());
    };

    let confirmed = input::confirm_deletion(ui, student)?;

    match roster.delete(&id, confirmed) {
        Ok(DeleteOutcome::Deleted(deleted)) => {
            ui.success(&format!("Student with ID {} deleted successfully!", deleted.id))
        }
        Ok(DeleteOutcome::Cancelled) => ui.notice("Operation cancelled. Student not deleted."),
        Err(e) => ui.error(&e.to_string()),
    }
}

fn search_students(roster: &Roster, ui: &Ui) -> Result<()> {
    ui.section("Search Student by Name")?;
    let fragment = input::prompt_line(ui, "Enter name (or part of name) to search: ")?;

    ui.section("Search Results")?;
    let matches = roster.search_by_name(&fragment);

    if matches.is_empty() {
        ui.info(&format!("No matching student found for '{fragment}'."))?;
        return Ok(());
    }

    for (position, student) in matches {
        ui.record_with_id(position, student)?;
    }

    Ok(())
}

fn modify_student(roster: &mut Roster, ui: &Ui) -> Result<()> {
    ui.section("Modify Student Details")?;
    let id = input::prompt_line(ui, "Enter Student ID to modify: ")?;

    let Some(current) = roster.find_by_id(&id) else {
        ui.error(&format!("Student with ID '{id}' not found."))?;
        return Ok(());
    };
    // Clone so the prompts can show current values while the roster is free
    // to be mutated afterwards
    let current = current.clone();

    ui.status(&format!(
        "Student found (Name: {}). Enter new details (leave blank to keep current value):",
        current.name
    ))?;

    let update = StudentUpdate {
        name: input::prompt_optional(ui, &format!("Enter new name (current: {}): ", current.name))?,
        phone: input::prompt_optional(
            ui,
            &format!("Enter new phone number (current: {}): ", current.phone),
        )?,
        department: input::prompt_optional(
            ui,
            &format!("Enter new department (current: {}): ", current.department),
        )?,
    };

    match roster.modify(&id, &update) {
        Ok(student) => ui.success(&format!("Student with ID {} updated successfully!", student.id)),
        Err(e) => ui.error(&e.to_string()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
